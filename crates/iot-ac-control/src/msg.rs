use crate::state::AcUnit;
use cosmwasm_schema::{cw_serde, QueryResponses};
use serde::{Deserialize, Serialize};

#[cw_serde]
pub struct InstantiateMsg {}

/// The AC control contract accepts no execute messages.
/// Adjusting the output temperature from thermal data is not supported yet,
/// so every execute call fails to decode.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The current output temperature of an AC unit
    #[returns(AcUnit)]
    GetAcTemperature { id: String },

    #[returns(ExistsResponse)]
    AcUnitExists { id: String },
}

#[cw_serde]
pub struct ExistsResponse(pub bool);

impl ExistsResponse {
    pub fn exists(&self) -> bool {
        self.0
    }
}

#[cw_serde]
pub struct MigrateMsg {}
