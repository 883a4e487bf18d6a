use crate::state::ThermalData;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::SignedDecimal;

#[cw_serde]
pub struct InstantiateMsg {
    /// Run `InitLedger` as part of instantiation, seeding the default thermal data.
    #[serde(default)]
    pub init_ledger: bool,
}

#[cw_serde]
#[derive(strum::Display)]
pub enum ExecuteMsg {
    /// Write the seed thermal data, overwriting any record under the same ids.
    InitLedger {},

    CreateThermalData {
        /// Sensor id, unique among thermal data
        id: String,
        /// Degrees Celsius, as a decimal string
        aggregated_temperature: SignedDecimal,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ThermalData)]
    ReadThermalData { id: String },

    #[returns(ExistsResponse)]
    ThermalDataExists { id: String },
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
