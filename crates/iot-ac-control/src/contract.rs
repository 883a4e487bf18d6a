#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

const CONTRACT_NAME: &str = concat!("crates.io:", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {}
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::GetAcTemperature { id } => {
            Ok(to_json_binary(&query::get_ac_temperature(deps.storage, &id)?)?)
        }
        QueryMsg::AcUnitExists { id } => {
            Ok(to_json_binary(&query::ac_unit_exists(deps.storage, &id)?)?)
        }
    }
}

pub mod query {
    use super::*;
    use crate::msg::ExistsResponse;
    use crate::state::{AcUnit, AC_UNITS};
    use iot_library::world_state::WorldState;

    /// Current output temperature of the AC unit `id`.
    pub fn get_ac_temperature<W>(state: &W, id: &str) -> Result<AcUnit, ContractError>
    where
        W: WorldState + ?Sized,
    {
        Ok(AC_UNITS.load(state, id)?)
    }

    pub fn ac_unit_exists<W>(state: &W, id: &str) -> Result<ExistsResponse, ContractError>
    where
        W: WorldState + ?Sized,
    {
        Ok(ExistsResponse(AC_UNITS.has(state, id)?))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("method", "migrate"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::ExistsResponse;
    use crate::state::{AcUnit, AC_UNITS};
    use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env};
    use chrono::{TimeZone, Utc};
    use cosmwasm_std::{from_json, SignedDecimal, Storage};
    use iot_library::record::RecordError;
    use iot_library::testing::UnavailableWorldState;
    use std::str::FromStr;

    fn ac_unit(id: &str, ac_output_temperature: &str) -> AcUnit {
        AcUnit {
            id: id.to_string(),
            ac_output_temperature: SignedDecimal::from_str(ac_output_temperature).unwrap(),
            time_stamp: Some(Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap()),
        }
    }

    #[test]
    fn instantiate_msg() {
        let mut deps = mock_dependencies();

        let info = message_info(&deps.api.addr_make("sender"), &[]);
        let res = instantiate(deps.as_mut(), mock_env(), info, InstantiateMsg {}).unwrap();
        assert_eq!(res.attributes, vec![("method", "instantiate")]);

        let version = cw2::get_contract_version(&deps.storage).unwrap();
        assert_eq!(version.contract, CONTRACT_NAME);
    }

    #[test]
    fn get_ac_temperature() {
        let mut deps = mock_dependencies();
        AC_UNITS
            .save(&mut deps.storage, "ac1", &ac_unit("ac1", "22.5"))
            .unwrap();

        let unit = query::get_ac_temperature(&deps.storage, "ac1").unwrap();
        assert_eq!(unit, ac_unit("ac1", "22.5"));
    }

    #[test]
    fn get_ac_temperature_not_found() {
        let deps = mock_dependencies();

        let err = query::get_ac_temperature(&deps.storage, "ac404").unwrap_err();
        assert_eq!(
            err,
            ContractError::Record(RecordError::NotFound {
                kind: "AC Unit",
                id: "ac404".to_string(),
            })
        );
        assert_eq!(err.to_string(), "AC Unit ac404 does not exist");
    }

    #[test]
    fn get_ac_temperature_malformed() {
        let mut deps = mock_dependencies();
        deps.storage.set(
            &AC_UNITS.key("ac1"),
            br#"{"ID":"ac1","acOutputTemperature":"20","timeStamp":"soon"}"#,
        );

        let err = query::get_ac_temperature(&deps.storage, "ac1").unwrap_err();
        assert!(matches!(
            err,
            ContractError::Record(RecordError::Decode { .. })
        ));
    }

    #[test]
    fn ac_unit_exists() {
        let mut deps = mock_dependencies();

        let res = query::ac_unit_exists(&deps.storage, "ac1").unwrap();
        assert!(!res.exists());

        AC_UNITS
            .save(&mut deps.storage, "ac1", &ac_unit("ac1", "19"))
            .unwrap();

        let res = query::ac_unit_exists(&deps.storage, "ac1").unwrap();
        assert!(res.exists());
        let res = query::ac_unit_exists(&deps.storage, "ac2").unwrap();
        assert!(!res.exists());
    }

    #[test]
    fn store_unavailable() {
        let state = UnavailableWorldState::reads();

        let err = query::ac_unit_exists(&state, "ac1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to read from world state: world state unavailable: read"
        );

        let err = query::get_ac_temperature(&state, "ac1").unwrap_err();
        assert!(matches!(
            err,
            ContractError::Record(RecordError::Store { .. })
        ));
    }

    #[test]
    fn query_entry_point() {
        let mut deps = mock_dependencies();
        AC_UNITS
            .save(&mut deps.storage, "ac1", &ac_unit("ac1", "21"))
            .unwrap();

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::GetAcTemperature {
                id: "ac1".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            res.as_slice(),
            br#"{"ID":"ac1","acOutputTemperature":"21","timeStamp":"2023-11-14T22:13:20Z"}"#
        );
        let unit: AcUnit = from_json(&res).unwrap();
        assert_eq!(unit, ac_unit("ac1", "21"));

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::AcUnitExists {
                id: "ac2".to_string(),
            },
        )
        .unwrap();
        let exists: ExistsResponse = from_json(&res).unwrap();
        assert!(!exists.exists());
    }
}
