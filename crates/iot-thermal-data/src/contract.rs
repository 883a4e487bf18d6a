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
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mut response = Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("init_ledger", msg.init_ledger.to_string());

    if msg.init_ledger {
        let seeded = execute::init_ledger(deps.storage)?;
        response = response.add_events(seeded.events);
    }

    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let method = msg.to_string();
    let response = match msg {
        ExecuteMsg::InitLedger {} => execute::init_ledger(deps.storage),
        ExecuteMsg::CreateThermalData {
            id,
            aggregated_temperature,
        } => execute::create_thermal_data(deps.storage, id, aggregated_temperature),
    }?;

    Ok(response
        .add_attribute("method", method)
        .add_attribute("sender", info.sender))
}

pub mod execute {
    use super::*;
    use crate::state::{seed_thermal_data, ThermalData, THERMAL_DATA};
    use cosmwasm_std::{Event, SignedDecimal};
    use iot_library::world_state::WorldState;

    fn created_event(data: &ThermalData) -> Event {
        Event::new("ThermalDataCreated")
            .add_attribute("id", data.id.as_str())
            .add_attribute(
                "aggregated_temperature",
                data.aggregated_temperature.to_string(),
            )
    }

    /// Write the seed thermal data without checking for existing records.
    /// Stops at the first failure; seeds written before it stay written.
    pub fn init_ledger<W>(state: &mut W) -> Result<Response, ContractError>
    where
        W: WorldState + ?Sized,
    {
        let mut response = Response::new();
        for data in seed_thermal_data() {
            THERMAL_DATA.save(state, &data.id, &data)?;
            response = response.add_event(created_event(&data));
        }
        Ok(response)
    }

    /// Store new thermal data, fails if a record with `id` already exists.
    pub fn create_thermal_data<W>(
        state: &mut W,
        id: String,
        aggregated_temperature: SignedDecimal,
    ) -> Result<Response, ContractError>
    where
        W: WorldState + ?Sized,
    {
        let data = ThermalData::new(id, aggregated_temperature);
        THERMAL_DATA.create(state, &data.id, &data)?;

        Ok(Response::new().add_event(created_event(&data)))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::ReadThermalData { id } => {
            Ok(to_json_binary(&query::read_thermal_data(deps.storage, &id)?)?)
        }
        QueryMsg::ThermalDataExists { id } => {
            Ok(to_json_binary(&query::thermal_data_exists(deps.storage, &id)?)?)
        }
    }
}

pub mod query {
    use super::*;
    use crate::msg::ExistsResponse;
    use crate::state::{ThermalData, THERMAL_DATA};
    use iot_library::world_state::WorldState;

    pub fn read_thermal_data<W>(state: &W, id: &str) -> Result<ThermalData, ContractError>
    where
        W: WorldState + ?Sized,
    {
        Ok(THERMAL_DATA.load(state, id)?)
    }

    pub fn thermal_data_exists<W>(state: &W, id: &str) -> Result<ExistsResponse, ContractError>
    where
        W: WorldState + ?Sized,
    {
        Ok(ExistsResponse(THERMAL_DATA.has(state, id)?))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("method", "migrate"))
}
