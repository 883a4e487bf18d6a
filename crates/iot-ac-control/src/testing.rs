#![cfg(not(target_arch = "wasm32"))]

use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{AcUnit, AC_UNITS};
use cosmwasm_std::{Addr, Empty, Env};
use cw_multi_test::{App, Contract, ContractWrapper};
use iot_library::testing::TestingContract;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AcControlContract {
    pub addr: Addr,
    pub init: InstantiateMsg,
}

impl AcControlContract {
    /// Provision an AC unit directly in the contract storage,
    /// standing in for the out-of-contract process that registers units.
    pub fn provision(&self, app: &mut App, unit: &AcUnit) {
        let mut storage = app.contract_storage_mut(&self.addr);
        AC_UNITS.save(&mut *storage, &unit.id, unit).unwrap();
    }
}

impl TestingContract<InstantiateMsg, ExecuteMsg, QueryMsg> for AcControlContract {
    fn wrapper() -> Box<dyn Contract<Empty>> {
        Box::new(
            ContractWrapper::new(
                crate::contract::execute,
                crate::contract::instantiate,
                crate::contract::query,
            )
            .with_migrate(crate::contract::migrate),
        )
    }

    fn default_init(_app: &mut App, _env: &Env) -> InstantiateMsg {
        InstantiateMsg {}
    }

    fn new(app: &mut App, env: &Env, msg: Option<InstantiateMsg>) -> Self {
        let init = msg.unwrap_or(Self::default_init(app, env));
        let code_id = Self::store_code(app);
        let addr = Self::instantiate(app, code_id, "ac_control", &init);
        Self { addr, init }
    }

    fn addr(&self) -> &Addr {
        &self.addr
    }
}
