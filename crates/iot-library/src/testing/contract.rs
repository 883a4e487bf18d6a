use cosmwasm_std::{to_json_binary, Addr, Empty, Env, StdResult, WasmMsg};
use cw_multi_test::error::AnyResult;
use cw_multi_test::{App, AppResponse, Contract, Executor};
use serde::de::DeserializeOwned;

/// TestingContract is a trait that provides a common interface for setting up testing contracts.
pub trait TestingContract<IM, EM, QM>
where
    IM: serde::Serialize,
    EM: serde::Serialize,
    QM: serde::Serialize,
{
    fn wrapper() -> Box<dyn Contract<Empty>>;

    fn default_init(app: &mut App, env: &Env) -> IM;

    fn new(app: &mut App, env: &Env, msg: Option<IM>) -> Self;

    fn store_code(app: &mut App) -> u64 {
        app.store_code(Self::wrapper())
    }

    /// Instantiate with `admin` as the CosmWasm admin, who can later [TestingContract::migrate].
    fn instantiate(app: &mut App, code_id: u64, label: &str, msg: &IM) -> Addr {
        let admin = app.api().addr_make("admin");
        app.instantiate_contract(
            code_id,
            app.api().addr_make("sender"),
            msg,
            &[],
            label,
            Some(admin.to_string()),
        )
        .unwrap()
    }

    fn addr(&self) -> &Addr;

    fn execute(&self, app: &mut App, sender: &Addr, msg: &EM) -> AnyResult<AppResponse> {
        let msg_bin = to_json_binary(&msg).expect("cannot serialize ExecuteMsg");
        let execute_msg = WasmMsg::Execute {
            contract_addr: self.addr().to_string(),
            msg: msg_bin,
            funds: vec![],
        };

        app.execute(sender.clone(), execute_msg.into())
    }

    fn query<T: DeserializeOwned>(&self, app: &App, msg: &QM) -> StdResult<T> {
        app.wrap().query_wasm_smart(self.addr(), &msg)
    }

    /// Migrate to a freshly stored code of the same contract, sent by `admin`.
    fn migrate<MM: serde::Serialize>(&self, app: &mut App, msg: &MM) -> AnyResult<AppResponse> {
        let admin = app.api().addr_make("admin");
        let code_id = Self::store_code(app);
        app.migrate_contract(admin, self.addr().clone(), msg, code_id)
    }
}
