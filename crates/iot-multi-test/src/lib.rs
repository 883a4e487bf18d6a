#![cfg(not(target_arch = "wasm32"))]
// Only exposed on unit and integration testing, not compiled to Wasm.

use cosmwasm_std::Env;
use cw_multi_test::App;

pub use iot_ac_control::testing::AcControlContract;
pub use iot_library::testing::TestingContract;
pub use iot_thermal_data::testing::ThermalDataContract;

pub struct IotMultiTest {
    pub thermal_data: ThermalDataContract,
    pub ac_control: AcControlContract,
}

pub struct IotMultiTestBuilder {
    app: App,
    env: Env,
    init_ledger: bool,
}

/// [IotMultiTest] provides a convenient way to bootstrap both IoT heat control contracts
/// on the same [App], for testing a client that reads thermal data and AC state together.
impl IotMultiTestBuilder {
    /// Creates a new instance of [IotMultiTestBuilder] with the given [App] and [Env].
    /// The thermal data contract is seeded by default.
    pub fn new(app: App, env: Env) -> Self {
        Self {
            app,
            env,
            init_ledger: true,
        }
    }

    /// Whether the [ThermalDataContract] runs `InitLedger` on instantiation.
    pub fn init_ledger(mut self, init_ledger: bool) -> Self {
        self.init_ledger = init_ledger;
        self
    }

    /// Builds the [IotMultiTest] instance, returning the [App] the contracts live in.
    /// It instantiates the [ThermalDataContract] and the [AcControlContract].
    pub fn build(mut self) -> (App, IotMultiTest) {
        let thermal_data = ThermalDataContract::new(
            &mut self.app,
            &self.env,
            Some(iot_thermal_data::msg::InstantiateMsg {
                init_ledger: self.init_ledger,
            }),
        );
        let ac_control = AcControlContract::new(&mut self.app, &self.env, None);

        (
            self.app,
            IotMultiTest {
                thermal_data,
                ac_control,
            },
        )
    }
}
