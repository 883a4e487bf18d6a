use cosmwasm_std::SignedDecimal;
use iot_library::record::RecordStore;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregated reading of an IoT thermal sensor, stored as JSON under its sensor id.
/// Unknown fields in stored JSON are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ThermalData {
    #[serde(rename = "ID")]
    pub id: String,
    /// Degrees Celsius, encoded as a decimal string (e.g. `"34.7"`)
    #[serde(rename = "aggregatedTemperature")]
    pub aggregated_temperature: SignedDecimal,
}

impl ThermalData {
    pub fn new(id: impl Into<String>, aggregated_temperature: SignedDecimal) -> Self {
        Self {
            id: id.into(),
            aggregated_temperature,
        }
    }
}

/// Thermal data records, keyed by sensor id.
pub const THERMAL_DATA: RecordStore<ThermalData> = RecordStore::new("thermal_data", "Thermal data");

/// Records written by `InitLedger`, in write order.
pub fn seed_thermal_data() -> [ThermalData; 3] {
    [
        ThermalData::new("thermal1", SignedDecimal::permille(34_700)),
        ThermalData::new("thermal2", SignedDecimal::permille(32_200)),
        ThermalData::new("thermal3", SignedDecimal::permille(36_100)),
    ]
}
