use chrono::{DateTime, Utc};
use cosmwasm_std::SignedDecimal;
use iot_library::record::RecordStore;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output temperature of an AC unit, stored as JSON under the unit id.
/// Unknown fields in stored JSON are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AcUnit {
    #[serde(rename = "ID")]
    pub id: String,
    /// Degrees Celsius, encoded as a decimal string (e.g. `"22.5"`)
    #[serde(rename = "acOutputTemperature")]
    pub ac_output_temperature: SignedDecimal,
    /// When the output temperature was last set, as an RFC 3339 string.
    /// Omitted if never recorded.
    #[serde(
        rename = "timeStamp",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub time_stamp: Option<DateTime<Utc>>,
}

/// AC units, keyed by unit id.
/// Nothing in this contract writes to it; units are provisioned outside of it.
pub const AC_UNITS: RecordStore<AcUnit> = RecordStore::new("ac_units", "AC Unit");
