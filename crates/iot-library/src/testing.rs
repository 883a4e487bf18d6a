#![cfg(not(target_arch = "wasm32"))]
// Only exposed on unit and integration testing, not compiled to Wasm.

mod contract;
mod state;

pub use contract::*;
pub use state::*;
