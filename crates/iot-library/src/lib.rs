pub mod testing;

/// This module contains the [`world_state::WorldState`] accessor.
/// - Every `cosmwasm_std::Storage` is a `WorldState`, so contracts pass `deps.storage` directly.
/// - An absent key is `Ok(None)`, never an error.
pub mod world_state;

pub mod record;
