use cosmwasm_std::Storage;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorldStateError {
    #[error("world state unavailable: {0}")]
    Unavailable(String),
}

/// Key-value accessor over the current world state.
/// Durability and ordering of writes are owned by the host chain.
pub trait WorldState {
    /// Returns the raw bytes stored under `key`, or `None` when the key is absent.
    fn get_state(&self, key: &[u8]) -> Result<Option<Vec<u8>>, WorldStateError>;

    fn put_state(&mut self, key: &[u8], value: &[u8]) -> Result<(), WorldStateError>;
}

impl<S: Storage + ?Sized> WorldState for S {
    fn get_state(&self, key: &[u8]) -> Result<Option<Vec<u8>>, WorldStateError> {
        Ok(self.get(key))
    }

    fn put_state(&mut self, key: &[u8], value: &[u8]) -> Result<(), WorldStateError> {
        self.set(key, value);
        Ok(())
    }
}
