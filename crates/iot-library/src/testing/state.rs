use crate::world_state::{WorldState, WorldStateError};
use std::collections::BTreeMap;

/// A [WorldState] that can be told to fail, for exercising the accessor error paths.
/// Reads are served from an in-memory map unless made unavailable.
/// Writes succeed until the configured budget of successful writes is spent.
#[derive(Debug, Default)]
pub struct UnavailableWorldState {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
    reads_unavailable: bool,
    writes_remaining: Option<usize>,
}

impl UnavailableWorldState {
    /// Every read fails.
    pub fn reads() -> Self {
        Self {
            reads_unavailable: true,
            ..Self::default()
        }
    }

    /// The first `n` writes succeed, every write after that fails.
    pub fn writes_after(n: usize) -> Self {
        Self {
            writes_remaining: Some(n),
            ..Self::default()
        }
    }

    /// Seed raw bytes under `key`, bypassing the write budget.
    pub fn with_raw(mut self, key: &[u8], value: &[u8]) -> Self {
        self.entries.insert(key.to_vec(), value.to_vec());
        self
    }

    /// Raw bytes under `key`, regardless of read availability.
    pub fn raw(&self, key: &[u8]) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WorldState for UnavailableWorldState {
    fn get_state(&self, key: &[u8]) -> Result<Option<Vec<u8>>, WorldStateError> {
        if self.reads_unavailable {
            return Err(WorldStateError::Unavailable("read".to_string()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn put_state(&mut self, key: &[u8], value: &[u8]) -> Result<(), WorldStateError> {
        match self.writes_remaining {
            Some(0) => return Err(WorldStateError::Unavailable("write".to_string())),
            Some(n) => self.writes_remaining = Some(n - 1),
            None => {}
        }
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_unavailable() {
        let state = UnavailableWorldState::reads().with_raw(b"key", b"value");
        assert_eq!(
            state.get_state(b"key"),
            Err(WorldStateError::Unavailable("read".to_string()))
        );
        assert_eq!(state.raw(b"key"), Some(b"value".as_slice()));
    }

    #[test]
    fn write_budget() {
        let mut state = UnavailableWorldState::writes_after(2);
        state.put_state(b"a", b"1").unwrap();
        state.put_state(b"b", b"2").unwrap();
        assert_eq!(
            state.put_state(b"c", b"3"),
            Err(WorldStateError::Unavailable("write".to_string()))
        );

        assert_eq!(state.len(), 2);
        assert_eq!(state.get_state(b"c"), Ok(None));
    }

    #[test]
    fn unlimited_by_default() {
        let mut state = UnavailableWorldState::default();
        for i in 0..10u8 {
            state.put_state(&[i], &[i]).unwrap();
        }
        assert_eq!(state.len(), 10);
    }
}
