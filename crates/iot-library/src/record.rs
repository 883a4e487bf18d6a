use crate::world_state::{WorldState, WorldStateError};
use cosmwasm_std::{from_json, to_json_vec};
use cw_storage_plus::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("Failed to {action} world state: {source}")]
    Store {
        action: &'static str,
        source: WorldStateError,
    },

    #[error("{kind} {id} does not exist")]
    NotFound { kind: &'static str, id: String },

    #[error("{kind} {id} already exists")]
    AlreadyExists { kind: &'static str, id: String },

    #[error("Failed to decode {kind} {id}: {msg}")]
    Decode {
        kind: &'static str,
        id: String,
        msg: String,
    },

    #[error("Failed to encode {kind} {id}: {msg}")]
    Encode {
        kind: &'static str,
        id: String,
        msg: String,
    },
}

impl RecordError {
    fn read(source: WorldStateError) -> Self {
        Self::Store {
            action: "read from",
            source,
        }
    }

    fn write(source: WorldStateError) -> Self {
        Self::Store {
            action: "write to",
            source,
        }
    }
}

/// JSON records of one kind, keyed by id under their own namespace.
///
/// Keys are laid out the same way as a `cw_storage_plus::Map<&str, T>` with the same namespace:
/// the length-prefixed namespace followed by the raw id.
/// Records of different kinds never share a key, even within the same world state.
pub struct RecordStore<T> {
    namespace: &'static str,
    kind: &'static str,
    record_type: PhantomData<T>,
}

impl<T> RecordStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// `kind` is the human-readable record name used in error messages.
    pub const fn new(namespace: &'static str, kind: &'static str) -> Self {
        Self {
            namespace,
            kind,
            record_type: PhantomData,
        }
    }

    /// The raw world state key for `id`.
    pub fn key(&self, id: &str) -> Vec<u8> {
        let path: Path<T> = Path::new(self.namespace.as_bytes(), &[id.as_bytes()]);
        path.to_vec()
    }

    /// Raw stored bytes, an empty value counts as absent.
    fn get_raw<W>(&self, state: &W, id: &str) -> Result<Option<Vec<u8>>, RecordError>
    where
        W: WorldState + ?Sized,
    {
        let bytes = state.get_state(&self.key(id)).map_err(RecordError::read)?;
        Ok(bytes.filter(|b| !b.is_empty()))
    }

    pub fn has<W>(&self, state: &W, id: &str) -> Result<bool, RecordError>
    where
        W: WorldState + ?Sized,
    {
        Ok(self.get_raw(state, id)?.is_some())
    }

    pub fn may_load<W>(&self, state: &W, id: &str) -> Result<Option<T>, RecordError>
    where
        W: WorldState + ?Sized,
    {
        match self.get_raw(state, id)? {
            Some(bytes) => from_json(&bytes)
                .map(Some)
                .map_err(|e| RecordError::Decode {
                    kind: self.kind,
                    id: id.to_string(),
                    msg: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Load the record under `id`, failing with [`RecordError::NotFound`] when absent.
    pub fn load<W>(&self, state: &W, id: &str) -> Result<T, RecordError>
    where
        W: WorldState + ?Sized,
    {
        self.may_load(state, id)?
            .ok_or_else(|| RecordError::NotFound {
                kind: self.kind,
                id: id.to_string(),
            })
    }

    /// Unconditionally write `record` under `id`, overwriting any existing value.
    pub fn save<W>(&self, state: &mut W, id: &str, record: &T) -> Result<(), RecordError>
    where
        W: WorldState + ?Sized,
    {
        let bytes = to_json_vec(record).map_err(|e| RecordError::Encode {
            kind: self.kind,
            id: id.to_string(),
            msg: e.to_string(),
        })?;
        state
            .put_state(&self.key(id), &bytes)
            .map_err(RecordError::write)
    }

    /// Write `record` under `id` only if nothing is stored there yet.
    pub fn create<W>(&self, state: &mut W, id: &str, record: &T) -> Result<(), RecordError>
    where
        W: WorldState + ?Sized,
    {
        if self.has(state, id)? {
            return Err(RecordError::AlreadyExists {
                kind: self.kind,
                id: id.to_string(),
            });
        }
        self.save(state, id, record)
    }
}
