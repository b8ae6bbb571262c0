use std::collections::btree_map::Iter;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{FromValue, Value};

/// Flat key-value store shared by every component of a save or load pass.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Datamap {
    entries: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DatamapError {
    KeyCollision { key: String },
    KeyNotFound { key: String },
    Malformed { key: String, expected: String },
}

impl Datamap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Adds a new entry, an existing key is never overwritten.
    pub fn insert<V: Into<Value>>(&mut self, key: String, value: V) -> Result<(), DatamapError> {
        if self.entries.contains_key(&key) {
            return Err(DatamapError::KeyCollision { key });
        }
        self.entries.insert(key, value.into());
        Ok(())
    }

    pub fn replace<V: Into<Value>>(&mut self, key: String, value: V) -> Option<Value> {
        self.entries.insert(key, value.into())
    }

    pub fn get<T: FromValue>(&self, key: &str) -> Result<T, DatamapError> {
        let value = self
            .entries
            .get(key)
            .ok_or_else(|| DatamapError::KeyNotFound {
                key: key.to_string(),
            })?;
        T::from_value(value).ok_or_else(|| DatamapError::Malformed {
            key: key.to_string(),
            expected: T::EXPECTED.to_string(),
        })
    }

    #[inline]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn as_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        let config = bincode::config::standard();
        bincode::encode_to_vec(self, config)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        let config = bincode::config::standard();
        let (datamap, _) = bincode::decode_from_slice(data, config)?;
        Ok(datamap)
    }
}

impl<'a> IntoIterator for &'a Datamap {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
