use log::{error, warn};
use serde::{Serialize, de::DeserializeOwned};
use zipprat_domain::WriteError;

use crate::KeyValueRepository;

/// A value mirrored to a slot of a key-value repository.
///
/// The value is loaded from the slot on creation. Every change is written to the slot before it
/// becomes visible through [`PersistedState::get`], so the in-memory value always equals the
/// last value that was stored successfully.
pub struct PersistedState<T, R> {
    repository: R,
    key: String,
    value: T,
}

impl<T, R> PersistedState<T, R>
where
    T: Serialize + DeserializeOwned,
    R: KeyValueRepository,
{
    /// Loads the value stored under `key`, falling back to `default` if the slot is empty,
    /// unreadable or contains data that cannot be parsed.
    pub fn new(repository: R, key: &str, default: T) -> Self {
        let value = match repository.read_item(key) {
            Ok(Some(serialized)) => match serde_json::from_str(&serialized) {
                Ok(value) => value,
                Err(err) => {
                    warn!("failed to parse stored value of {key}, using default: {err}");
                    default
                }
            },
            Ok(None) => default,
            Err(err) => {
                error!("failed to read {key}, using default: {err}");
                default
            }
        };

        Self {
            repository,
            key: key.to_string(),
            value,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) -> Result<(), WriteError> {
        match self.write(&value) {
            Ok(()) => {
                self.value = value;
                Ok(())
            }
            Err(err) => {
                error!("failed to write {}: {err}", self.key);
                Err(err)
            }
        }
    }

    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> Result<(), WriteError> {
        let value = f(&self.value);
        self.set(value)
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    fn write(&self, value: &T) -> Result<(), WriteError> {
        let serialized =
            serde_json::to_string(value).map_err(|err| WriteError::Serialization(Box::new(err)))?;
        self.repository.write_item(&self.key, &serialized)?;
        Ok(())
    }
}
