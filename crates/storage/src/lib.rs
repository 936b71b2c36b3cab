#![warn(clippy::pedantic)]

use std::collections::VecDeque;

use zipprat_web_app::{KeyValueRepository, log};

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;
pub use memory::MemoryStorage;

const KEY_LOG: &str = "log";
const LOG_CAPACITY: usize = 100;

/// Log entries kept in a key-value repository, newest first.
pub struct Log<R> {
    repository: R,
}

impl<R> Log<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: KeyValueRepository + 'static> log::Repository for Log<R> {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match self.repository.read_item(KEY_LOG) {
            Ok(Some(entries)) => serde_json::from_str(&entries)
                .map_err(|err| log::Error::Unknown(err.to_string())),
            Ok(None) => Ok(VecDeque::new()),
            Err(err) => Err(log::Error::Unknown(err.to_string())),
        }
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        // Unreadable entries are replaced instead of blocking all further logging.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.push_front(entry);
        entries.truncate(LOG_CAPACITY);
        let serialized =
            serde_json::to_string(&entries).map_err(|err| log::Error::Unknown(err.to_string()))?;
        self.repository
            .write_item(KEY_LOG, &serialized)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
