use std::{cell::RefCell, collections::VecDeque};

use chrono::Utc;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

thread_local! {
    static REPOSITORY: RefCell<Option<Box<dyn Repository>>> = const { RefCell::new(None) };
}

pub trait Repository: 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// Installs the logger and stores entries logged on the current thread in `repository`.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(repository: impl Repository, max_level: LevelFilter) -> Result<(), SetLoggerError> {
    REPOSITORY.with(|r| {
        if let Ok(mut r) = r.try_borrow_mut() {
            *r = Some(Box::new(repository));
        }
    });
    log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level))
}

/// Returns the stored entries, newest first.
pub fn entries() -> Result<VecDeque<Entry>, Error> {
    REPOSITORY.with(|r| match r.try_borrow() {
        Ok(r) => match r.as_ref() {
            Some(repository) => repository.read_entries(),
            None => Ok(VecDeque::new()),
        },
        Err(_) => Err(Error::Unknown("log repository is in use".to_string())),
    })
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        write_console(record.level(), &message);

        // Records emitted while the repository is writing an entry are not stored.
        let _ = REPOSITORY.try_with(|r| {
            if let Ok(r) = r.try_borrow() {
                if let Some(repository) = r.as_ref() {
                    let _ = repository.write_entry(Entry {
                        time: Utc::now().format("%b %d %H:%M:%S").to_string(),
                        level: record.level(),
                        message,
                    });
                }
            }
        });
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, message: &str) {
    match level {
        Level::Error => gloo_console::error!(message),
        Level::Warn => gloo_console::warn!(message),
        Level::Info => gloo_console::info!(message),
        Level::Debug | Level::Trace => gloo_console::debug!(message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, message: &str) {
    eprintln!("[{level}] {message}");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_entry_serialization() {
        let entry = Entry {
            time: "Jan 01 10:00:00".to_string(),
            level: Level::Warn,
            message: "failed to parse stored value".to_string(),
        };

        let serialized = serde_json::to_string(&entry).unwrap();

        assert_eq!(
            serialized,
            r#"{"time":"Jan 01 10:00:00","level":"Warn","message":"failed to parse stored value"}"#
        );
        assert_eq!(serde_json::from_str::<Entry>(&serialized).unwrap(), entry);
    }

    struct MemoryRepository(RefCell<VecDeque<Entry>>);

    impl Repository for MemoryRepository {
        fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
            Ok(self.0.borrow().clone())
        }

        fn write_entry(&self, entry: Entry) -> Result<(), Error> {
            self.0.borrow_mut().push_front(entry);
            Ok(())
        }
    }

    #[test]
    fn test_init() {
        init(MemoryRepository(RefCell::default()), LevelFilter::Info).unwrap();

        log::info!("workout added");
        log::debug!("workout not found");
        log::error!("failed to write");

        let entries = entries().unwrap();
        assert_eq!(
            entries
                .iter()
                .map(|e| (e.level, e.message.as_str()))
                .collect::<Vec<_>>(),
            vec![(Level::Error, "failed to write"), (Level::Info, "workout added")]
        );
        assert!(init(MemoryRepository(RefCell::default()), LevelFilter::Info).is_err());
    }

    #[test]
    fn test_entries_without_repository() {
        assert_eq!(entries(), Ok(VecDeque::new()));
    }
}
