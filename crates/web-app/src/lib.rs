#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use zipprat_domain::StorageError;

pub mod app;
pub mod log;
pub mod persisted_state;

pub use app::{App, STORAGE_KEY};
pub use persisted_state::PersistedState;

/// Durable string storage addressed by key, e.g. the browser's local storage.
pub trait KeyValueRepository {
    fn read_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<R: KeyValueRepository + ?Sized> KeyValueRepository for &R {
    fn read_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read_item(key)
    }

    fn write_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write_item(key, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }
}

/// Adds or removes the `dark` class of the document element.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: Theme) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        ::log::error!("failed to access document element to apply theme");
        return;
    };

    let class_list = element.class_list();
    let result = match theme {
        Theme::Dark => class_list.add_1("dark"),
        Theme::Light => class_list.remove_1("dark"),
    };

    if let Err(err) = result {
        ::log::error!("failed to apply theme: {err:?}");
    }
}
