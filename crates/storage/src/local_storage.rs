use wasm_bindgen::{JsCast, JsValue};
use zipprat_domain::StorageError;
use zipprat_web_app::KeyValueRepository;

/// The browser's `window.localStorage`.
pub struct LocalStorage;

impl KeyValueRepository for LocalStorage {
    fn read_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        storage()?.get_item(key).map_err(storage_error)
    }

    fn write_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage()?.set_item(key, value).map_err(storage_error)
    }
}

fn storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

fn storage_error(value: JsValue) -> StorageError {
    match value.dyn_ref::<web_sys::DomException>() {
        Some(exception) if exception.name() == "QuotaExceededError" => {
            StorageError::QuotaExceeded
        }
        Some(exception) => StorageError::Other(exception.message().into()),
        None => StorageError::Other(format!("{value:?}").into()),
    }
}

#[cfg(test)]
mod tests {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use pretty_assertions::assert_eq;
        use wasm_bindgen_test::wasm_bindgen_test;
        use zipprat_domain::AppState;
        use zipprat_web_app::{App, STORAGE_KEY};

        use crate::tests::data::APP_STATE;

        use super::super::*;

        wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

        fn clear() {
            storage().unwrap().clear().unwrap();
        }

        #[wasm_bindgen_test]
        fn test_read_write() {
            clear();

            assert_eq!(LocalStorage.read_item("a").unwrap(), None);

            LocalStorage.write_item("a", "[1]").unwrap();

            assert_eq!(LocalStorage.read_item("a").unwrap(), Some("[1]".to_string()));
        }

        #[wasm_bindgen_test]
        fn test_app_restart() {
            clear();
            LocalStorage
                .write_item(STORAGE_KEY, &serde_json::to_string(&*APP_STATE).unwrap())
                .unwrap();

            let mut app = App::new(LocalStorage);

            assert_eq!(app.state(), &*APP_STATE);

            app.toggle_dark_mode().unwrap();

            assert_eq!(App::new(LocalStorage).state(), app.state());
        }

        fn dark_class() -> bool {
            web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
                .unwrap()
                .class_list()
                .contains("dark")
        }

        #[wasm_bindgen_test]
        fn test_app_theme() {
            clear();

            let mut app = App::new(LocalStorage);

            assert!(!dark_class());

            app.toggle_dark_mode().unwrap();

            assert!(dark_class());

            drop(app);
            let mut app = App::new(LocalStorage);

            assert!(dark_class());

            app.toggle_dark_mode().unwrap();

            assert!(!dark_class());
        }

        #[wasm_bindgen_test]
        fn test_app_corrupt_storage() {
            clear();
            LocalStorage.write_item(STORAGE_KEY, "{").unwrap();

            assert_eq!(App::new(LocalStorage).state(), &AppState::default());
        }
    }
}
