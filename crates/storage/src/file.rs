use std::{
    fs, io,
    path::{Path, PathBuf},
};

use zipprat_domain::StorageError;
use zipprat_web_app::KeyValueRepository;

/// Key-value storage keeping each item in a JSON file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Maps each key to its own file. Bytes other than ASCII letters, digits and `-` are written
    /// as `_` followed by two hex digits.
    fn path(&self, key: &str) -> PathBuf {
        let mut file_name = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                file_name.push(char::from(byte));
            } else {
                file_name.push_str(&format!("_{byte:02X}"));
            }
        }
        self.directory.join(format!("{file_name}.json"))
    }
}

impl KeyValueRepository for FileStorage {
    fn read_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.directory.is_dir() {
            return Err(StorageError::Unavailable);
        }

        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Other(Box::new(err))),
        }
    }

    fn write_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.directory.is_dir() {
            return Err(StorageError::Unavailable);
        }

        let path = self.path(key);
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, value).map_err(|err| StorageError::Other(Box::new(err)))?;
        fs::rename(&tmp_path, &path).map_err(|err| {
            let _ = fs::remove_file(&tmp_path);
            StorageError::Other(Box::new(err))
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use zipprat_domain::AppState;
    use zipprat_web_app::{App, STORAGE_KEY};

    use crate::tests::data::APP_STATE;

    use super::*;

    #[rstest]
    #[case("zipprat-gym-tracker", "zipprat-gym-tracker.json")]
    #[case("log", "log.json")]
    #[case("../settings", "_2E_2E_2Fsettings.json")]
    #[case("a_b", "a_5Fb.json")]
    #[case("a/b", "a_2Fb.json")]
    #[case("ä", "_C3_A4.json")]
    fn test_path(#[case] key: &str, #[case] file_name: &str) {
        let storage = FileStorage::new("/data");

        assert_eq!(storage.path(key), Path::new("/data").join(file_name));
    }

    #[test]
    fn test_similar_keys_are_kept_apart() {
        let directory = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(directory.path());

        storage.write_item("a/b", "1").unwrap();
        storage.write_item("a_b", "2").unwrap();
        storage.write_item("a.b", "3").unwrap();

        assert_eq!(storage.read_item("a/b").unwrap(), Some("1".to_string()));
        assert_eq!(storage.read_item("a_b").unwrap(), Some("2".to_string()));
        assert_eq!(storage.read_item("a.b").unwrap(), Some("3".to_string()));
    }

    #[test]
    fn test_read_write() {
        let directory = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(directory.path());

        assert_eq!(storage.read_item("a").unwrap(), None);

        storage.write_item("a", "[1,2]").unwrap();
        storage.write_item("a", "[3]").unwrap();

        assert_eq!(storage.read_item("a").unwrap(), Some("[3]".to_string()));
        assert_eq!(
            fs::read_dir(directory.path()).unwrap().count(),
            1,
            "temporary file left behind"
        );
    }

    #[test]
    fn test_missing_directory() {
        let directory = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(directory.path().join("missing"));

        assert!(matches!(
            storage.read_item("a"),
            Err(StorageError::Unavailable)
        ));
        assert!(matches!(
            storage.write_item("a", "1"),
            Err(StorageError::Unavailable)
        ));
        assert_eq!(App::new(storage).state(), &AppState::default());
    }

    #[test]
    fn test_app_restart() {
        let directory = tempfile::tempdir().unwrap();
        fs::write(
            directory.path().join("zipprat-gym-tracker.json"),
            serde_json::to_string(&*APP_STATE).unwrap(),
        )
        .unwrap();

        let mut app = App::new(FileStorage::new(directory.path()));

        assert_eq!(app.state(), &*APP_STATE);

        app.delete_workout(APP_STATE.workouts[0].id).unwrap();
        let state = app.state().clone();
        drop(app);

        let app = App::new(FileStorage::new(directory.path()));

        assert_eq!(app.state(), &state);
        assert_eq!(app.state().workouts.len(), 1);
    }

    #[test]
    fn test_app_corrupt_file() {
        let directory = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(directory.path());
        storage.write_item(STORAGE_KEY, "not json").unwrap();

        let mut app = App::new(storage.clone());

        assert_eq!(app.state(), &AppState::default());

        app.toggle_dark_mode().unwrap();

        assert_eq!(
            storage.read_item(STORAGE_KEY).unwrap(),
            Some(r#"{"workouts":[],"darkMode":true}"#.to_string())
        );
    }
}
