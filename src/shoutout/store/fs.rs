use super::ShoutStore;
use crate::error::{Result, ShoutoutError};
use crate::model::Shoutout;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILENAME: &str = "shoutouts.json";

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShoutoutError::Io)?;
        }
        Ok(())
    }
}

impl ShoutStore for FileStore {
    fn load(&self) -> Result<Vec<Shoutout>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(data_file).map_err(ShoutoutError::Io)?;
        let shoutouts: Vec<Shoutout> =
            serde_json::from_str(&content).map_err(ShoutoutError::Serialization)?;
        Ok(shoutouts)
    }

    fn save(&mut self, shoutouts: &[Shoutout]) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(shoutouts).map_err(ShoutoutError::Serialization)?;
        fs::write(self.data_file(), content).map_err(ShoutoutError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().to_path_buf())
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let shoutouts = vec![
            Shoutout::new("Ana".to_string(), "Shipped the release".to_string()),
            Shoutout::new("Bo".to_string(), "Fixed the flaky test".to_string()),
        ];
        store.save(&shoutouts).unwrap();

        assert_eq!(store.load().unwrap(), shoutouts);
    }

    #[test]
    fn save_creates_missing_data_dir() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("data"));

        store
            .save(&[Shoutout::new("Ana".to_string(), "Hi".to_string())])
            .unwrap();

        assert!(store.data_file().exists());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store
            .save(&[Shoutout::new("Ana".to_string(), "First".to_string())])
            .unwrap();
        store.save(&[]).unwrap();

        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.data_file(), "not valid json {").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ShoutoutError::Serialization(_)));
    }

    #[test]
    fn data_file_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store
            .save(&[Shoutout::new("Ana".to_string(), "Hi".to_string())])
            .unwrap();

        let content = fs::read_to_string(store.data_file()).unwrap();
        assert!(content.starts_with("[\n"));
        assert!(content.contains("\n    \"name\": \"Ana\""));
    }
}
