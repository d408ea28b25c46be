use std::io::ErrorKind;
use std::path::PathBuf;

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    /// A missing file is not an error; the caller falls back to defaults.
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!(
                "Failed to write config file {}: {}",
                self.file_path.display(),
                e
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_provider_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_has_no_content() {
        let provider = FileContentConfigProvider::new(temp_file_path());
        assert_eq!(provider.get_config_content().unwrap(), None);
    }

    #[test]
    fn test_written_content_is_read_back() {
        let path = temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("game: {}\n").unwrap();
        assert_eq!(
            provider.get_config_content().unwrap().as_deref(),
            Some("game: {}\n")
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_path_reports_file() {
        let path = temp_file_path().join("nested").join("config.yaml");
        let provider = FileContentConfigProvider::new(path);
        let error = provider.set_config_content("x").unwrap_err();
        assert!(error.contains("config.yaml"), "{}", error);
    }
}
