use std::io::ErrorKind;
use std::path::PathBuf;

/// Source of a persisted text document. `Ok(None)` means the document does not exist yet.
pub trait ContentProvider {
    fn get_content(&self) -> Result<Option<String>, String>;
    fn set_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentProvider {
    file_path: PathBuf,
}

impl FileContentProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ContentProvider for FileContentProvider {
    fn get_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_content(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("Failed to create directory {}: {}", parent.display(), e)
            })?;
        }

        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write {}: {}", self.file_path.display(), e))
    }
}
