use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown document's full text
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write a document back to disk, creating parent directories as needed
pub fn write_document(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}
