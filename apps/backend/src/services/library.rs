//! Markdown files in the local library directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use memo_core::{Document, Settings};

use crate::error::ApiError;
use crate::services::repository::{checkout_name, SyncError};

const MARKDOWN_EXTENSIONS: [&str; 2] = [".md", ".markdown"];

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("invalid file name: {0}")]
    InvalidName(String),
    #[error("{0} does not exist")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<LibraryError> for ApiError {
    fn from(e: LibraryError) -> Self {
        match e {
            LibraryError::InvalidName(_) => ApiError::BadRequest(e.to_string()),
            LibraryError::NotFound(_) => ApiError::NotFound(e.to_string()),
            LibraryError::Read { .. } => ApiError::Io(e.to_string()),
        }
    }
}

/// Directory holding the markdown files: the checkout of the configured
/// repository.
pub fn library_dir(workspace_dir: &Path, settings: &Settings) -> Result<PathBuf, SyncError> {
    checkout_name(&settings.repository_url).map(|name| workspace_dir.join(name))
}

fn read_error(path: &Path, source: std::io::Error) -> LibraryError {
    if source.kind() == ErrorKind::NotFound {
        LibraryError::NotFound(path.to_path_buf())
    } else {
        LibraryError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Markdown file names directly inside `dir`, sorted.
pub async fn list_markdown_files(dir: &Path) -> Result<Vec<String>, LibraryError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| read_error(dir, e))?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| read_error(dir, e))? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !MARKDOWN_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            continue;
        }
        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file() || t.is_symlink())
            .unwrap_or(false);
        if is_file {
            files.push(name);
        }
    }

    files.sort();
    Ok(files)
}

/// Read and parse one markdown file from `dir`.
pub async fn load_documents(dir: &Path, file: &str) -> Result<Vec<Document>, LibraryError> {
    validate_file_name(file)?;

    let path = dir.join(file);
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| read_error(&path, e))?;

    let docs = memo_core::parse(&content);
    tracing::info!("Loaded {} ({} tables)", file, docs.len());
    Ok(docs)
}

/// Only plain markdown file names inside the library are accepted.
fn validate_file_name(file: &str) -> Result<(), LibraryError> {
    let plain = !file.is_empty()
        && file != "."
        && file != ".."
        && !file.contains(['/', '\\']);
    let markdown = MARKDOWN_EXTENSIONS.iter().any(|ext| file.ends_with(ext));

    if plain && markdown {
        Ok(())
    } else {
        Err(LibraryError::InvalidName(file.to_string()))
    }
}
