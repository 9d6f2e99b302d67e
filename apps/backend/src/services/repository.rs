//! Git checkout of the markdown repository.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tokio::process::Command;

use crate::error::ApiError;
use crate::models::SyncAction;

static REPOSITORY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([\w\-.]+)\.git$").expect("valid repository name pattern"));

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("repository URL is not set, configure settings first")]
    MissingUrl,
    #[error("cannot derive a repository name from {0}")]
    InvalidUrl(String),
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("git {command} failed: {stderr}")]
    Git { command: &'static str, stderr: String },
}

impl From<SyncError> for ApiError {
    fn from(e: SyncError) -> Self {
        match e {
            SyncError::MissingUrl | SyncError::InvalidUrl(_) => ApiError::BadRequest(e.to_string()),
            SyncError::Spawn(_) | SyncError::Git { .. } => ApiError::Sync(e.to_string()),
        }
    }
}

/// Checkout directory name for a URL such as `https://host/me/notes.git`.
pub fn repository_name(url: &str) -> Option<String> {
    REPOSITORY_NAME
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Checkout directory name for the configured URL.
///
/// An unset URL is `MissingUrl`; a URL without a `<name>.git` suffix is
/// `InvalidUrl`.
pub fn checkout_name(url: &str) -> Result<String, SyncError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(SyncError::MissingUrl);
    }
    repository_name(url).ok_or_else(|| SyncError::InvalidUrl(url.to_string()))
}

/// Result of a successful sync.
#[derive(Debug)]
pub struct SyncOutcome {
    pub action: SyncAction,
    pub name: String,
    pub output: String,
}

/// Clones or pulls repositories below a workspace directory.
pub struct RepositorySync {
    workspace_dir: PathBuf,
}

impl RepositorySync {
    pub fn new(workspace_dir: impl Into<PathBuf>) -> Self {
        Self {
            workspace_dir: workspace_dir.into(),
        }
    }

    pub fn checkout_dir(&self, name: &str) -> PathBuf {
        self.workspace_dir.join(name)
    }

    /// Clone `url` when its checkout is missing, pull it otherwise.
    pub async fn sync(&self, url: &str) -> Result<SyncOutcome, SyncError> {
        let url = url.trim();
        let name = checkout_name(url)?;
        let checkout = self.checkout_dir(&name);

        let (action, output) = if checkout.is_dir() {
            (SyncAction::Pulled, git_pull(&checkout).await?)
        } else {
            (SyncAction::Cloned, git_clone(url, &checkout).await?)
        };

        tracing::info!("{:?} repository {} into {}", action, url, checkout.display());
        Ok(SyncOutcome {
            action,
            name,
            output,
        })
    }
}

async fn git_clone(url: &str, checkout: &Path) -> Result<String, SyncError> {
    let output = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(checkout)
        .output()
        .await?;
    check_output("clone", output)
}

async fn git_pull(checkout: &Path) -> Result<String, SyncError> {
    let output = Command::new("git")
        .arg("-C")
        .arg(checkout)
        .arg("pull")
        .output()
        .await?;
    check_output("pull", output)
}

fn check_output(command: &'static str, output: std::process::Output) -> Result<String, SyncError> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::error!("git {} failed: {}", command, stderr);
        return Err(SyncError::Git { command, stderr });
    }

    // git clone reports progress on stderr and nothing on stdout
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        Ok(String::from_utf8_lossy(&output.stderr).trim().to_string())
    } else {
        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_from_https_and_ssh_urls() {
        assert_eq!(
            repository_name("https://github.com/me/vocab-notes.git"),
            Some("vocab-notes".to_string())
        );
        assert_eq!(
            repository_name("git@github.com:me/kanji.v2.git"),
            Some("kanji.v2".to_string())
        );
        assert_eq!(
            repository_name("ssh://git@host/team/kanji.v2.git"),
            Some("kanji.v2".to_string())
        );
    }

    #[test]
    fn name_requires_git_suffix() {
        assert_eq!(repository_name("https://github.com/me/notes"), None);
        assert_eq!(repository_name(""), None);
    }

    #[test]
    fn checkout_name_requires_url() {
        assert!(matches!(checkout_name(" "), Err(SyncError::MissingUrl)));
        assert!(matches!(
            checkout_name("https://example.com/notes"),
            Err(SyncError::InvalidUrl(_))
        ));
        assert_eq!(
            checkout_name(" https://example.com/me/notes.git ").unwrap(),
            "notes"
        );
    }

    #[tokio::test]
    async fn sync_without_url_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let sync = RepositorySync::new(dir.path());
        assert!(matches!(sync.sync("  ").await, Err(SyncError::MissingUrl)));
        assert!(matches!(
            sync.sync("https://example.com/notes").await,
            Err(SyncError::InvalidUrl(_))
        ));
    }
}
