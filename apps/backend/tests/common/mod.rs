//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up a server over a temporary workspace
//! - Helpers for writing markdown files and registering sessions

#![allow(dead_code)]

pub mod fixtures;

use std::path::{Path, PathBuf};

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use memo_practice_backend::config::ServerConfig;
use memo_practice_backend::{app, AppState};

/// Test context holding a temporary workspace and the router built on it.
pub struct TestContext {
    workspace: TempDir,
    app: Router,
}

impl TestContext {
    /// Create a new test context over an empty temporary workspace.
    pub fn new() -> Self {
        let workspace = tempfile::tempdir().expect("Failed to create temp workspace");
        let state = AppState::new(ServerConfig::with_workspace(workspace.path()));
        let app = app(state);

        Self { workspace, app }
    }

    /// Create a test context whose settings point at a repository already
    /// checked out as `LIBRARY_NAME` inside the workspace.
    pub fn with_library() -> Self {
        let ctx = Self::new();
        let settings = serde_json::json!({ "repository_url": fixtures::LIBRARY_URL });
        std::fs::write(
            ctx.workspace().join("settings.json"),
            serde_json::to_vec_pretty(&settings).expect("Failed to encode settings"),
        )
        .expect("Failed to write settings");
        std::fs::create_dir_all(ctx.library_dir()).expect("Failed to create library dir");
        ctx
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to create test server")
    }

    pub fn workspace(&self) -> &Path {
        self.workspace.path()
    }

    /// Checkout directory of the fixture repository.
    pub fn library_dir(&self) -> PathBuf {
        self.workspace.path().join(fixtures::LIBRARY_NAME)
    }

    /// Write a file into the library directory.
    pub fn write_file(&self, name: &str, content: impl AsRef<[u8]>) {
        std::fs::write(self.library_dir().join(name), content).expect("Failed to write file");
    }

    /// Register a session and return its token.
    pub async fn register(server: &TestServer) -> String {
        let response = server.post("/api/session/register").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        body["token"]
            .as_str()
            .expect("token in register response")
            .to_string()
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }
}
