//! Collaborators behind the HTTP routes.

pub mod library;
pub mod repository;
pub mod sessions;
pub mod settings;
