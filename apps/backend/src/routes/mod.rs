//! HTTP route handlers

pub mod auth;
pub mod files;
pub mod quiz;
pub mod repository;
pub mod session;
pub mod settings;
