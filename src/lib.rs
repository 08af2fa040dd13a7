//! Biblioteca Book Catalog
//!
//! Catalog manager for a library's book inventory, exposed as a REST JSON
//! API and an interactive console menu over a single SQLite table.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(services: services::Services) -> Self {
        Self {
            services: Arc::new(services),
        }
    }
}
