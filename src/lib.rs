//! Translation catalogue server library
//!
//! Lists game translation packs and lets an admin add new ones.
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod security;

pub use config::Config;
pub use db::{PgTranslationStore, TranslationStore};
pub use error::{AppError, Result};
pub use routes::build_router;

use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TranslationStore>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: Arc<dyn TranslationStore>, config: Config) -> Self {
        Self { store, config }
    }
}
