//! Translation storage.
//!
//! The production store is PostgreSQL. It expects this table to exist:
//!
//! ```sql
//! CREATE TABLE translations (
//!     id           SERIAL PRIMARY KEY,
//!     game         TEXT NOT NULL,
//!     mod_name     TEXT NOT NULL,
//!     author       TEXT NOT NULL,
//!     version      TEXT NOT NULL,
//!     download_url TEXT NOT NULL,
//!     created_at   TIMESTAMPTZ DEFAULT now()
//! );
//! ```

pub mod pool;
pub mod postgres;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewTranslation, TranslationRow};

pub use pool::create_pool;
pub use postgres::PgTranslationStore;

/// Backend holding translation records
#[async_trait]
pub trait TranslationStore: Send + Sync {
    /// All records, newest first. With `game`, only exact matches.
    async fn list(&self, game: Option<&str>) -> Result<Vec<TranslationRow>>;

    /// Insert one record and return its generated id.
    async fn insert(&self, translation: &NewTranslation) -> Result<i32>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<()>;
}
