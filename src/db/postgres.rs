use async_trait::async_trait;
use sqlx::PgPool;

use super::TranslationStore;
use crate::error::Result;
use crate::models::{NewTranslation, TranslationRow};

const SELECT_ALL: &str = "SELECT id, game, mod_name, author, version, download_url, created_at \
     FROM translations ORDER BY created_at DESC";

const SELECT_BY_GAME: &str = "SELECT id, game, mod_name, author, version, download_url, created_at \
     FROM translations WHERE game = $1 ORDER BY created_at DESC";

const INSERT: &str = "INSERT INTO translations (game, mod_name, author, version, download_url) \
     VALUES ($1, $2, $3, $4, $5) RETURNING id";

/// PostgreSQL-backed store. Connections are taken from the pool per query.
#[derive(Debug, Clone)]
pub struct PgTranslationStore {
    pool: PgPool,
}

impl PgTranslationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TranslationStore for PgTranslationStore {
    async fn list(&self, game: Option<&str>) -> Result<Vec<TranslationRow>> {
        let rows = match game {
            Some(game) => {
                sqlx::query_as::<_, TranslationRow>(SELECT_BY_GAME)
                    .bind(game)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, TranslationRow>(SELECT_ALL)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows)
    }

    async fn insert(&self, translation: &NewTranslation) -> Result<i32> {
        let id: i32 = sqlx::query_scalar(INSERT)
            .bind(&translation.game)
            .bind(&translation.mod_name)
            .bind(&translation.author)
            .bind(&translation.version)
            .bind(&translation.download_url)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
