use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `translations` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TranslationRow {
    pub id: i32,
    pub game: String,
    pub mod_name: String,
    pub author: String,
    pub version: String,
    pub download_url: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Translation record as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// Database id, rendered as a string
    pub id: String,
    pub game: String,
    pub mod_name: String,
    pub author: String,
    pub version: String,
    pub download_url: String,
    /// ISO-8601 creation time, `null` if the row has none
    pub created_at: Option<String>,
}

impl From<TranslationRow> for Translation {
    fn from(row: TranslationRow) -> Self {
        Self {
            id: row.id.to_string(),
            game: row.game,
            mod_name: row.mod_name,
            author: row.author,
            version: row.version,
            download_url: row.download_url,
            created_at: row
                .created_at
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
        }
    }
}

/// Body of a create request. Every field is optional on the wire so that
/// missing fields surface as a validation error instead of a parse error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTranslationRequest {
    pub game: Option<String>,
    pub mod_name: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub download_url: Option<String>,
}

/// A validated record ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTranslation {
    pub game: String,
    pub mod_name: String,
    pub author: String,
    pub version: String,
    pub download_url: String,
}

impl CreateTranslationRequest {
    /// Parse a raw request body. An empty body counts as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    /// Returns the record only if all five fields are present and non-empty
    pub fn validate(self) -> Option<NewTranslation> {
        fn required(field: Option<String>) -> Option<String> {
            field.filter(|v| !v.is_empty())
        }

        Some(NewTranslation {
            game: required(self.game)?,
            mod_name: required(self.mod_name)?,
            author: required(self.author)?,
            version: required(self.version)?,
            download_url: required(self.download_url)?,
        })
    }
}

/// Response for a successful create
#[derive(Debug, Serialize)]
pub struct CreateTranslationResponse {
    pub success: bool,
    pub id: i32,
    pub message: String,
}
