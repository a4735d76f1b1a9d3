use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::constants::MSG_TRANSLATION_ADDED;
use crate::error::{AppError, Result};
use crate::models::{CreateTranslationRequest, CreateTranslationResponse, Translation};
use crate::security::{admin_password_header, verify_admin_password};
use crate::AppState;

/// Pick the `game` filter from raw query pairs.
///
/// A repeated parameter keeps the last value. An empty value means no filter.
pub fn game_filter(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .rev()
        .find(|(key, _)| key == "game")
        .map(|(_, value)| value.as_str())
        .filter(|game| !game.is_empty())
}

/// List translations, newest first
///
/// GET /api/translations?game=<title>
///
/// `game` is an exact, case-sensitive title match. Query pairs are taken
/// as-is so that repeated or unknown parameters never reject the request.
pub async fn list_translations(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Translation>>> {
    let game = game_filter(&params);

    let rows = state.store.list(game).await?;

    tracing::debug!("Listed {} translations (game filter: {:?})", rows.len(), game);

    Ok(Json(rows.into_iter().map(Translation::from).collect()))
}

/// Add a translation
///
/// POST /api/translations/add
///
/// Checks, in order, each one short-circuiting before the store is touched:
/// 1. `X-Admin-Password` equals the configured admin password (403)
/// 2. The body is JSON with all five fields non-empty (400)
///
/// The body is taken as raw bytes so a malformed payload cannot be
/// rejected ahead of the password check.
pub async fn create_translation(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateTranslationResponse>)> {
    if !verify_admin_password(
        admin_password_header(&headers),
        state.config.admin_password.as_deref(),
    ) {
        tracing::warn!("Rejected create request: invalid admin password");
        return Err(AppError::Forbidden);
    }

    let request = CreateTranslationRequest::from_body(&body).map_err(|e| {
        tracing::warn!("Rejected create request: unreadable body: {}", e);
        AppError::MissingFields
    })?;

    let translation = request.validate().ok_or_else(|| {
        tracing::warn!("Rejected create request: missing required fields");
        AppError::MissingFields
    })?;

    let id = state.store.insert(&translation).await?;

    tracing::info!(
        "Added translation {} for {}: {} {}",
        id,
        translation.game,
        translation.mod_name,
        translation.version
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateTranslationResponse {
            success: true,
            id,
            message: MSG_TRANSLATION_ADDED.to_string(),
        }),
    ))
}

/// Fallback for methods an endpoint does not serve
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
