pub mod health;
pub mod translations;

pub use health::health_check;
pub use translations::{create_translation, list_translations, method_not_allowed};

use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::constants::{ADMIN_PASSWORD_HEADER, PREFLIGHT_MAX_AGE_SECS};
use crate::AppState;

/// CORS policy for one endpoint
///
/// Every response gets `Access-Control-Allow-Origin: *`. Any `OPTIONS`
/// request is answered by the layer itself, so handlers never see it.
fn cors(methods: [Method; 2], headers: Vec<HeaderName>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(PREFLIGHT_MAX_AGE_SECS))
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let log_requests = state.config.log_requests;

    let list_cors = cors([Method::GET, Method::OPTIONS], vec![header::CONTENT_TYPE]);
    let create_cors = cors(
        [Method::POST, Method::OPTIONS],
        vec![
            header::CONTENT_TYPE,
            HeaderName::from_static(ADMIN_PASSWORD_HEADER),
        ],
    );

    // `get` also answers HEAD unless HEAD is routed explicitly
    let router = Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/translations",
            get(list_translations)
                .head(method_not_allowed)
                .fallback(method_not_allowed)
                .layer(list_cors),
        )
        .route(
            "/api/translations/add",
            post(create_translation)
                .fallback(method_not_allowed)
                .layer(create_cors),
        )
        .with_state(state);

    if log_requests {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}
