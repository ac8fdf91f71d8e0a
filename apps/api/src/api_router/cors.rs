use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use planora_core::AppError;
use tower_http::cors::CorsLayer;

use crate::api_config::ActorHeaders;

pub(super) fn build_cors_layer(
    frontend_url: &str,
    actor_headers: &ActorHeaders,
) -> Result<CorsLayer, AppError> {
    Ok(CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            actor_headers.id.clone(),
            actor_headers.role.clone(),
            actor_headers.email.clone(),
        ]))
}
