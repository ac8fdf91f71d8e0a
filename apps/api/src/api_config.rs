use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::http::HeaderName;
use planora_core::AppError;
use tracing_subscriber::EnvFilter;

/// Request headers carrying the identity resolved by the upstream gateway.
#[derive(Debug, Clone)]
pub struct ActorHeaders {
    pub id: HeaderName,
    pub role: HeaderName,
    pub email: HeaderName,
}

impl ActorHeaders {
    /// Builds `<prefix>-id`, `<prefix>-role` and `<prefix>-email` header names.
    pub fn from_prefix(prefix: &str) -> Result<Self, AppError> {
        let header = |suffix: &str| {
            HeaderName::from_str(format!("{prefix}-{suffix}").as_str()).map_err(|error| {
                AppError::Validation(format!("invalid ACTOR_HEADER_PREFIX '{prefix}': {error}"))
            })
        };

        Ok(Self {
            id: header("id")?,
            role: header("role")?,
            email: header("email")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub actor_headers: ActorHeaders,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = match env::var("API_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            Err(_) => 3001,
        };
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        let actor_header_prefix = non_empty_env("ACTOR_HEADER_PREFIX")?
            .unwrap_or_else(|| "x-actor".to_owned());

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            actor_headers: ActorHeaders::from_prefix(actor_header_prefix.trim())?,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn non_empty_env(name: &str) -> Result<Option<String>, AppError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => {
            Err(AppError::Validation(format!("{name} must not be empty")))
        }
        Ok(value) => Ok(Some(value)),
        Err(_) => Ok(None),
    }
}
