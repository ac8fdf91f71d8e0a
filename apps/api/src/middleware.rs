use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName};
use axum::middleware::Next;
use axum::response::Response;
use planora_core::{AppError, UserIdentity};
use planora_domain::Actor;
use tracing::warn;

use crate::api_config::ActorHeaders;
use crate::error::ApiResult;
use crate::state::AppState;

/// Actor resolved for the current request, absent when unauthenticated.
#[derive(Debug, Clone, Default)]
pub struct CurrentActor(pub Option<Actor>);

impl CurrentActor {
    /// Returns the actor, if any.
    pub fn actor(&self) -> Option<&Actor> {
        self.0.as_ref()
    }

    /// Returns the actor or an unauthorized error.
    pub fn require(&self) -> ApiResult<&Actor> {
        self.actor()
            .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()).into())
    }
}

/// Attaches the gateway identity to the request.
///
/// Requests without identity headers, or whose role claim is not recognized,
/// continue as unauthenticated.
pub async fn resolve_actor(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let actor = identity_from_headers(request.headers(), &state.actor_headers).and_then(
        |identity| match Actor::try_from(&identity) {
            Ok(actor) => Some(actor),
            Err(error) => {
                warn!(
                    error = %error,
                    subject = identity.subject(),
                    "ignoring identity with unusable claims"
                );
                None
            }
        },
    );

    request.extensions_mut().insert(CurrentActor(actor));
    next.run(request).await
}

pub(crate) fn identity_from_headers(
    headers: &HeaderMap,
    names: &ActorHeaders,
) -> Option<UserIdentity> {
    let value = |name: &HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
    };

    let subject = value(&names.id).filter(|subject| !subject.is_empty())?;
    let role = value(&names.role)?;
    let email = value(&names.email).unwrap_or_default();

    Some(UserIdentity::new(subject, email, role))
}
