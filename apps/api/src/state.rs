use planora_application::AccessControl;

use crate::api_config::ActorHeaders;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub access: AccessControl,
    pub actor_headers: ActorHeaders,
}
