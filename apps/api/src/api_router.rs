mod cors;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use planora_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers::{assignments, health, members, permissions, projects};
use crate::middleware;
use crate::state::AppState;

/// Builds the decision service router with actor resolution, tracing and CORS.
pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = cors::build_cors_layer(frontend_url, &app_state.actor_headers)?;

    let decision_routes = Router::new()
        .route(
            "/api/permissions/matrix",
            get(permissions::permission_matrix_handler),
        )
        .route(
            "/api/permissions/check",
            post(permissions::check_permission_handler),
        )
        .route(
            "/api/me/permissions",
            get(permissions::my_permissions_handler),
        )
        .route("/api/me/pages", get(permissions::visible_pages_handler))
        .route(
            "/api/pages/{page_id}/access",
            get(permissions::page_access_handler),
        )
        .route(
            "/api/projects/accessible",
            post(projects::accessible_projects_handler),
        )
        .route(
            "/api/projects/assignable",
            post(projects::assignable_projects_handler),
        )
        .route(
            "/api/members/manageable",
            post(members::manageable_members_handler),
        )
        .route(
            "/api/members/can-manage",
            post(members::can_manage_member_handler),
        )
        .route(
            "/api/assignments/eligibility",
            post(assignments::assignment_eligibility_handler),
        )
        .route(
            "/api/assignments/validate",
            post(assignments::validate_assignment_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::resolve_actor,
        ));

    Ok(Router::new()
        .route("/health", get(health::health_handler))
        .merge(decision_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
