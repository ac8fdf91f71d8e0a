use axum::Json;
use axum::extract::{Extension, Path, State};

use crate::dto::{
    DecisionResponse, PermissionCheckRequest, PermissionEntryResponse, RolePermissionsResponse,
    VisiblePagesResponse,
};
use crate::error::ApiResult;
use crate::middleware::CurrentActor;
use crate::state::AppState;

pub async fn permission_matrix_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentActor>,
) -> ApiResult<Json<Vec<RolePermissionsResponse>>> {
    current.require()?;

    let matrix = state
        .access
        .evaluator()
        .table()
        .role_sets()
        .map(RolePermissionsResponse::from)
        .collect();

    Ok(Json(matrix))
}

pub async fn my_permissions_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentActor>,
) -> ApiResult<Json<Vec<PermissionEntryResponse>>> {
    let actor = current.require()?;

    let permissions = state
        .access
        .evaluator()
        .permissions_for(Some(actor))
        .into_iter()
        .map(PermissionEntryResponse::from)
        .collect();

    Ok(Json(permissions))
}

pub async fn check_permission_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentActor>,
    Json(payload): Json<PermissionCheckRequest>,
) -> Json<DecisionResponse> {
    let allowed = state.access.evaluator().has_permission_named(
        current.actor(),
        payload.resource.as_str(),
        payload.action.as_str(),
    );

    Json(DecisionResponse::from(allowed))
}

pub async fn page_access_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentActor>,
    Path(page_id): Path<String>,
) -> Json<DecisionResponse> {
    let allowed = state
        .access
        .evaluator()
        .can_access_page(current.actor(), page_id.as_str());

    Json(DecisionResponse::from(allowed))
}

pub async fn visible_pages_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentActor>,
) -> ApiResult<Json<VisiblePagesResponse>> {
    let actor = current.require()?;
    let pages = state.access.evaluator().visible_pages(Some(actor));

    Ok(Json(VisiblePagesResponse::from(pages)))
}
