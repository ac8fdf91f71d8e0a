use axum::Json;
use axum::extract::{Extension, State};
use planora_core::{AppResult, NonEmptyString};

use crate::dto::{ProjectPayload, ProjectScopeRequest, project_records};
use crate::error::ApiResult;
use crate::middleware::CurrentActor;
use crate::state::AppState;

pub async fn accessible_projects_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentActor>,
    Json(payload): Json<ProjectScopeRequest>,
) -> ApiResult<Json<Vec<ProjectPayload>>> {
    let assigned_projects = payload
        .assigned_project_ids
        .into_iter()
        .map(NonEmptyString::new)
        .collect::<AppResult<Vec<_>>>()?;
    let actor = current
        .require()?
        .clone()
        .with_assigned_projects(assigned_projects);
    let projects = project_records(payload.projects)?;

    let visible = state
        .access
        .scope()
        .accessible_projects(Some(&actor), &projects)
        .into_iter()
        .map(ProjectPayload::from)
        .collect();

    Ok(Json(visible))
}

pub async fn assignable_projects_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentActor>,
    Json(payload): Json<ProjectScopeRequest>,
) -> ApiResult<Json<Vec<ProjectPayload>>> {
    let actor = current.require()?;
    let projects = project_records(payload.projects)?;

    let assignable = state
        .access
        .scope()
        .assignable_projects(Some(actor), &projects)
        .into_iter()
        .map(ProjectPayload::from)
        .collect();

    Ok(Json(assignable))
}
