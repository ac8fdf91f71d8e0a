use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use planora_domain::MemberRecord;

use crate::dto::{
    AssignmentEligibilityRequest, AssignmentValidationRequest, DecisionResponse, project_records,
};
use crate::error::ApiResult;
use crate::middleware::CurrentActor;
use crate::state::AppState;

pub async fn assignment_eligibility_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentActor>,
    Json(payload): Json<AssignmentEligibilityRequest>,
) -> ApiResult<Json<DecisionResponse>> {
    let target = MemberRecord::try_from(payload.target)?;
    let projects = project_records(payload.projects)?;

    let allowed = state.access.assignments().can_assign_projects_to_member(
        current.actor(),
        &target,
        &projects,
    );

    Ok(Json(DecisionResponse::from(allowed)))
}

pub async fn validate_assignment_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentActor>,
    Json(payload): Json<AssignmentValidationRequest>,
) -> ApiResult<StatusCode> {
    let actor = current.require()?;
    let target = MemberRecord::try_from(payload.target)?;
    let projects = project_records(payload.projects)?;

    state.access.assignments().validate_assignment(
        actor,
        &target,
        &payload.requested_project_ids,
        &projects,
    )?;

    Ok(StatusCode::NO_CONTENT)
}
