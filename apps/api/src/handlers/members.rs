use axum::Json;
use axum::extract::{Extension, State};
use planora_domain::MemberRecord;

use crate::dto::{
    CanManageMemberRequest, DecisionResponse, MemberPayload, MemberScopeRequest, member_records,
};
use crate::error::ApiResult;
use crate::middleware::CurrentActor;
use crate::state::AppState;

pub async fn manageable_members_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentActor>,
    Json(payload): Json<MemberScopeRequest>,
) -> ApiResult<Json<Vec<MemberPayload>>> {
    let actor = current.require()?;
    let members = member_records(payload.members)?;

    let manageable = state
        .access
        .scope()
        .manageable_members(Some(actor), &members)
        .into_iter()
        .map(MemberPayload::from)
        .collect();

    Ok(Json(manageable))
}

pub async fn can_manage_member_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentActor>,
    Json(payload): Json<CanManageMemberRequest>,
) -> ApiResult<Json<DecisionResponse>> {
    let target = MemberRecord::try_from(payload.target)?;
    let allowed = state
        .access
        .scope()
        .can_manage_user(current.actor(), &target);

    Ok(Json(DecisionResponse::from(allowed)))
}
