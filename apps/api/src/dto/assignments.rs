use serde::Deserialize;
use ts_rs::TS;

use super::records::{MemberPayload, ProjectPayload};

/// Incoming payload for deciding whether to offer the assignment control.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assignment-eligibility-request.ts"
)]
pub struct AssignmentEligibilityRequest {
    pub target: MemberPayload,
    pub projects: Vec<ProjectPayload>,
}

/// Incoming payload for validating a submitted assignment.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assignment-validation-request.ts"
)]
pub struct AssignmentValidationRequest {
    pub target: MemberPayload,
    pub requested_project_ids: Vec<String>,
    pub projects: Vec<ProjectPayload>,
}
