use std::str::FromStr;

use planora_core::{AppError, AppResult, NonEmptyString};
use planora_domain::{AssignableRecord, MemberRecord, ProjectRecord, Role, duplicate_project_id};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Project snapshot exchanged with the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/project-payload.ts"
)]
pub struct ProjectPayload {
    pub id: String,
    /// Input also accepts the legacy `responsable_id` key. Output and the
    /// generated TypeScript type only carry `owner_id`.
    #[serde(default, alias = "responsable_id")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub task_assignee_ids: Vec<String>,
}

/// Member snapshot exchanged with the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/member-payload.ts"
)]
pub struct MemberPayload {
    pub id: String,
    pub role: String,
}

/// Incoming payload for project scope queries.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/project-scope-request.ts"
)]
pub struct ProjectScopeRequest {
    pub projects: Vec<ProjectPayload>,
    /// Explicit assigned-projects list from the actor's member profile.
    #[serde(default)]
    pub assigned_project_ids: Vec<String>,
}

/// Incoming payload for member scope queries.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/member-scope-request.ts"
)]
pub struct MemberScopeRequest {
    pub members: Vec<MemberPayload>,
}

/// Incoming payload for a single member management check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/can-manage-member-request.ts"
)]
pub struct CanManageMemberRequest {
    pub target: MemberPayload,
}

impl TryFrom<ProjectPayload> for ProjectRecord {
    type Error = AppError;

    fn try_from(value: ProjectPayload) -> Result<Self, Self::Error> {
        let task_assignees = value
            .task_assignee_ids
            .into_iter()
            .map(NonEmptyString::new)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(ProjectRecord::new(value.id, value.owner_id)?.with_task_assignees(task_assignees))
    }
}

impl From<ProjectRecord> for ProjectPayload {
    fn from(value: ProjectRecord) -> Self {
        Self {
            id: value.id().to_string(),
            owner_id: value.owner_id().map(ToString::to_string),
            task_assignee_ids: value
                .task_assignee_ids()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl TryFrom<MemberPayload> for MemberRecord {
    type Error = AppError;

    fn try_from(value: MemberPayload) -> Result<Self, Self::Error> {
        MemberRecord::new(value.id, Role::from_str(value.role.as_str())?)
    }
}

impl From<MemberRecord> for MemberPayload {
    fn from(value: MemberRecord) -> Self {
        Self {
            id: value.id().to_string(),
            role: value.role().as_str().to_owned(),
        }
    }
}

/// Converts project payloads into domain snapshots.
///
/// A list that repeats a project id is rejected.
pub fn project_records(payloads: Vec<ProjectPayload>) -> AppResult<Vec<ProjectRecord>> {
    let projects = payloads
        .into_iter()
        .map(ProjectRecord::try_from)
        .collect::<AppResult<Vec<_>>>()?;

    if let Some(project_id) = duplicate_project_id(&projects) {
        return Err(AppError::Validation(format!(
            "project id '{project_id}' appears more than once in the project list"
        )));
    }

    Ok(projects)
}

/// Converts member payloads into domain snapshots.
pub fn member_records(payloads: Vec<MemberPayload>) -> AppResult<Vec<MemberRecord>> {
    payloads.into_iter().map(MemberRecord::try_from).collect()
}
