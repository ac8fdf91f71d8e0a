use planora_core::AppError;
use thiserror::Error;

use crate::Role;

/// Reasons a project assignment request is denied as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The actor may not assign projects to a member with this role.
    #[error("role not assignable by this actor: {actor_role} cannot assign projects to {target_role}")]
    RoleNotAssignable {
        /// Role of the acting member.
        actor_role: Role,
        /// Role of the member receiving the projects.
        target_role: Role,
    },

    /// At least one requested project is not managed by the actor.
    #[error("actor does not manage one or more of the requested projects: {}", project_ids.join(", "))]
    ProjectsNotManaged {
        /// Requested projects the actor is not responsable for.
        project_ids: Vec<String>,
    },

    /// A requested project id does not resolve to a project.
    #[error("unknown project id '{project_id}'")]
    UnknownProject {
        /// First unresolved identifier.
        project_id: String,
    },

    /// The project snapshot lists the same id more than once.
    #[error("project id '{project_id}' appears more than once in the project list")]
    DuplicateProject {
        /// First repeated identifier.
        project_id: String,
    },

    /// The request contained no project ids.
    #[error("no projects were requested")]
    NothingRequested,
}

impl AssignmentError {
    /// Returns a stable reason code for client-side messaging.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::RoleNotAssignable { .. } => "role_not_assignable",
            Self::ProjectsNotManaged { .. } => "ownership",
            Self::UnknownProject { .. } => "unknown_project",
            Self::DuplicateProject { .. } => "duplicate_project",
            Self::NothingRequested => "nothing_requested",
        }
    }
}

impl From<AssignmentError> for AppError {
    fn from(value: AssignmentError) -> Self {
        match value {
            AssignmentError::UnknownProject { .. } => Self::NotFound(value.to_string()),
            AssignmentError::DuplicateProject { .. } | AssignmentError::NothingRequested => {
                Self::Validation(value.to_string())
            }
            AssignmentError::RoleNotAssignable { .. }
            | AssignmentError::ProjectsNotManaged { .. } => Self::Forbidden(value.to_string()),
        }
    }
}
