use std::collections::HashSet;

use planora_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::{Actor, Role};

/// Read-only view of a persisted record that access rules inspect.
pub trait AssignableRecord {
    /// Returns the record identifier.
    fn id(&self) -> &NonEmptyString;

    /// Returns the member administratively responsible for the record.
    fn owner_id(&self) -> Option<&NonEmptyString> {
        None
    }

    /// Returns the role of the member the record describes.
    fn target_role(&self) -> Option<Role> {
        None
    }
}

/// Project snapshot supplied by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    id: NonEmptyString,
    #[serde(default, alias = "responsable_id")]
    owner_id: Option<NonEmptyString>,
    #[serde(default)]
    task_assignee_ids: Vec<NonEmptyString>,
}

impl ProjectRecord {
    /// Creates a project snapshot.
    pub fn new(id: impl Into<String>, owner_id: Option<String>) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            owner_id: owner_id.map(NonEmptyString::new).transpose()?,
            task_assignee_ids: Vec::new(),
        })
    }

    /// Attaches the members assigned to at least one task of the project.
    #[must_use]
    pub fn with_task_assignees(mut self, member_ids: Vec<NonEmptyString>) -> Self {
        self.task_assignee_ids = member_ids;
        self
    }

    /// Returns whether the given member is the project's responsable.
    #[must_use]
    pub fn is_owned_by(&self, member_id: &NonEmptyString) -> bool {
        self.owner_id.as_ref() == Some(member_id)
    }

    /// Returns whether the given member works on any task of the project.
    #[must_use]
    pub fn has_task_assignee(&self, member_id: &NonEmptyString) -> bool {
        self.task_assignee_ids.contains(member_id)
    }

    /// Returns the members assigned through tasks.
    #[must_use]
    pub fn task_assignee_ids(&self) -> &[NonEmptyString] {
        &self.task_assignee_ids
    }
}

impl AssignableRecord for ProjectRecord {
    fn id(&self) -> &NonEmptyString {
        &self.id
    }

    fn owner_id(&self) -> Option<&NonEmptyString> {
        self.owner_id.as_ref()
    }
}

/// Returns the first project id that appears more than once in a snapshot.
///
/// A snapshot with repeated ids is ambiguous about ownership and is treated
/// as malformed by every scope and assignment decision.
#[must_use]
pub fn duplicate_project_id(projects: &[ProjectRecord]) -> Option<&NonEmptyString> {
    let mut seen = HashSet::new();
    projects
        .iter()
        .map(|project| &project.id)
        .find(|project_id| !seen.insert(*project_id))
}

/// Member snapshot supplied by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    id: NonEmptyString,
    role: Role,
}

impl MemberRecord {
    /// Creates a member snapshot.
    pub fn new(id: impl Into<String>, role: Role) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            role,
        })
    }

    /// Returns the member role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}

impl AssignableRecord for MemberRecord {
    fn id(&self) -> &NonEmptyString {
        &self.id
    }

    fn target_role(&self) -> Option<Role> {
        Some(self.role)
    }
}

impl From<&Actor> for MemberRecord {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id().clone(),
            role: actor.role(),
        }
    }
}
