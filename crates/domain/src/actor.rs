use std::str::FromStr;

use planora_core::{AppResult, NonEmptyString, UserIdentity};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Authenticated caller of one request or UI action.
///
/// Actors never carry cached decisions; every check is re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    id: NonEmptyString,
    role: Role,
    email: String,
    #[serde(default)]
    assigned_projects: Vec<NonEmptyString>,
}

impl Actor {
    /// Creates an actor with a validated identifier.
    pub fn new(id: impl Into<String>, role: Role, email: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            role,
            email: email.into(),
            assigned_projects: Vec::new(),
        })
    }

    /// Attaches the explicit assigned-projects list from the member profile.
    #[must_use]
    pub fn with_assigned_projects(mut self, project_ids: Vec<NonEmptyString>) -> Self {
        self.assigned_projects = project_ids;
        self
    }

    /// Returns the actor identifier.
    #[must_use]
    pub fn id(&self) -> &NonEmptyString {
        &self.id
    }

    /// Returns the actor role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the actor email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the explicit assigned-projects list, empty when the profile has none.
    #[must_use]
    pub fn assigned_projects(&self) -> &[NonEmptyString] {
        &self.assigned_projects
    }
}

impl TryFrom<&UserIdentity> for Actor {
    type Error = planora_core::AppError;

    fn try_from(identity: &UserIdentity) -> Result<Self, Self::Error> {
        let role = Role::from_str(identity.role())?;
        Self::new(identity.subject(), role, identity.email())
    }
}
