use std::str::FromStr;

use planora_core::AppError;
use serde::{Deserialize, Serialize};

/// Workspace roles.
///
/// Roles are not ranked. ADMIN and MANAGER each hold rights the other lacks,
/// so every rule matches roles explicitly instead of comparing levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Unrestricted platform owner.
    SuperAdmin,
    /// Workspace administrator.
    Admin,
    /// Team lead with delivery-oriented rights.
    Manager,
    /// Regular member.
    User,
}

impl Role {
    /// Returns the stable claim value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::User => "USER",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[Role::SuperAdmin, Role::Admin, Role::Manager, Role::User];

        ALL
    }

    /// Returns whether the role sees and assigns every project.
    ///
    /// Other roles are scoped to the projects they are assigned to or own.
    #[must_use]
    pub fn has_workspace_scope(&self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "ADMIN" => Ok(Self::Admin),
            "MANAGER" => Ok(Self::Manager),
            "USER" => Ok(Self::User),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}
