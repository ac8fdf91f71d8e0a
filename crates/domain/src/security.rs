use std::collections::BTreeMap;
use std::str::FromStr;

use planora_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Protected functional areas of the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    /// Landing dashboard.
    Dashboard,
    /// Performance reporting.
    Performance,
    /// Department records.
    Departments,
    /// Member directory and member administration.
    Members,
    /// Active projects.
    Projects,
    /// Project tasks.
    Tasks,
    /// Task and project comments.
    Comments,
    /// File attachments.
    Attachments,
    /// Archived projects.
    ClosedProjects,
    /// Meeting minutes.
    MeetingMinutes,
    /// Workspace settings.
    AdminSettings,
}

impl Resource {
    /// Returns a stable transport value for this resource.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Performance => "performance",
            Self::Departments => "departments",
            Self::Members => "members",
            Self::Projects => "projects",
            Self::Tasks => "tasks",
            Self::Comments => "comments",
            Self::Attachments => "attachments",
            Self::ClosedProjects => "closed-projects",
            Self::MeetingMinutes => "meeting-minutes",
            Self::AdminSettings => "admin-settings",
        }
    }

    /// Returns all known resources.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Resource] = &[
            Resource::Dashboard,
            Resource::Performance,
            Resource::Departments,
            Resource::Members,
            Resource::Projects,
            Resource::Tasks,
            Resource::Comments,
            Resource::Attachments,
            Resource::ClosedProjects,
            Resource::MeetingMinutes,
            Resource::AdminSettings,
        ];

        ALL
    }

    /// Returns the actions that exist for this resource.
    #[must_use]
    pub fn actions(&self) -> &'static [Action] {
        use Action::{AssignProjects, Create, Delete, Edit, ManageRoles, Upload, View};

        match self {
            Self::Dashboard | Self::Performance => &[View],
            Self::Departments
            | Self::Projects
            | Self::Tasks
            | Self::Comments
            | Self::MeetingMinutes => &[View, Create, Edit, Delete],
            Self::Members => &[View, Create, Edit, Delete, ManageRoles, AssignProjects],
            Self::Attachments => &[View, Upload, Delete],
            Self::ClosedProjects => &[View, Edit, Delete],
            Self::AdminSettings => &[View, Edit],
        }
    }

    /// Parses a transport value into a resource.
    pub fn from_transport(value: &str) -> AppResult<Self> {
        Self::from_str(value)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|resource| resource.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown resource value '{value}'")))
    }
}

/// Operations that can be performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read access.
    View,
    /// Create new records.
    Create,
    /// Modify existing records.
    Edit,
    /// Remove records.
    Delete,
    /// Upload files.
    Upload,
    /// Change the role of a member.
    ManageRoles,
    /// Attach projects to a member.
    AssignProjects,
}

impl Action {
    /// Returns a stable transport value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Upload => "upload",
            Self::ManageRoles => "manage_roles",
            Self::AssignProjects => "assign_projects",
        }
    }

    /// Returns all known actions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Action] = &[
            Action::View,
            Action::Create,
            Action::Edit,
            Action::Delete,
            Action::Upload,
            Action::ManageRoles,
            Action::AssignProjects,
        ];

        ALL
    }

    /// Parses a transport value into an action.
    pub fn from_transport(value: &str) -> AppResult<Self> {
        Self::from_str(value)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|action| action.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown action value '{value}'")))
    }
}

/// One explicit allow/deny decision for a resource and action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionEntry {
    /// Protected resource.
    pub resource: Resource,
    /// Operation on the resource.
    pub action: Action,
    /// Whether the operation is allowed.
    pub allowed: bool,
}

impl PermissionEntry {
    /// Creates an allowing entry.
    #[must_use]
    pub fn allow(resource: Resource, action: Action) -> Self {
        Self {
            resource,
            action,
            allowed: true,
        }
    }

    /// Creates a denying entry.
    #[must_use]
    pub fn deny(resource: Resource, action: Action) -> Self {
        Self {
            resource,
            action,
            allowed: false,
        }
    }
}

/// Full permission list of a single role.
///
/// Each resource and action pair appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissionSet {
    role: Role,
    entries: BTreeMap<(Resource, Action), bool>,
}

impl RolePermissionSet {
    /// Creates a permission set, rejecting duplicate resource and action pairs.
    pub fn new(role: Role, permissions: impl IntoIterator<Item = PermissionEntry>) -> AppResult<Self> {
        let mut entries = BTreeMap::new();

        for entry in permissions {
            if entries
                .insert((entry.resource, entry.action), entry.allowed)
                .is_some()
            {
                return Err(AppError::Conflict(format!(
                    "role '{role}' declares '{}.{}' more than once",
                    entry.resource, entry.action
                )));
            }
        }

        Ok(Self { role, entries })
    }

    /// Creates a set with one entry for every catalog pair.
    pub(crate) fn from_catalog(role: Role, grant: impl Fn(Resource, Action) -> bool) -> Self {
        let entries = crate::PermissionTable::catalog()
            .map(|(resource, action)| ((resource, action), grant(resource, action)))
            .collect();

        Self { role, entries }
    }

    /// Returns the role this set belongs to.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the explicit entry for a pair, if one is declared.
    #[must_use]
    pub fn entry(&self, resource: Resource, action: Action) -> Option<PermissionEntry> {
        self.entries
            .get(&(resource, action))
            .map(|allowed| PermissionEntry {
                resource,
                action,
                allowed: *allowed,
            })
    }

    /// Returns every declared entry in resource then action order.
    pub fn permissions(&self) -> impl Iterator<Item = PermissionEntry> + '_ {
        self.entries
            .iter()
            .map(|((resource, action), allowed)| PermissionEntry {
                resource: *resource,
                action: *action,
                allowed: *allowed,
            })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Action, PermissionEntry, Resource, RolePermissionSet};
    use crate::Role;

    #[test]
    fn resource_and_action_transport_values_roundtrip() {
        for resource in Resource::all() {
            assert_eq!(Resource::from_str(resource.as_str()).ok(), Some(*resource));
            let rendered = serde_json::to_string(resource).unwrap_or_default();
            assert_eq!(rendered, format!("\"{}\"", resource.as_str()));
        }
        for action in Action::all() {
            assert_eq!(Action::from_str(action.as_str()).ok(), Some(*action));
            let rendered = serde_json::to_string(action).unwrap_or_default();
            assert_eq!(rendered, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn unknown_vocabulary_is_rejected() {
        assert!(Resource::from_transport("expenses").is_err());
        assert!(Action::from_transport("approve").is_err());
        assert!(Action::from_transport("VIEW").is_err());
    }

    #[test]
    fn duplicate_pairs_are_rejected() {
        let result = RolePermissionSet::new(
            Role::User,
            [
                PermissionEntry::allow(Resource::Projects, Action::View),
                PermissionEntry::deny(Resource::Projects, Action::View),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_entry_is_reported_as_absent() {
        let set = RolePermissionSet::new(
            Role::User,
            [PermissionEntry::allow(Resource::Projects, Action::View)],
        );
        let set = match set {
            Ok(set) => set,
            Err(error) => panic!("unexpected error: {error}"),
        };

        assert_eq!(
            set.entry(Resource::Projects, Action::View),
            Some(PermissionEntry::allow(Resource::Projects, Action::View))
        );
        assert_eq!(set.entry(Resource::Projects, Action::Delete), None);
        assert_eq!(set.permissions().count(), 1);
    }
}
