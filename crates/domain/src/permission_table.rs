//! Canonical role permission matrix.
//!
//! The table is built once at startup and shared read-only. Lookups that find
//! no role set or no entry are reported as absent; callers deny in that case.

use std::collections::BTreeMap;

use planora_core::{AppError, AppResult};

use crate::{Action, PermissionEntry, Resource, Role, RolePermissionSet};

/// Immutable mapping from role to its permission set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTable {
    sets: BTreeMap<Role, RolePermissionSet>,
}

impl PermissionTable {
    /// Builds the hard-coded production matrix.
    ///
    /// Every catalog pair receives an explicit entry for every role.
    #[must_use]
    pub fn canonical() -> Self {
        let sets = Role::all()
            .iter()
            .map(|role| {
                let role = *role;
                let set = RolePermissionSet::from_catalog(role, |resource, action| {
                    canonical_grant(role, resource, action)
                });
                (role, set)
            })
            .collect();

        Self { sets }
    }

    /// Builds a table from explicit role sets.
    ///
    /// Roles without a set are allowed and deny everything.
    pub fn from_sets(sets: impl IntoIterator<Item = RolePermissionSet>) -> AppResult<Self> {
        let mut by_role = BTreeMap::new();

        for set in sets {
            let role = set.role();
            if by_role.insert(role, set).is_some() {
                return Err(AppError::Conflict(format!(
                    "permission table declares role '{role}' more than once"
                )));
            }
        }

        Ok(Self { sets: by_role })
    }

    /// Returns every resource and action pair that exists in the system.
    pub fn catalog() -> impl Iterator<Item = (Resource, Action)> {
        Resource::all().iter().flat_map(|resource| {
            resource
                .actions()
                .iter()
                .map(move |action| (*resource, *action))
        })
    }

    /// Returns the permission set configured for a role.
    #[must_use]
    pub fn role_set(&self, role: Role) -> Option<&RolePermissionSet> {
        self.sets.get(&role)
    }

    /// Returns the explicit entry for a role, resource and action.
    #[must_use]
    pub fn lookup(&self, role: Role, resource: Resource, action: Action) -> Option<PermissionEntry> {
        self.role_set(role)
            .and_then(|set| set.entry(resource, action))
    }

    /// Returns every configured role set in role order.
    pub fn role_sets(&self) -> impl Iterator<Item = &RolePermissionSet> {
        self.sets.values()
    }
}

fn canonical_grant(role: Role, resource: Resource, action: Action) -> bool {
    match role {
        Role::SuperAdmin => true,
        Role::Admin => admin_grant(resource, action),
        Role::Manager => manager_grant(resource, action),
        Role::User => user_grant(resource, action),
    }
}

fn admin_grant(resource: Resource, action: Action) -> bool {
    !matches!(
        (resource, action),
        (Resource::Members, Action::ManageRoles)
            | (Resource::AdminSettings, Action::Edit)
            | (Resource::MeetingMinutes, Action::Delete)
    )
}

fn manager_grant(resource: Resource, action: Action) -> bool {
    match resource {
        Resource::Dashboard | Resource::Performance | Resource::Departments => {
            action == Action::View
        }
        Resource::Members => matches!(action, Action::View | Action::AssignProjects),
        Resource::Projects => matches!(action, Action::View | Action::Create | Action::Edit),
        Resource::Tasks | Resource::Comments | Resource::Attachments => true,
        Resource::ClosedProjects => action == Action::View,
        Resource::MeetingMinutes => true,
        Resource::AdminSettings => false,
    }
}

fn user_grant(resource: Resource, action: Action) -> bool {
    match resource {
        Resource::Dashboard | Resource::Departments | Resource::Projects => action == Action::View,
        Resource::Performance | Resource::AdminSettings => false,
        Resource::Members => matches!(action, Action::View | Action::AssignProjects),
        Resource::Tasks | Resource::Comments => {
            matches!(action, Action::View | Action::Create | Action::Edit)
        }
        Resource::Attachments => matches!(action, Action::View | Action::Upload),
        Resource::ClosedProjects | Resource::MeetingMinutes => action == Action::View,
    }
}
