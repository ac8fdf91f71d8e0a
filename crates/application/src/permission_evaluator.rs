use std::str::FromStr;
use std::sync::Arc;

use planora_core::{AppError, AppResult};
use planora_domain::{Action, Actor, Page, PermissionEntry, PermissionTable, Resource, Role};
use tracing::debug;

/// Coarse resource and action gate backed by the permission table.
///
/// Every other access decision routes through this type.
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    table: Arc<PermissionTable>,
}

impl PermissionEvaluator {
    /// Creates an evaluator over a shared permission table.
    #[must_use]
    pub fn new(table: Arc<PermissionTable>) -> Self {
        Self { table }
    }

    /// Returns the table the evaluator reads from.
    #[must_use]
    pub fn table(&self) -> &PermissionTable {
        &self.table
    }

    /// Returns whether the actor may perform the action on the resource.
    ///
    /// A missing actor, a role without a permission set and an undeclared
    /// pair all deny.
    #[must_use]
    pub fn has_permission(&self, actor: Option<&Actor>, resource: Resource, action: Action) -> bool {
        actor
            .map(|actor| self.role_allows(actor.role(), resource, action))
            .unwrap_or(false)
    }

    /// Same as [`Self::has_permission`] for transport values.
    ///
    /// Unknown resource or action names deny.
    #[must_use]
    pub fn has_permission_named(&self, actor: Option<&Actor>, resource: &str, action: &str) -> bool {
        match (Resource::from_str(resource), Action::from_str(action)) {
            (Ok(resource), Ok(action)) => self.has_permission(actor, resource, action),
            _ => {
                debug!(resource, action, "denying check for unknown permission pair");
                false
            }
        }
    }

    /// Returns whether the role's table entry allows the pair.
    #[must_use]
    pub fn role_allows(&self, role: Role, resource: Resource, action: Action) -> bool {
        self.table
            .lookup(role, resource, action)
            .map(|entry| entry.allowed)
            .unwrap_or(false)
    }

    /// Ensures the actor may perform the action, for route-level short-circuits.
    pub fn require_permission(
        &self,
        actor: Option<&Actor>,
        resource: Resource,
        action: Action,
    ) -> AppResult<()> {
        let Some(actor) = actor else {
            return Err(AppError::Unauthorized("authentication required".to_owned()));
        };

        if self.has_permission(Some(actor), resource, action) {
            return Ok(());
        }

        debug!(
            actor_id = %actor.id(),
            role = %actor.role(),
            %resource,
            %action,
            "permission denied"
        );
        Err(AppError::Forbidden(format!(
            "role '{}' is missing permission '{resource}.{action}'",
            actor.role()
        )))
    }

    /// Returns whether the actor may open a navigation page.
    ///
    /// Pages are gated by the `view` action of their resource. Unknown page
    /// identifiers deny.
    #[must_use]
    pub fn can_access_page(&self, actor: Option<&Actor>, page_id: &str) -> bool {
        Page::from_str(page_id)
            .map(|page| self.has_permission(actor, page.resource(), Action::View))
            .unwrap_or(false)
    }

    /// Returns the navigation pages the actor may open, in menu order.
    #[must_use]
    pub fn visible_pages(&self, actor: Option<&Actor>) -> Vec<Page> {
        Page::all()
            .iter()
            .copied()
            .filter(|page| self.has_permission(actor, page.resource(), Action::View))
            .collect()
    }

    /// Returns the actor's decision for every catalog pair.
    ///
    /// Pairs missing from the table are reported as denied.
    #[must_use]
    pub fn permissions_for(&self, actor: Option<&Actor>) -> Vec<PermissionEntry> {
        PermissionTable::catalog()
            .map(|(resource, action)| PermissionEntry {
                resource,
                action,
                allowed: self.has_permission(actor, resource, action),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
