use std::sync::Arc;

use planora_domain::PermissionTable;

use crate::{AssignmentGuard, PermissionEvaluator, ScopeFilter};

/// Bundle of access services sharing one permission table.
#[derive(Debug, Clone)]
pub struct AccessControl {
    evaluator: PermissionEvaluator,
    scope: ScopeFilter,
    assignments: AssignmentGuard,
}

impl AccessControl {
    /// Wires the evaluator, scope filter and assignment guard over a table.
    #[must_use]
    pub fn new(table: Arc<PermissionTable>) -> Self {
        let evaluator = PermissionEvaluator::new(table);
        let scope = ScopeFilter::new(evaluator.clone());
        let assignments = AssignmentGuard::new(evaluator.clone(), scope.clone());

        Self {
            evaluator,
            scope,
            assignments,
        }
    }

    /// Wires the services over the canonical production table.
    #[must_use]
    pub fn canonical() -> Self {
        Self::new(Arc::new(PermissionTable::canonical()))
    }

    /// Returns the coarse permission gate.
    #[must_use]
    pub fn evaluator(&self) -> &PermissionEvaluator {
        &self.evaluator
    }

    /// Returns the record scope filter.
    #[must_use]
    pub fn scope(&self) -> &ScopeFilter {
        &self.scope
    }

    /// Returns the project assignment guard.
    #[must_use]
    pub fn assignments(&self) -> &AssignmentGuard {
        &self.assignments
    }
}

#[cfg(test)]
mod tests;
