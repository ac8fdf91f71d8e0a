//! Access-control services shared by the API and the frontend mirror.

#![forbid(unsafe_code)]

mod access_control;
mod assignment_guard;
mod permission_evaluator;
mod scope_filter;

pub use access_control::AccessControl;
pub use assignment_guard::AssignmentGuard;
pub use permission_evaluator::PermissionEvaluator;
pub use scope_filter::ScopeFilter;
