//! Domain entities and invariants of the access-control model.

#![forbid(unsafe_code)]

mod actor;
mod assignment;
mod navigation;
mod permission_table;
mod records;
mod role;
mod security;

pub use actor::Actor;
pub use assignment::AssignmentError;
pub use navigation::Page;
pub use permission_table::PermissionTable;
pub use records::{AssignableRecord, MemberRecord, ProjectRecord, duplicate_project_id};
pub use role::Role;
pub use security::{Action, PermissionEntry, Resource, RolePermissionSet};
