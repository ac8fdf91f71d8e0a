mod access;
mod assignments;
mod common;
mod records;

pub use access::{
    PermissionCheckRequest, PermissionEntryResponse, RolePermissionsResponse,
    VisiblePagesResponse,
};
pub use assignments::{AssignmentEligibilityRequest, AssignmentValidationRequest};
pub use common::{DecisionResponse, HealthResponse};
pub use records::{
    CanManageMemberRequest, MemberPayload, MemberScopeRequest, ProjectPayload,
    ProjectScopeRequest, member_records, project_records,
};
