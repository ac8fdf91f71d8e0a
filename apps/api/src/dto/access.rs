use planora_domain::{Page, PermissionEntry, RolePermissionSet};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for a coarse permission check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-check-request.ts"
)]
pub struct PermissionCheckRequest {
    pub resource: String,
    pub action: String,
}

/// API representation of one permission entry.
#[derive(Debug, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-entry-response.ts"
)]
pub struct PermissionEntryResponse {
    pub resource: String,
    pub action: String,
    pub allowed: bool,
}

impl From<PermissionEntry> for PermissionEntryResponse {
    fn from(value: PermissionEntry) -> Self {
        Self {
            resource: value.resource.as_str().to_owned(),
            action: value.action.as_str().to_owned(),
            allowed: value.allowed,
        }
    }
}

/// API representation of one role's permission set, mirrored by the frontend.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-permissions-response.ts"
)]
pub struct RolePermissionsResponse {
    pub role: String,
    pub permissions: Vec<PermissionEntryResponse>,
}

impl From<&RolePermissionSet> for RolePermissionsResponse {
    fn from(value: &RolePermissionSet) -> Self {
        Self {
            role: value.role().as_str().to_owned(),
            permissions: value
                .permissions()
                .map(PermissionEntryResponse::from)
                .collect(),
        }
    }
}

/// Navigation pages the current actor may open.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/visible-pages-response.ts"
)]
pub struct VisiblePagesResponse {
    pub pages: Vec<String>,
}

impl From<Vec<Page>> for VisiblePagesResponse {
    fn from(value: Vec<Page>) -> Self {
        Self {
            pages: value
                .into_iter()
                .map(|page| page.as_str().to_owned())
                .collect(),
        }
    }
}
