use serde::Serialize;
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    message: String,
    /// Stable denial code for client-side messaging, when one applies.
    reason: Option<String>,
}

impl ErrorResponse {
    pub(super) fn new(message: String, reason: Option<&'static str>) -> Self {
        Self {
            message,
            reason: reason.map(str::to_owned),
        }
    }
}
