use serde::Serialize;
use utoipa::ToSchema;

/// Body returned for 404/409/500 responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// One failed constraint of a 422 response.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldIssue {
    /// Where the offending value came from, e.g. `["body", "phone"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldIssue {
    pub fn new(
        location: &str,
        field: impl Into<String>,
        msg: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            loc: vec![location.to_string(), field.into()],
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// Body returned for 422 responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationDetail {
    pub detail: Vec<FieldIssue>,
}
