use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Values are Postgres `bigint`s: anything past `i64::MAX` fails to
/// deserialize and negatives fail validation, both as 422.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct Pagination {
    #[validate(range(min = 0, message = "limit must be greater than or equal to 0"))]
    pub limit: Option<i64>,
    #[validate(range(min = 0, message = "offset must be greater than or equal to 0"))]
    pub offset: Option<i64>,
}

impl Pagination {
    pub const DEFAULT_LIMIT: u64 = 10;

    /// `(limit, offset)` with defaults applied. Only meaningful after
    /// validation; a stray negative falls back to the default.
    pub fn normalize(&self) -> (u64, u64) {
        let limit = self
            .limit
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(Self::DEFAULT_LIMIT);
        let offset = self.offset.and_then(|v| u64::try_from(v).ok()).unwrap_or(0);
        (limit, offset)
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct MakeQuery {
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ModelQuery {
    #[serde(rename = "make-id")]
    #[validate(range(min = 1, message = "make-id must be greater than 0"))]
    pub make_id: i32,
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RangeQuery {
    #[serde(rename = "model-id")]
    #[validate(range(min = 1, message = "model-id must be greater than 0"))]
    pub model_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerationQuery {
    #[serde(rename = "range-id")]
    #[validate(range(min = 1, message = "range-id must be greater than 0"))]
    pub range_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConfigurationQuery {
    #[serde(rename = "generation-id")]
    #[validate(range(min = 1, message = "generation-id must be greater than 0"))]
    pub generation_id: i32,
}
