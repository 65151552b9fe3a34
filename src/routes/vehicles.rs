use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    extractors::ValidatedQuery,
    models::{ConfigurationRead, GenerationRead, MakeRead, ModelRead, RangeRead},
    response::{ErrorDetail, ValidationDetail},
    routes::params::{ConfigurationQuery, GenerationQuery, MakeQuery, ModelQuery, RangeQuery},
    services::vehicle_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/makes", get(list_makes))
        .route("/makes/", get(list_makes))
        .route("/models", get(list_models))
        .route("/models/", get(list_models))
        .route("/ranges", get(list_ranges))
        .route("/ranges/", get(list_ranges))
        .route("/generations", get(list_generations))
        .route("/generations/", get(list_generations))
        .route("/configurations", get(list_configurations))
        .route("/configurations/", get(list_configurations))
}

/// Makes sorted by name; `query` keeps only names containing it, ignoring case.
#[utoipa::path(
    get,
    path = "/makes/",
    params(
        ("query" = Option<String>, Query, description = "Case-insensitive substring of the make name"),
    ),
    responses(
        (status = 200, description = "Return a list of makes", body = Vec<MakeRead>)
    ),
    tag = "vehicles"
)]
pub async fn list_makes(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<MakeQuery>,
) -> AppResult<Json<Vec<MakeRead>>> {
    Ok(Json(vehicle_service::list_makes(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/models/",
    params(
        ("make-id" = i32, Query, description = "Make ID, greater than 0"),
        ("query" = Option<String>, Query, description = "Case-insensitive substring of the model name"),
    ),
    responses(
        (status = 200, description = "Return a list of models", body = Vec<ModelRead>),
        (status = 404, description = "Vehicle make not found", body = ErrorDetail),
        (status = 422, description = "Missing or invalid make-id", body = ValidationDetail),
    ),
    tag = "vehicles"
)]
pub async fn list_models(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ModelQuery>,
) -> AppResult<Json<Vec<ModelRead>>> {
    Ok(Json(vehicle_service::list_models(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/ranges/",
    params(
        ("model-id" = i32, Query, description = "Model ID, greater than 0"),
    ),
    responses(
        (status = 200, description = "Return a list of ranges", body = Vec<RangeRead>),
        (status = 404, description = "Vehicle model not found", body = ErrorDetail),
        (status = 422, description = "Missing or invalid model-id", body = ValidationDetail),
    ),
    tag = "vehicles"
)]
pub async fn list_ranges(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<RangeQuery>,
) -> AppResult<Json<Vec<RangeRead>>> {
    Ok(Json(vehicle_service::list_ranges(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/generations/",
    params(
        ("range-id" = i32, Query, description = "Range ID, greater than 0"),
    ),
    responses(
        (status = 200, description = "Return a list of generations", body = Vec<GenerationRead>),
        (status = 404, description = "Vehicles model range not found", body = ErrorDetail),
        (status = 422, description = "Missing or invalid range-id", body = ValidationDetail),
    ),
    tag = "vehicles"
)]
pub async fn list_generations(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<GenerationQuery>,
) -> AppResult<Json<Vec<GenerationRead>>> {
    Ok(Json(vehicle_service::list_generations(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/configurations/",
    params(
        ("generation-id" = i32, Query, description = "Generation ID, greater than 0"),
    ),
    responses(
        (status = 200, description = "Return a list of configurations", body = Vec<ConfigurationRead>),
        (status = 404, description = "Vehicle generation not found", body = ErrorDetail),
        (status = 422, description = "Missing or invalid generation-id", body = ValidationDetail),
    ),
    tag = "vehicles"
)]
pub async fn list_configurations(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ConfigurationQuery>,
) -> AppResult<Json<Vec<ConfigurationRead>>> {
    Ok(Json(vehicle_service::list_configurations(&state, query).await?))
}
