use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::services::{CreateServiceRequest, UpdateServiceRequest},
    error::AppResult,
    extractors::{IdPath, ValidatedJson, ValidatedQuery},
    models::ServiceRead,
    response::{ErrorDetail, ValidationDetail},
    routes::params::Pagination,
    services::listing_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services).post(create_service))
        .route("/services/", get(list_services).post(create_service))
        .route(
            "/services/{id}",
            get(get_service).patch(update_service).delete(delete_service),
        )
}

#[utoipa::path(
    get,
    path = "/services/{id}",
    params(
        ("id" = i32, Path, description = "Service ID, greater than 0")
    ),
    responses(
        (status = 200, description = "Return the service", body = ServiceRead),
        (status = 404, description = "Service not found", body = ErrorDetail),
        (status = 422, description = "Invalid id", body = ValidationDetail),
    ),
    tag = "services"
)]
pub async fn get_service(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ServiceRead>> {
    let service = listing_service::get_service(&state, id).await?;
    Ok(Json(service))
}

#[utoipa::path(
    get,
    path = "/services/",
    params(
        ("limit" = Option<u64>, Query, description = "Maximum number of services, default 10"),
        ("offset" = Option<u64>, Query, description = "Number of services to skip, default 0"),
    ),
    responses(
        (status = 200, description = "Return a list of services", body = Vec<ServiceRead>)
    ),
    tag = "services"
)]
pub async fn list_services(
    State(state): State<AppState>,
    ValidatedQuery(page): ValidatedQuery<Pagination>,
) -> AppResult<Json<Vec<ServiceRead>>> {
    let services = listing_service::list_services(&state, page).await?;
    Ok(Json(services))
}

#[utoipa::path(
    post,
    path = "/services/",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Create the service", body = ServiceRead),
        (status = 422, description = "Validation error", body = ValidationDetail),
    ),
    tag = "services"
)]
pub async fn create_service(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateServiceRequest>,
) -> AppResult<(StatusCode, Json<ServiceRead>)> {
    let service = listing_service::create_service(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

#[utoipa::path(
    patch,
    path = "/services/{id}",
    params(
        ("id" = i32, Path, description = "Service ID, greater than 0")
    ),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Update the service (blank values are ignored)", body = ServiceRead),
        (status = 404, description = "Service not found", body = ErrorDetail),
        (status = 422, description = "Validation error", body = ValidationDetail),
    ),
    tag = "services"
)]
pub async fn update_service(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateServiceRequest>,
) -> AppResult<Json<ServiceRead>> {
    let service = listing_service::update_service(&state, id, payload).await?;
    Ok(Json(service))
}

#[utoipa::path(
    delete,
    path = "/services/{id}",
    params(
        ("id" = i32, Path, description = "Service ID, greater than 0")
    ),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found", body = ErrorDetail),
    ),
    tag = "services"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    listing_service::delete_service(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
