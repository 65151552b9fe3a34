use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest},
    error::AppResult,
    extractors::{IdPath, ValidatedJson, ValidatedQuery},
    models::UserRead,
    response::{ErrorDetail, ValidationDetail},
    routes::params::Pagination,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID, greater than 0")
    ),
    responses(
        (status = 200, description = "Return the user", body = UserRead),
        (status = 404, description = "User not found", body = ErrorDetail),
        (status = 422, description = "Invalid id", body = ValidationDetail),
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<UserRead>> {
    let user = user_service::get_user(&state, id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/users/",
    params(
        ("limit" = Option<u64>, Query, description = "Maximum number of users, default 10"),
        ("offset" = Option<u64>, Query, description = "Number of users to skip, default 0"),
    ),
    responses(
        (status = 200, description = "Return a list of users", body = Vec<UserRead>)
    ),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(page): ValidatedQuery<Pagination>,
) -> AppResult<Json<Vec<UserRead>>> {
    let users = user_service::list_users(&state, page).await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/users/",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Create the user", body = UserRead),
        (status = 409, description = "Phone, email or login already taken", body = ErrorDetail),
        (status = 422, description = "Validation error", body = ValidationDetail),
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserRead>)> {
    let user = user_service::create_user(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID, greater than 0")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Update the user (blank values are ignored)", body = UserRead),
        (status = 404, description = "User not found", body = ErrorDetail),
        (status = 409, description = "Phone, email or login already taken", body = ErrorDetail),
        (status = 422, description = "Validation error", body = ValidationDetail),
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserRead>> {
    let user = user_service::update_user(&state, id, payload).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID, greater than 0")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDetail),
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    user_service::delete_user(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
