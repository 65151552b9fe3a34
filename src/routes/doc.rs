use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        services::{CreateServiceRequest, UpdateServiceRequest},
        users::{CreateUserRequest, UpdateUserRequest},
    },
    entity::users::UserRole,
    models::{ConfigurationRead, GenerationRead, MakeRead, ModelRead, RangeRead, ServiceRead, UserRead},
    response::{ErrorDetail, FieldIssue, ValidationDetail},
    routes::{health, services, users, vehicles},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::get_user,
        users::list_users,
        users::create_user,
        users::update_user,
        users::delete_user,
        services::get_service,
        services::list_services,
        services::create_service,
        services::update_service,
        services::delete_service,
        vehicles::list_makes,
        vehicles::list_models,
        vehicles::list_ranges,
        vehicles::list_generations,
        vehicles::list_configurations
    ),
    components(
        schemas(
            UserRole,
            UserRead,
            CreateUserRequest,
            UpdateUserRequest,
            ServiceRead,
            CreateServiceRequest,
            UpdateServiceRequest,
            MakeRead,
            ModelRead,
            RangeRead,
            GenerationRead,
            ConfigurationRead,
            ErrorDetail,
            FieldIssue,
            ValidationDetail,
            health::HealthData
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "users", description = "User endpoints"),
        (name = "services", description = "Service listing endpoints"),
        (name = "vehicles", description = "Read-only vehicle catalog"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
