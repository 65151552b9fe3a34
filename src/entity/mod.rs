pub mod configurations;
pub mod generations;
pub mod makes;
pub mod ranges;
pub mod services;
pub mod users;
pub mod vehicle_models;

pub use configurations::Entity as Configurations;
pub use generations::Entity as Generations;
pub use makes::Entity as Makes;
pub use ranges::Entity as Ranges;
pub use services::Entity as Services;
pub use users::Entity as Users;
pub use vehicle_models::Entity as VehicleModels;
