pub mod services;
pub mod users;
pub mod validators;
