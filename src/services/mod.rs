pub mod listing_service;
pub mod password;
pub mod user_service;
pub mod vehicle_service;
