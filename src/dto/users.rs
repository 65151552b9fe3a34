use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::entity::users::UserRole;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(max = 100))]
    #[schema(example = "Филатов", max_length = 100)]
    pub last_name: String,
    #[validate(length(max = 50))]
    #[schema(example = "Никита", max_length = 50)]
    pub first_name: String,
    #[validate(length(max = 40))]
    #[schema(example = "Андреевич", max_length = 40)]
    pub patronymic: Option<String>,
    #[validate(custom(function = "super::validators::validate_birthday"))]
    #[schema(example = "1984-09-05")]
    pub birthday: NaiveDate,
    #[validate(custom(function = "super::validators::validate_phone"))]
    #[schema(example = "+7 (950) 732-13-83")]
    pub phone: String,
    #[validate(email(message = "Invalid email address."), length(max = 255))]
    #[schema(example = "nikita.filatov@yandex.ru")]
    pub email: String,
    pub role: UserRole,
    #[validate(custom(function = "super::validators::validate_login"))]
    #[schema(example = "zz_filin_zz")]
    pub login: String,
    #[validate(custom(function = "super::validators::validate_password"))]
    #[schema(example = "2a_B4-cJ_q5")]
    pub password: String,
}

/// Every field is optional; absent and `null` fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(length(max = 50))]
    pub first_name: Option<String>,
    #[validate(length(max = 40))]
    pub patronymic: Option<String>,
    #[validate(custom(function = "super::validators::validate_birthday"))]
    pub birthday: Option<NaiveDate>,
    #[validate(custom(function = "super::validators::validate_phone"))]
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email address."), length(max = 255))]
    pub email: Option<String>,
    pub role: Option<UserRole>,
    #[validate(custom(function = "super::validators::validate_login"))]
    pub login: Option<String>,
    #[validate(custom(function = "super::validators::validate_password"))]
    pub password: Option<String>,
}

/// The unique user columns a request carries, in conflict-check order.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueUserFields<'a> {
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub login: Option<&'a str>,
}

impl<'a> UniqueUserFields<'a> {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none() && self.login.is_none()
    }
}

impl<'a> From<&'a CreateUserRequest> for UniqueUserFields<'a> {
    fn from(req: &'a CreateUserRequest) -> Self {
        Self {
            phone: Some(req.phone.as_str()),
            email: Some(req.email.as_str()),
            login: Some(req.login.as_str()),
        }
    }
}

impl<'a> From<&'a UpdateUserRequest> for UniqueUserFields<'a> {
    fn from(req: &'a UpdateUserRequest) -> Self {
        Self {
            phone: req.phone.as_deref(),
            email: req.email.as_deref(),
            login: req.login.as_deref(),
        }
    }
}
