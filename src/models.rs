//! Shapes returned to clients.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{
    configurations, generations, makes, ranges, services, users, users::UserRole, vehicle_models,
};

/// A user as seen by API clients. The password hash is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserRead {
    #[schema(example = 1)]
    pub id: i32,
    pub created: DateTime<FixedOffset>,
    pub updated: DateTime<FixedOffset>,
    #[schema(example = "Филатов")]
    pub last_name: String,
    #[schema(example = "Никита")]
    pub first_name: String,
    #[schema(example = "Андреевич")]
    pub patronymic: Option<String>,
    #[schema(example = "1984-09-05")]
    pub birthday: NaiveDate,
    #[schema(example = "+7 (950) 732-13-83")]
    pub phone: String,
    #[schema(example = "nikita.filatov@yandex.ru")]
    pub email: String,
    pub role: UserRole,
    #[schema(example = "zz_filin_zz")]
    pub login: String,
}

impl From<users::Model> for UserRead {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            created: model.created,
            updated: model.updated,
            last_name: model.last_name,
            first_name: model.first_name,
            patronymic: model.patronymic,
            birthday: model.birthday,
            phone: model.phone,
            email: model.email,
            role: model.role,
            login: model.login,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServiceRead {
    #[schema(example = 1)]
    pub id: i32,
    pub created: DateTime<FixedOffset>,
    pub updated: DateTime<FixedOffset>,
    #[schema(example = "LeCar Service")]
    pub name: String,
    pub address: String,
    pub summary: Option<String>,
    #[schema(example = "Ежедневно с 08:00 до 20:00")]
    pub timetable: String,
    #[schema(example = "https://yaroslavl.lecar.ru/")]
    pub website: Option<String>,
}

impl From<services::Model> for ServiceRead {
    fn from(model: services::Model) -> Self {
        Self {
            id: model.id,
            created: model.created,
            updated: model.updated,
            name: model.name,
            address: model.address,
            summary: model.summary,
            timetable: model.timetable,
            website: model.website,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MakeRead {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Renault")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModelRead {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Duster")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RangeRead {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Модельный ряд Renault Duster для России")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerationRead {
    #[schema(example = 1)]
    pub id: i32,
    pub photo_url: String,
    #[schema(example = "Renault Duster (HM)\n11.2020 - 07.2022")]
    pub full_name: String,
    #[schema(example = "2 поколение")]
    pub short_name: String,
    #[schema(example = "Джип/SUV 5 дв.")]
    pub vehicle_body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfigurationRead {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1.3)]
    pub engine_capacity: f64,
    #[schema(example = 149)]
    pub engine_power: i32,
    #[schema(example = "бензин")]
    pub engine_type: String,
    #[schema(example = "МКПП")]
    pub transmission: String,
    #[schema(example = "полный привод (4WD)")]
    pub drive: String,
}

impl From<makes::Model> for MakeRead {
    fn from(model: makes::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<vehicle_models::Model> for ModelRead {
    fn from(model: vehicle_models::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<ranges::Model> for RangeRead {
    fn from(model: ranges::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<generations::Model> for GenerationRead {
    fn from(model: generations::Model) -> Self {
        Self {
            id: model.id,
            photo_url: model.photo_url,
            full_name: model.full_name,
            short_name: model.short_name,
            vehicle_body: model.vehicle_body,
        }
    }
}

impl From<configurations::Model> for ConfigurationRead {
    fn from(model: configurations::Model) -> Self {
        Self {
            id: model.id,
            engine_capacity: model.engine_capacity,
            engine_power: model.engine_power,
            engine_type: model.engine_type,
            transmission: model.transmission,
            drive: model.drive,
        }
    }
}
