use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceRequest {
    #[validate(length(max = 255))]
    #[schema(example = "LeCar Service", max_length = 255)]
    pub name: String,
    #[validate(length(max = 255))]
    #[schema(
        example = "г. Ярославль, р-н Красноперекопский, Московский проспект, д. 110, к. Б",
        max_length = 255
    )]
    pub address: String,
    #[validate(length(max = 500))]
    #[schema(example = "Сервис по ремонту авто любой сложности.", max_length = 500)]
    pub summary: Option<String>,
    #[validate(length(max = 255))]
    #[schema(example = "Ежедневно с 08:00 до 20:00", max_length = 255)]
    pub timetable: String,
    #[validate(length(max = 255))]
    #[schema(example = "https://yaroslavl.lecar.ru/", max_length = 255)]
    pub website: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceRequest {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(length(max = 500))]
    pub summary: Option<String>,
    #[validate(length(max = 255))]
    pub timetable: Option<String>,
    #[validate(length(max = 255))]
    pub website: Option<String>,
}
