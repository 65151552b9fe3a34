use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ranges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle_models::Entity",
        from = "Column::ModelId",
        to = "super::vehicle_models::Column::Id"
    )]
    VehicleModels,
    #[sea_orm(has_many = "super::generations::Entity")]
    Generations,
}

impl Related<super::vehicle_models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleModels.def()
    }
}

impl Related<super::generations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Generations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
