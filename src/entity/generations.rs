use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "generations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub photo_url: String,
    pub full_name: String,
    pub short_name: String,
    pub vehicle_body: String,
    pub range_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ranges::Entity",
        from = "Column::RangeId",
        to = "super::ranges::Column::Id"
    )]
    Ranges,
    #[sea_orm(has_many = "super::configurations::Entity")]
    Configurations,
}

impl Related<super::ranges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ranges.def()
    }
}

impl Related<super::configurations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Configurations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
