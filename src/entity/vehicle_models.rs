use sea_orm::entity::prelude::*;

/// A vehicle model (e.g. "Duster") belonging to a make.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "models")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub make_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::makes::Entity",
        from = "Column::MakeId",
        to = "super::makes::Column::Id"
    )]
    Makes,
    #[sea_orm(has_many = "super::ranges::Entity")]
    Ranges,
}

impl Related<super::makes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Makes.def()
    }
}

impl Related<super::ranges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ranges.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
