use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ContractType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub pen_name: String,
    pub contract_type: ContractType,
    /// Only present for buyout contracts
    pub buyout_amount: Option<f64>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(has_many = "super::royalty::Entity")]
    Royalty,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::royalty::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Royalty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
