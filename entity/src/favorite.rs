use sea_orm::entity::prelude::*;

/// Join row linking a user to exactly one character or one vehicle.
///
/// Exactly one of `character_id` / `vehicle_id` is set per row; the service
/// layer enforces this by construction rather than a schema constraint.
/// Catalog references are deliberately unconstrained integers so a favorite
/// can outlive its target; the listing skips such rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
