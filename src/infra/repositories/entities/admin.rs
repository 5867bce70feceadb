//! Admin database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Admin;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Unique among rows with `removed = false` (partial index)
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub role: String,
    pub enabled: bool,
    pub removed: bool,
    pub created: DateTimeUtc,
    pub updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Admin {
    fn from(model: Model) -> Self {
        Admin {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            name: model.name,
            surname: model.surname,
            role: model.role,
            enabled: model.enabled,
            removed: model.removed,
            created: model.created,
            updated: model.updated,
        }
    }
}
