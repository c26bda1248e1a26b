//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rehydrate a trusted row without re-running entity validation
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User::restore(
            model.id,
            model.email,
            model.password_hash,
            model.name,
            model.created_at,
        )
    }
}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        use sea_orm::ActiveValue::Set;

        ActiveModel {
            id: Set(user.id()),
            email: Set(user.email().to_string()),
            password_hash: Set(user.password_hash().to_string()),
            name: Set(user.name().to_string()),
            created_at: Set(user.created_at()),
        }
    }
}
