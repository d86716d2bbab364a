use sea_orm::{entity::prelude::*, sea_query::Expr, DatabaseConnection, Set, SqlErr};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const USERNAME_MAX_LEN: usize = 80;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    /// argon2 PHC string
    #[serde(skip_serializing)]
    pub password: String,
    pub rewards: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_username(username: &str) -> Result<(), ModelError> {
    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(ModelError::Validation(format!("username longer than {USERNAME_MAX_LEN} characters")));
    }
    Ok(())
}

/// Insert a new account with zero rewards. `password_hash` must already be hashed.
pub async fn create(db: &DatabaseConnection, username: &str, password_hash: &str) -> Result<Model, ModelError> {
    validate_username(username)?;
    if password_hash.trim().is_empty() {
        return Err(ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        username: Set(username.to_string()),
        password: Set(password_hash.to_string()),
        rewards: Set(0),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ModelError::Duplicate(format!("username {username}")),
        _ => ModelError::Db(e.to_string()),
    })
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::Username.eq(username))
        .one(db)
        .await?;
    Ok(found)
}

/// Add `amount` to the stored balance in a single UPDATE and return the
/// refreshed row, or `None` when no account has this id.
///
/// The UPDATE only matches while the result still fits in `i32`; a balance
/// that would overflow is left untouched and reported as a validation error.
pub async fn add_rewards(db: &DatabaseConnection, id: i32, amount: i32) -> Result<Option<Model>, ModelError> {
    let res = Entity::update_many()
        .col_expr(Column::Rewards, Expr::col(Column::Rewards).add(amount))
        .filter(Column::Id.eq(id))
        .filter(Column::Rewards.lte(i32::MAX.saturating_sub(amount)))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return match find_by_id(db, id).await? {
            Some(_) => Err(ModelError::Validation("reward balance is at its maximum".into())),
            None => Ok(None),
        };
    }
    find_by_id(db, id).await
}
