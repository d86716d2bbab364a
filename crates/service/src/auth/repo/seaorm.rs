use sea_orm::DatabaseConnection;

use models::account;
use models::errors::ModelError;

use crate::auth::domain::{AuthUser, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

#[derive(Clone)]
pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAuthRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn map_model_err(e: ModelError) -> AuthError {
    match e {
        ModelError::Validation(msg) => AuthError::Validation(msg),
        ModelError::Duplicate(_) => AuthError::Conflict,
        ModelError::Db(msg) => AuthError::Repository(msg),
    }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_credentials_by_username(&self, username: &str) -> Result<Option<Credentials>, AuthError> {
        let res = account::find_by_username(&self.db, username)
            .await
            .map_err(map_model_err)?;
        Ok(res.map(|a| Credentials {
            user: AuthUser { id: a.id, username: a.username },
            password_hash: a.password,
        }))
    }

    async fn create_user(&self, username: &str, password_hash: String) -> Result<AuthUser, AuthError> {
        let created = account::create(&self.db, username, &password_hash)
            .await
            .map_err(map_model_err)?;
        Ok(AuthUser { id: created.id, username: created.username })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn create_then_find_by_username() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let repo = SeaOrmAuthRepository::new(t.db.clone());

        let user = repo.create_user("dana", "$argon2id$stub".into()).await?;
        let creds = repo.find_credentials_by_username("dana").await?.expect("stored");
        assert_eq!(creds.user, user);
        assert_eq!(creds.password_hash, "$argon2id$stub");

        assert!(repo.find_credentials_by_username("nobody").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_username_is_conflict() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let repo = SeaOrmAuthRepository::new(t.db.clone());
        repo.create_user("erin", "$argon2id$a".into()).await?;
        let err = repo.create_user("erin", "$argon2id$b".into()).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict));
        Ok(())
    }
}
