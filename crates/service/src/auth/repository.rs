use async_trait::async_trait;

use super::domain::{AuthUser, Credentials};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Single lookup by the unique username, returning the stored hash with its owner.
    async fn find_credentials_by_username(&self, username: &str) -> Result<Option<Credentials>, AuthError>;
    /// Insert a user; a taken username yields `AuthError::Conflict`.
    async fn create_user(&self, username: &str, password_hash: String) -> Result<AuthUser, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, Credentials>>, // key: username
    }

    fn poisoned<T>(_: T) -> AuthError {
        AuthError::Repository("mock repository lock poisoned".into())
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_credentials_by_username(&self, username: &str) -> Result<Option<Credentials>, AuthError> {
            let users = self.users.lock().map_err(poisoned)?;
            Ok(users.get(username).cloned())
        }

        async fn create_user(&self, username: &str, password_hash: String) -> Result<AuthUser, AuthError> {
            let mut users = self.users.lock().map_err(poisoned)?;
            if users.contains_key(username) {
                return Err(AuthError::Conflict);
            }
            let user = AuthUser { id: users.len() as i32 + 1, username: username.to_string() };
            users.insert(username.to_string(), Credentials { user: user.clone(), password_hash });
            Ok(user)
        }
    }
}
