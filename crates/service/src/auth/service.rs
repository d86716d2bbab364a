use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use rand::rngs::OsRng;
use tracing::{info, debug, instrument};

use super::domain::{RegisterInput, LoginInput, AuthUser};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    hasher: Argon2<'static>,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo, hasher: Argon2::default() } }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo);
    /// let input = RegisterInput { username: "refiller".into(), password: "p".into() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.username, "refiller");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.hasher
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();

        let user = self.repo.create_user(&input.username, hash).await?;
        info!(user_id = user.id, username = %user.username, "user_registered");
        Ok(user)
    }

    /// Verify a username/password pair and return the matching user.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(MockAuthRepository::default()));
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { username: "a".into(), password: "p".into() }));
    /// let user = tokio_test::block_on(svc.login(LoginInput { username: "a".into(), password: "p".into() })).unwrap();
    /// assert_eq!(user.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthUser, AuthError> {
        let cred = self.repo
            .find_credentials_by_username(&input.username)
            .await?
            .ok_or_else(|| {
                debug!("unknown username");
                AuthError::Unauthorized
            })?;

        let parsed = PasswordHash::new(&cred.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if self.hasher.verify_password(input.password.as_bytes(), &parsed).is_err() {
            debug!(user_id = cred.user.id, "password mismatch");
            return Err(AuthError::Unauthorized);
        }

        info!(user_id = cred.user.id, "user_logged_in");
        Ok(cred.user)
    }
}
