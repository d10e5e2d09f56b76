//! Account registration, login and admin seeding.
//!
//! Passwords are hashed with bcrypt on a blocking thread so hashing never stalls the
//! async runtime.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterParams, User},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    cost: u32,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Uses a custom bcrypt cost. Lower costs are only meant for tests.
    pub fn with_cost(db: &'a DatabaseConnection, cost: u32) -> Self {
        Self { db, cost }
    }

    /// Registers a driver account.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account
    /// - `Err(AppError::BadRequest)` - Username, email or password missing
    /// - `Err(AuthError::UserExists)` - Username or email already registered
    pub async fn register(
        &self,
        params: RegisterParams,
        now: DateTime<Utc>,
    ) -> Result<User, AppError> {
        if params.username.is_empty() || params.email.is_empty() || params.password.is_empty() {
            return Err(AppError::BadRequest(
                "Username, email and password are required".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        if repo
            .exists_by_username_or_email(&params.username, &params.email)
            .await?
        {
            return Err(AuthError::UserExists.into());
        }

        let password_hash = self.hash(params.password).await?;
        let user = repo
            .create(
                CreateUserParams {
                    username: params.username,
                    email: params.email,
                    password_hash,
                    full_name: params.full_name,
                    admin: false,
                },
                now,
            )
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Verifies credentials and stamps the last visit.
    ///
    /// Unknown usernames and wrong passwords fail the same way.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with `last_visit` set to `now`
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let mut user = repo
            .find_by_username(username.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.verify(password, &user.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        repo.update_last_visit(user.id, now).await?;
        user.last_visit = Some(now);

        Ok(user)
    }

    /// Creates the configured admin account when no admin exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Admin account created
    /// - `Ok(None)` - An admin already exists or the username is taken
    pub async fn ensure_admin(
        &self,
        username: &str,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.admin_exists().await? {
            return Ok(None);
        }

        if repo.exists_by_username_or_email(username, email).await? {
            tracing::warn!(
                "No admin exists but username {} or email {} is taken by a regular account",
                username,
                email
            );
            return Ok(None);
        }

        let password_hash = self.hash(password.to_string()).await?;
        let admin = repo
            .create(
                CreateUserParams {
                    username: username.to_string(),
                    email: email.to_string(),
                    password_hash,
                    full_name: Some("Administrator".to_string()),
                    admin: true,
                },
                now,
            )
            .await?;

        tracing::info!("Created admin account {}", admin.username);

        Ok(Some(admin))
    }

    async fn hash(&self, password: String) -> Result<String, AppError> {
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
            .map_err(Into::into)
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::InternalError(format!("Password check task failed: {}", e)))?
            .map_err(Into::into)
    }
}
