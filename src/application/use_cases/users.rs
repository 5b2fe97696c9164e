use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::application::{
    dto::{CreateUserRequest, LoginRequest},
    errors::UseCaseError,
    ports::{PasswordHasher, TokenService, UserRepository},
};
use crate::domain::{
    authorization::UserContext,
    changes::{into_changeset, parse_changes, UserChange},
    entities::{NewUser, User, UserDetail},
    validation::Validation,
    value_objects::Username,
};

/// Use case for creating users, either self-registration or by an admin.
///
/// Returns the stored user and a token for them.
pub struct CreateUserUseCase {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl CreateUserUseCase {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> Result<(User, String), UseCaseError> {
        let username = Username::new(request.username)?;
        Validation::validate_email(&request.email, "email")?;
        Validation::validate_length(&request.password, "password", Some(5), Some(20))?;

        let password_hash = self.hasher.hash(&request.password)?;
        let user = self
            .repository
            .create(&NewUser {
                username,
                password_hash,
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                is_admin: request.is_admin,
            })
            .await?;

        let token = self
            .tokens
            .issue(&UserContext::new(user.username.clone(), user.is_admin))?;

        info!(username = %user.username, is_admin = user.is_admin, "User created");
        Ok((user, token))
    }
}

/// Use case for exchanging a username and password for a token
pub struct AuthenticateUserUseCase {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl AuthenticateUserUseCase {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, request: LoginRequest) -> Result<String, UseCaseError> {
        let credentials = self.repository.find_credentials(&request.username).await?;

        // Unknown user and wrong password answer the same way
        let user = match credentials {
            Some(c) if self.hasher.verify(&request.password, &c.password_hash)? => c.user,
            _ => {
                warn!(username = %request.username, "Failed login");
                return Err(UseCaseError::Unauthorized(
                    "Invalid username/password".to_string(),
                ));
            }
        };

        Ok(self
            .tokens
            .issue(&UserContext::new(user.username, user.is_admin))?)
    }
}

pub struct ListUsersUseCase {
    repository: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<User>, UseCaseError> {
        Ok(self.repository.find_all().await?)
    }
}

/// Use case for fetching a user with the jobs they applied to
pub struct GetUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, username: &str) -> Result<UserDetail, UseCaseError> {
        Ok(self.repository.get(username).await?)
    }
}

/// Use case for partially updating a user; a new password is hashed first
pub struct UpdateUserUseCase {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdateUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    pub async fn execute(
        &self,
        username: &str,
        body: &Map<String, Value>,
    ) -> Result<User, UseCaseError> {
        let changes: Vec<UserChange> = parse_changes(body)?;
        if changes.is_empty() {
            return Err(UseCaseError::InvalidRequest("No data".to_string()));
        }

        let changes = changes
            .into_iter()
            .map(|change| match change {
                UserChange::Password(plain) => self.hasher.hash(&plain).map(UserChange::Password),
                other => Ok(other),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let user = self
            .repository
            .update(username, &into_changeset(changes))
            .await?;

        info!(username = %username, "User updated");
        Ok(user)
    }
}

pub struct DeleteUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, username: &str) -> Result<(), UseCaseError> {
        self.repository.remove(username).await?;
        info!(username = %username, "User deleted");
        Ok(())
    }
}
