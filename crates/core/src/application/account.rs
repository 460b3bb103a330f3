// User Account Use Cases - registration and login
//
// Deliberately thin: password hashes are verified here, but sessions,
// tokens and middleware live outside this service.

use std::sync::Arc;

use pbkdf2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::Pbkdf2;
use rand_core::OsRng;
use serde::{Deserialize, Serialize};

use crate::domain::User;
use crate::error::{AppError, Result, ValidationErrors};
use crate::port::{IdProvider, UserRepository};

const MIN_PASSWORD_LEN: usize = 8;
const MAX_USERNAME_LEN: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

fn validate_register(req: &RegisterUserRequest) -> std::result::Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if req.username.is_empty() || req.username.len() > MAX_USERNAME_LEN {
        errors.push(
            "username",
            format!("must be 1-{} characters", MAX_USERNAME_LEN),
        );
    } else if req.username.chars().any(char::is_whitespace) {
        errors.push("username", "must not contain whitespace");
    }

    if req.password.len() < MIN_PASSWORD_LEN {
        errors.push(
            "password",
            format!("must be at least {} characters", MIN_PASSWORD_LEN),
        );
    }

    if req.full_name.trim().is_empty() {
        errors.push("full_name", "must not be empty");
    }

    if req.role.trim().is_empty() {
        errors.push("role", "must not be empty");
    }

    errors.into_result()
}

/// User Account Service
pub struct AccountService {
    user_repo: Arc<dyn UserRepository>,
    id_provider: Arc<dyn IdProvider>,
}

impl AccountService {
    pub fn new(user_repo: Arc<dyn UserRepository>, id_provider: Arc<dyn IdProvider>) -> Self {
        Self {
            user_repo,
            id_provider,
        }
    }

    /// Register a new user account.
    ///
    /// As with patients, the username lookup is a fast path; the UNIQUE
    /// constraint decides duplicates.
    pub async fn register(&self, req: RegisterUserRequest) -> Result<User> {
        validate_register(&req).map_err(AppError::Validation)?;

        if self
            .user_repo
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            return Err(duplicate_username());
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Pbkdf2
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))?
            .to_string();

        let user = User {
            uuid: self.id_provider.generate_id(),
            username: req.username,
            password_hash,
            full_name: req.full_name.trim().to_string(),
            role: req.role.trim().to_string(),
        };

        self.user_repo.insert(&user).await.map_err(|err| match err {
            AppError::Conflict(_) => duplicate_username(),
            other => other,
        })?;

        tracing::info!(user = %user.uuid, username = %user.username, "user registered");
        Ok(user)
    }

    /// Verify credentials. Unknown username and wrong password produce
    /// the same message, so accounts cannot be enumerated.
    pub async fn login(&self, req: LoginRequest) -> Result<User> {
        let user = self
            .user_repo
            .find_by_username(&req.username)
            .await?
            .ok_or_else(invalid_credentials)?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| AppError::Internal(format!("stored password hash is invalid: {}", e)))?;

        Pbkdf2
            .verify_password(req.password.as_bytes(), &parsed)
            .map_err(|_| invalid_credentials())?;

        tracing::debug!(user = %user.uuid, "login succeeded");
        Ok(user)
    }
}

fn duplicate_username() -> AppError {
    AppError::BadRequest("username already taken".to_string())
}

fn invalid_credentials() -> AppError {
    AppError::BadRequest("invalid username or password".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterUserRequest {
        RegisterUserRequest {
            username: "dr.budi".to_string(),
            password: "correct horse".to_string(),
            full_name: "Budi Santoso".to_string(),
            role: "DOCTOR".to_string(),
        }
    }

    #[test]
    fn test_valid_register_request() {
        assert!(validate_register(&valid_request()).is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut req = valid_request();
        req.password = "short".to_string();
        assert!(validate_register(&req).is_err());
    }

    #[test]
    fn test_whitespace_username_rejected() {
        let mut req = valid_request();
        req.username = "dr budi".to_string();
        assert!(validate_register(&req).is_err());
    }

    #[test]
    fn test_all_fields_reported() {
        let req = RegisterUserRequest {
            username: String::new(),
            password: String::new(),
            full_name: String::new(),
            role: String::new(),
        };
        let errors = validate_register(&req).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
