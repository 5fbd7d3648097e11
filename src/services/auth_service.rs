// src/services/auth_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::user::{AuthResponse, LoginRequest, NewUser, Role, SignupRequest, User},
    repositories::UserRepository,
    utils::{hash, jwt},
};

/// Registration and login.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt_secret: String,
    jwt_expiration: u64,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, config: &Config) -> Self {
        Self {
            users,
            jwt_secret: config.jwt_secret.clone(),
            jwt_expiration: config.jwt_expiration,
        }
    }

    /// Registers a Student or Educator.
    ///
    /// Students are approved immediately; Educators wait for an admin.
    pub async fn register(&self, request: SignupRequest) -> AppResult<User> {
        request.validate()?;

        if request.role == Role::Admin {
            return Err(AppError::BadRequest(
                "Admin accounts cannot be self-registered".to_string(),
            ));
        }

        if self.users.exists_by_email(&request.email).await? {
            return Err(AppError::Conflict(
                "User already exists with this email".to_string(),
            ));
        }

        let password_hash = hash::hash_password(&request.password)?;

        let user = self
            .users
            .create(&NewUser {
                name: request.name,
                email: request.email,
                password_hash,
                role: request.role,
                is_approved: request.role != Role::Educator,
                profile_pic: request.profile_pic,
                bio: request.bio,
                education: request.education,
            })
            .await?;

        tracing::info!("Registered user {} as {}", user.id, user.role.as_str());
        Ok(user)
    }

    /// Authenticates by email and password and issues a bearer token.
    ///
    /// Checks run in a fixed order: unknown email, wrong password, blocked
    /// account, unapproved educator.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !hash::verify_password(&request.password, &user.password)? {
            return Err(AppError::InvalidCredentials);
        }

        if user.is_deleted {
            return Err(AppError::Blocked);
        }

        if user.role == Role::Educator && !user.is_approved {
            return Err(AppError::ApprovalPending);
        }

        let token = jwt::sign_jwt(user.id, user.role, &self.jwt_secret, self.jwt_expiration)?;

        Ok(AuthResponse {
            token,
            token_type: "Bearer".to_string(),
            role: user.role,
            is_approved: user.is_approved,
        })
    }

    /// Creates the configured admin account unless the email is already taken.
    /// Returns true when a row was inserted.
    pub async fn seed_admin(&self, name: &str, email: &str, password: &str) -> AppResult<bool> {
        if self.users.exists_by_email(email).await? {
            return Ok(false);
        }

        let password_hash = hash::hash_password(password)?;
        self.users
            .create(&NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role: Role::Admin,
                is_approved: true,
                profile_pic: None,
                bio: None,
                education: None,
            })
            .await?;

        Ok(true)
    }
}
