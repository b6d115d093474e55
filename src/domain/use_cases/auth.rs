use validator::Validate;

use crate::auth::{
    denylist::TokenDenylist,
    password::{burn_verification, hash_password, verify_password},
};
use crate::entities::token::{AuthResponse, Claims};
use crate::entities::user::{LoginRequest, NewAdminUser, PublicUser, User};
use crate::errors::{AppError, AuthError, PasswordError};
use crate::repositories::token::TokenServiceRepository;
use crate::repositories::user::UserRepository;

pub struct AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub user_repo: R,
    pub token_service: T,
    denylist: TokenDenylist,
}

impl<R, T> AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub fn new(user_repo: R, token_service: T, denylist: TokenDenylist) -> Self {
        AuthHandler {
            user_repo,
            token_service,
            denylist,
        }
    }

    /// Creates the admin account unless the username is already taken.
    /// Returns whether a user was created.
    pub async fn seed_admin(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let request = NewAdminUser {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        request.validate().map_err(|errors| {
            let reasons = AppError::from(errors).to_string();
            AppError::from(PasswordError::TooWeak(reasons))
        })?;

        if self.user_repo.get_user_by_username(&request.username).await?.is_some() {
            tracing::info!(username = %request.username, "Admin user already exists, skipping seed");
            return Ok(false);
        }

        let password_hash = hash_password(&request.password)?;
        let id = self.user_repo.create_user(&request.prepare_for_insert(password_hash)).await?;

        tracing::info!(user_id = id, "Seeded admin user");
        Ok(true)
    }

    /// Checks credentials and issues an access token
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        let user = self.user_repo.get_user_by_username(&request.username)
            .await
            .map_err(|e| {
                tracing::error!("User lookup failed: {}", e);
                AuthError::AuthenticationFailed
            })?;

        let Some(user) = user else {
            burn_verification(&request.password);
            return Err(AuthError::WrongCredentials);
        };

        let is_password_valid = verify_password(&request.password, &user.password_hash)
            .map_err(|_| AuthError::WrongCredentials)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let response = self.create_auth_response(&user)?;

        tracing::info!(user_id = user.id, "User logged in successfully");
        Ok(response)
    }

    pub fn create_auth_response(&self, user: &User) -> Result<AuthResponse, AuthError> {
        let access_token = self.token_service.create_jwt(user)?;
        Ok(AuthResponse::new(access_token, self.token_service.expires_in_secs()))
    }

    /// Decodes a bearer token and rejects it when it has been revoked
    pub fn authenticate(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self.token_service.decode_jwt(token)?.claims;
        if self.denylist.is_revoked(token) {
            return Err(AuthError::TokenRevoked);
        }
        Ok(claims)
    }

    /// Revokes the token until it would have expired on its own
    pub fn logout(&self, token: &str) -> Result<(), AuthError> {
        let claims = self.authenticate(token)?;
        self.denylist.revoke(token, claims.exp);

        tracing::info!(user_id = %claims.sub, "User logged out");
        Ok(())
    }

    pub async fn current_user(&self, claims: &Claims) -> Result<PublicUser, AppError> {
        let id: i64 = claims.sub.parse().map_err(|_| AppError::UnauthorizedAccess)?;

        self.user_repo
            .get_user_by_id(id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }

    pub async fn check_connection(&self) -> Result<(), AppError> {
        self.user_repo.check_connection().await
    }

    pub fn denylist(&self) -> &TokenDenylist {
        &self.denylist
    }
}
