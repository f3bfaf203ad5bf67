//! Session state and the auth collaborator.
//!
//! Screens receive a [`Session`] through context and only read it; sign-in
//! and sign-out go through an [`AuthService`].

use std::future::Future;

use shared_types::{AppError, AuthUser, LoginRequest, SignUpRequest, UserRole};
use validator::Validate;

const LOGIN_FAILED: &str = "Invalid email or password";
const SIGN_UP_FAILED: &str = "Failed to sign up";

/// Who is signed in, if anyone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    user: Option<AuthUser>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn sign_in(&mut self, user: AuthUser) {
        tracing::info!(user_id = %user.id, role = user.role.as_str(), "signed in");
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "signed out");
        }
    }
}

/// Backend that authenticates users.
///
/// Implementations return user-facing errors; details belong in the log.
pub trait AuthService {
    fn login(&self, request: &LoginRequest) -> impl Future<Output = Result<AuthUser, AppError>>;

    fn sign_up(&self, request: &SignUpRequest)
        -> impl Future<Output = Result<AuthUser, AppError>>;

    fn logout(&self) -> impl Future<Output = Result<(), AppError>>;
}

/// Placeholder auth that accepts any well-formed input.
///
/// Login yields the demo identity "John Doe" with a configurable role;
/// sign-up yields an administrator whose role follows the admin type.
#[derive(Debug, Clone, PartialEq)]
pub struct MockAuthService {
    login_role: UserRole,
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::new(UserRole::SchoolAdmin)
    }
}

impl MockAuthService {
    pub fn new(login_role: UserRole) -> Self {
        Self { login_role }
    }
}

impl AuthService for MockAuthService {
    #[tracing::instrument(skip_all, fields(email = %request.email))]
    async fn login(&self, request: &LoginRequest) -> Result<AuthUser, AppError> {
        if let Err(e) = request.validate() {
            tracing::warn!(error = %AppError::from(e), "login rejected");
            return Err(AppError::unauthorized(LOGIN_FAILED));
        }
        Ok(AuthUser {
            id: "1".to_string(),
            email: request.email.trim().to_string(),
            name: "John Doe".to_string(),
            role: self.login_role,
            organization_name: None,
        })
    }

    #[tracing::instrument(skip_all, fields(email = %request.email))]
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthUser, AppError> {
        if let Err(e) = request.validate() {
            tracing::warn!(error = %AppError::from(e), "sign-up rejected");
            return Err(AppError::bad_request(SIGN_UP_FAILED));
        }
        Ok(AuthUser {
            id: "1".to_string(),
            email: request.email.trim().to_string(),
            name: request.name.trim().to_string(),
            role: request.admin_type.admin_role(),
            organization_name: Some(request.organization_name.trim().to_string()),
        })
    }

    async fn logout(&self) -> Result<(), AppError> {
        Ok(())
    }
}
