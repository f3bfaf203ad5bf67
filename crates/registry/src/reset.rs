//! Password-reset side action for directory users.
//!
//! `Idle -> Confirming -> Resetting -> Idle`. The backend call is behind
//! [`PasswordResetService`]; the flow only tracks which user is involved and
//! which step the dialog is on.

use std::future::Future;

use shared_types::{AppError, DirectoryUser};

/// Backend collaborator that performs the actual reset.
pub trait PasswordResetService {
    fn reset_password(&self, user: &DirectoryUser) -> impl Future<Output = Result<(), AppError>>;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResetState {
    #[default]
    Idle,
    Confirming(DirectoryUser),
    Resetting(DirectoryUser),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PasswordResetFlow {
    state: ResetState,
}

impl PasswordResetFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ResetState {
        &self.state
    }

    /// The user the dialog is about, if it is open.
    pub fn target(&self) -> Option<&DirectoryUser> {
        match &self.state {
            ResetState::Idle => None,
            ResetState::Confirming(user) | ResetState::Resetting(user) => Some(user),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ResetState::Idle)
    }

    pub fn is_resetting(&self) -> bool {
        matches!(self.state, ResetState::Resetting(_))
    }

    /// Open the confirmation dialog for `user`.
    pub fn request(&mut self, user: DirectoryUser) -> Result<(), AppError> {
        match self.state {
            ResetState::Idle => {
                tracing::debug!(user_id = %user.user_id, "password reset requested");
                self.state = ResetState::Confirming(user);
                Ok(())
            }
            _ => Err(AppError::conflict("A password reset is already in progress")),
        }
    }

    /// Dismiss the dialog. Not allowed once the reset is running.
    pub fn cancel(&mut self) -> Result<(), AppError> {
        match self.state {
            ResetState::Confirming(_) => {
                self.state = ResetState::Idle;
                Ok(())
            }
            ResetState::Resetting(_) => Err(AppError::conflict("Password reset is running")),
            ResetState::Idle => Err(AppError::conflict("No password reset to cancel")),
        }
    }

    /// Move to `Resetting` and return the user to reset.
    pub fn confirm(&mut self) -> Result<DirectoryUser, AppError> {
        match std::mem::take(&mut self.state) {
            ResetState::Confirming(user) => {
                self.state = ResetState::Resetting(user.clone());
                Ok(user)
            }
            other => {
                self.state = other;
                Err(AppError::conflict("Password reset was not awaiting confirmation"))
            }
        }
    }

    /// Like [`PasswordResetFlow::confirm`], but a repeat confirmation while
    /// the reset runs is ignored and yields `None`.
    pub fn confirm_once(&mut self) -> Result<Option<DirectoryUser>, AppError> {
        if self.is_resetting() {
            tracing::debug!("reset already running; confirmation ignored");
            return Ok(None);
        }
        self.confirm().map(Some)
    }

    /// Record the backend result and return to `Idle`.
    pub fn finish(&mut self, result: Result<(), AppError>) -> Result<(), AppError> {
        let ResetState::Resetting(user) = std::mem::take(&mut self.state) else {
            return Err(AppError::conflict("No password reset is running"));
        };
        match &result {
            Ok(()) => tracing::info!(user_id = %user.user_id, "password reset completed"),
            Err(e) => tracing::warn!(user_id = %user.user_id, error = %e, "password reset failed"),
        }
        result
    }

    /// Confirm, call `service`, and finish in one step.
    pub async fn run(&mut self, service: &impl PasswordResetService) -> Result<(), AppError> {
        let user = self.confirm()?;
        let result = service.reset_password(&user).await;
        self.finish(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, DirectoryUserType, Status};

    fn user() -> DirectoryUser {
        DirectoryUser {
            id: "1".into(),
            user_id: "STU001".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: String::new(),
            user_type: DirectoryUserType::Student,
            department: None,
            grade: Some("10".into()),
            status: Status::Active,
            last_login: None,
            last_logout: None,
            total_login_hours: 0.0,
            has_logged_in: false,
        }
    }

    #[test]
    fn happy_path_returns_to_idle() {
        let mut flow = PasswordResetFlow::new();
        flow.request(user()).unwrap();
        assert!(matches!(flow.state(), ResetState::Confirming(_)));
        let target = flow.confirm().unwrap();
        assert_eq!(target.user_id, "STU001");
        assert!(flow.is_resetting());
        flow.finish(Ok(())).unwrap();
        assert_eq!(flow.state(), &ResetState::Idle);
    }

    #[test]
    fn cancel_only_while_confirming() {
        let mut flow = PasswordResetFlow::new();
        assert!(flow.cancel().is_err());
        flow.request(user()).unwrap();
        flow.cancel().unwrap();
        assert!(!flow.is_open());

        flow.request(user()).unwrap();
        flow.confirm().unwrap();
        assert_eq!(flow.cancel().unwrap_err().kind, AppErrorKind::Conflict);
        assert!(flow.is_resetting());
    }

    #[test]
    fn confirm_from_idle_is_conflict() {
        let mut flow = PasswordResetFlow::new();
        assert_eq!(flow.confirm().unwrap_err().kind, AppErrorKind::Conflict);
        assert_eq!(flow.state(), &ResetState::Idle);
    }

    #[test]
    fn second_request_is_rejected() {
        let mut flow = PasswordResetFlow::new();
        flow.request(user()).unwrap();
        assert!(flow.request(user()).is_err());
    }

    #[test]
    fn failure_still_returns_to_idle() {
        let mut flow = PasswordResetFlow::new();
        flow.request(user()).unwrap();
        flow.confirm().unwrap();
        let err = flow.finish(Err(AppError::transport("offline"))).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Transport);
        assert!(!flow.is_open());
    }
}
