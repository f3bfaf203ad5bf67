use std::cell::RefCell;

use pretty_assertions::assert_eq;
use registry::{PasswordResetFlow, PasswordResetService, ResetState};
use shared_types::{AppError, AppErrorKind, DirectoryUser};

use crate::common;

/// Records who was reset and answers with a scripted result.
struct RecordingReset {
    fail: bool,
    calls: RefCell<Vec<String>>,
}

impl RecordingReset {
    fn new(fail: bool) -> Self {
        Self {
            fail,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl PasswordResetService for RecordingReset {
    async fn reset_password(&self, user: &DirectoryUser) -> Result<(), AppError> {
        self.calls.borrow_mut().push(user.user_id.clone());
        if self.fail {
            Err(AppError::transport("mail relay unavailable"))
        } else {
            Ok(())
        }
    }
}

fn user(id: &str) -> DirectoryUser {
    common::registry().users.get(id).cloned().unwrap()
}

#[tokio::test]
async fn successful_reset_returns_to_idle() {
    let service = RecordingReset::new(false);
    let mut flow = PasswordResetFlow::new();

    flow.request(user("2")).unwrap();
    assert_eq!(flow.target().map(|u| u.name.as_str()), Some("John Smith"));
    flow.run(&service).await.unwrap();

    assert_eq!(flow.state(), &ResetState::Idle);
    assert_eq!(*service.calls.borrow(), vec!["EMP001"]);
}

#[tokio::test]
async fn failed_reset_surfaces_error_and_closes() {
    let service = RecordingReset::new(true);
    let mut flow = PasswordResetFlow::new();

    flow.request(user("1")).unwrap();
    let err = flow.run(&service).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Transport);
    assert!(!flow.is_open());
}

#[tokio::test]
async fn cancelled_reset_never_calls_service() {
    let service = RecordingReset::new(false);
    let mut flow = PasswordResetFlow::new();

    flow.request(user("3")).unwrap();
    flow.cancel().unwrap();

    assert!(flow.run(&service).await.is_err());
    assert!(service.calls.borrow().is_empty());
}

#[test]
fn cannot_cancel_while_resetting() {
    let mut flow = PasswordResetFlow::new();
    flow.request(user("4")).unwrap();
    flow.confirm().unwrap();

    assert!(flow.is_resetting());
    assert_eq!(flow.cancel().unwrap_err().kind, AppErrorKind::Conflict);
    assert_eq!(flow.request(user("6")).unwrap_err().kind, AppErrorKind::Conflict);
    flow.finish(Ok(())).unwrap();
    assert!(!flow.is_open());
}

#[tokio::test]
async fn repeat_confirm_while_resetting_runs_one_reset() {
    let service = RecordingReset::new(false);
    let mut flow = PasswordResetFlow::new();
    flow.request(user("1")).unwrap();

    let target = flow.confirm_once().unwrap().unwrap();
    assert_eq!(flow.confirm_once().unwrap(), None);
    assert!(flow.is_resetting());

    let result = service.reset_password(&target).await;
    flow.finish(result).unwrap();
    assert_eq!(*service.calls.borrow(), vec!["STU001".to_string()]);
    assert_eq!(flow.state(), &ResetState::Idle);
}

#[test]
fn confirm_once_from_idle_is_a_conflict() {
    let mut flow = PasswordResetFlow::new();
    assert_eq!(flow.confirm_once().unwrap_err().kind, AppErrorKind::Conflict);
    assert_eq!(flow.state(), &ResetState::Idle);
}
