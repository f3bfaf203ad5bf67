use dioxus::prelude::*;
use registry::{PasswordResetFlow, PasswordResetService};
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle,
};

use crate::routes::common::{notify_success, report};
use crate::state::{use_config, SimulatedResetService};

/// Confirm-then-run dialog driving a [`PasswordResetFlow`].
#[component]
pub fn ResetPasswordDialog(flow: Signal<PasswordResetFlow>) -> Element {
    let config = use_config();
    let service = SimulatedResetService {
        delay_ms: config.password_reset.simulated_delay_ms,
    };

    let (open, resetting, target) = {
        let state = flow.read();
        (
            state.is_open(),
            state.is_resetting(),
            state.target().map(|u| (u.name.clone(), u.email.clone())),
        )
    };
    let (name, email) = target.unwrap_or_default();

    let run_reset = move |_: MouseEvent| {
        let user = match flow.write().confirm_once() {
            Ok(Some(user)) => user,
            Ok(None) => return,
            Err(e) => {
                report(&e, None);
                return;
            }
        };
        spawn(async move {
            let result = service.reset_password(&user).await;
            match flow.write().finish(result) {
                Ok(()) => notify_success(format!("Password reset link sent to {}", user.email)),
                Err(e) => report(&e, None),
            }
        });
    };

    rsx! {
        AlertDialogRoot {
            open,
            on_open_change: move |open: bool| {
                if !open {
                    if let Err(e) = flow.write().cancel() {
                        tracing::debug!(error = %e, "reset dialog stays open");
                    }
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Reset password?" }
                AlertDialogDescription {
                    "A password reset link will be sent to {name} at {email}."
                }
                AlertDialogActions {
                    if !resetting {
                        AlertDialogCancel { "Cancel" }
                    }
                    AlertDialogAction {
                        on_click: run_reset,
                        if resetting { "Resetting..." } else { "Reset Password" }
                    }
                }
            }
        }
    }
}
