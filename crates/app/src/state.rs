//! App-wide record state and the collaborators screens share.

use dioxus::prelude::*;
use registry::{Entity, Filterable, ListView, PasswordResetService, Registry};
use shared_types::{AppConfig, AppError, DirectoryUser};

/// Fixture data for a fresh session. A fixture that fails to seed leaves
/// every store empty rather than taking the app down.
pub fn seed_registry() -> Registry {
    match Registry::seeded() {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!(error = %e, "failed to seed fixtures");
            Registry::default()
        }
    }
}

pub fn use_registry() -> Signal<Registry> {
    use_context::<Signal<Registry>>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// List state for one screen, sized from config.
///
/// `always_confirm` forces confirmed deletes regardless of the
/// `confirm_all_deletes` flag.
pub fn use_list_view<T>(page_size: usize, always_confirm: bool) -> Signal<ListView<T>>
where
    T: Entity + Filterable + PartialEq + 'static,
    T::Axis: 'static,
{
    let config = use_config();
    let confirm = always_confirm || config.features.confirm_all_deletes;
    use_signal(move || ListView::new(page_size, confirm))
}

/// Apply a change to the open editor draft.
pub fn patch<T>(mut view: Signal<ListView<T>>, change: impl FnOnce(&mut T))
where
    T: Entity + Filterable + PartialEq + 'static,
    T::Axis: 'static,
{
    view.write().editor_mut().update(change);
}

/// Password resets with no backend: waits out the configured delay in the
/// browser, then reports success.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedResetService {
    pub delay_ms: u64,
}

impl PasswordResetService for SimulatedResetService {
    async fn reset_password(&self, user: &DirectoryUser) -> Result<(), AppError> {
        tracing::info!(user_id = %user.user_id, "sending password reset");
        let eval = document::eval(&format!(
            "await new Promise(r => setTimeout(r, {})); return true;",
            self.delay_ms
        ));
        eval.join::<bool>()
            .await
            .map(|_| ())
            .map_err(|e| AppError::transport(format!("Password reset failed: {e}")))
    }
}
