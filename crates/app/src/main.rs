use dioxus::prelude::*;
use registry::MockAuthService;
use shared_types::AppConfig;

mod auth;
mod routes;
mod state;

use auth::{use_auth, AuthState};
use routes::Route;

/// Name and email of the signed-in user for the navbar and sidebar.
/// Derived from [`AuthState`], so it follows sign-in and sign-out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileState {
    pub display_name: Memo<String>,
    pub email: Memo<String>,
    pub initials: Memo<String>,
    pub organization: Memo<Option<String>>,
}

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config: AppConfig = use_context_provider(|| registry::config::load_config().clone());
    let login_role = config.auth.role();

    use_context_provider(|| MockAuthService::new(login_role));
    use_context_provider(AuthState::new);
    use_context_provider(|| Signal::new(state::seed_registry()));

    let auth = use_auth();

    let display_name = use_memo(move || {
        auth.current_user()
            .map(|u| u.name)
            .unwrap_or_else(|| "Guest".to_string())
    });
    let email = use_memo(move || auth.current_user().map(|u| u.email).unwrap_or_default());
    let initials = use_memo(move || {
        auth.current_user()
            .map(|u| u.initials())
            .unwrap_or_else(|| "?".to_string())
    });
    let organization = use_memo(move || auth.current_user().and_then(|u| u.organization_name));

    use_context_provider(|| ProfileState {
        display_name,
        email,
        initials,
        organization,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
