use dioxus::prelude::*;
use registry::{MockAuthService, Session};
use shared_types::{AuthUser, UserRole};

/// The signed-in session, shared through context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::new()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.session.read().current_user().cloned()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.read().role()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.session.write().sign_in(user);
    }

    pub fn clear_auth(&mut self) {
        self.session.write().sign_out();
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

pub fn use_auth_service() -> MockAuthService {
    use_context::<MockAuthService>()
}

/// Which sidebar groups the current role sees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarVisibility {
    pub academic: bool,
    pub corporate: bool,
    /// User management and roles & permissions.
    pub access: bool,
}

impl SidebarVisibility {
    pub fn for_role(role: Option<UserRole>) -> Self {
        match role {
            Some(UserRole::SchoolAdmin) => Self {
                academic: true,
                corporate: false,
                access: true,
            },
            Some(UserRole::CorporateAdmin) => Self {
                academic: false,
                corporate: true,
                access: true,
            },
            _ => Self {
                academic: false,
                corporate: false,
                access: false,
            },
        }
    }
}

pub fn use_sidebar_visibility() -> SidebarVisibility {
    let auth = use_auth();
    SidebarVisibility::for_role(auth.role())
}
