use pretty_assertions::assert_eq;
use registry::{AuthService, MockAuthService, Session};
use shared_types::{AdminType, AppErrorKind, LoginRequest, SignUpRequest, UserRole};

fn sign_up(admin_type: AdminType) -> SignUpRequest {
    SignUpRequest {
        name: "Ada Park".into(),
        email: "ada@northfield.edu".into(),
        password: "secret".into(),
        organization_name: "Northfield High".into(),
        admin_type,
    }
}

#[tokio::test]
async fn login_then_logout_updates_session() {
    let auth = MockAuthService::default();
    let mut session = Session::new();

    let request = LoginRequest {
        email: "admin@school.edu".into(),
        password: "pw".into(),
    };
    session.sign_in(auth.login(&request).await.unwrap());

    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(UserRole::SchoolAdmin));
    assert_eq!(session.current_user().map(|u| u.initials()), Some("JD".to_string()));

    auth.logout().await.unwrap();
    session.sign_out();
    assert_eq!(session.current_user(), None);
}

#[tokio::test]
async fn malformed_login_is_rejected_generically() {
    let auth = MockAuthService::default();
    let request = LoginRequest {
        email: "not-an-email".into(),
        password: String::new(),
    };
    let err = auth.login(&request).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

#[tokio::test]
async fn sign_up_role_follows_admin_type() {
    let auth = MockAuthService::default();

    let school = auth.sign_up(&sign_up(AdminType::School)).await.unwrap();
    assert_eq!(school.role, UserRole::SchoolAdmin);
    assert_eq!(school.organization_name.as_deref(), Some("Northfield High"));

    let corporate = auth.sign_up(&sign_up(AdminType::Corporate)).await.unwrap();
    assert_eq!(corporate.role, UserRole::CorporateAdmin);
    assert_eq!(corporate.name, "Ada Park");
}

#[tokio::test]
async fn sign_up_without_organization_fails() {
    let auth = MockAuthService::default();
    let mut request = sign_up(AdminType::School);
    request.organization_name.clear();
    let err = auth.sign_up(&request).await.unwrap_err();
    assert_eq!(err.message, "Failed to sign up");
}
