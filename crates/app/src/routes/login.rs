use crate::auth::{use_auth, use_auth_service};
use crate::routes::Route;
use dioxus::prelude::*;
use registry::AuthService;
use shared_types::LoginRequest;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};

/// Email/password sign-in. Signed-in visitors go straight to the dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let auth_service = use_auth_service();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        let service = auth_service.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            let request = LoginRequest {
                email: email(),
                password: password(),
            };

            match service.login(&request).await {
                Ok(user) => {
                    auth.set_user(user);
                    navigator().push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!(error = %e, "login failed");
                    error_msg.set(Some(e.message));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            required: true,
                            placeholder: "you@example.com",
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            required: true,
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    div { class: "auth-footer",
                        span { "Need an admin account?" }
                        Link { to: Route::Home {}, "Sign up" }
                    }
                }
            }
        }
    }
}
