use crate::auth::{use_auth, use_auth_service};
use crate::routes::Route;
use crate::state::use_config;
use dioxus::prelude::*;
use registry::AuthService;
use shared_types::{AdminType, SignUpRequest};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FormSelect, Input,
};

/// Landing page: administrator sign-up plus a way in for existing accounts.
#[component]
pub fn Home() -> Element {
    let mut auth = use_auth();
    let auth_service = use_auth_service();
    let config = use_config();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut organization = use_signal(String::new);
    let mut admin_type = use_signal(AdminType::default);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_sign_up = move |evt: FormEvent| {
        let service = auth_service.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            let request = SignUpRequest {
                name: name(),
                email: email(),
                password: password(),
                organization_name: organization(),
                admin_type: admin_type(),
            };

            match service.sign_up(&request).await {
                Ok(user) => {
                    tracing::info!(role = %user.role.as_str(), "administrator signed up");
                    auth.set_user(user);
                    navigator().push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!(error = %e, "sign-up failed");
                    error_msg.set(Some(e.message));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "auth-shell",
                div { class: "auth-hero",
                    h1 { "Run your school or company from one place" }
                    p {
                        "Manage students, parents, teachers, employees, departments, "
                        "users and permission roles from a single admin console."
                    }
                }

                Card { class: "auth-card",
                    if config.features.sign_up {
                        CardHeader {
                            CardTitle { "Create an admin account" }
                            CardDescription { "Set up your organization to get started" }
                        }

                        CardContent {
                            if let Some(err) = error_msg() {
                                div { class: "auth-error", "{err}" }
                            }

                            form { class: "auth-form", onsubmit: handle_sign_up,
                                Input {
                                    label: "Full Name",
                                    value: name(),
                                    required: true,
                                    placeholder: "Jane Doe",
                                    on_input: move |e: FormEvent| name.set(e.value()),
                                }
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
                                FormSelect {
                                    label: "Admin Type",
                                    value: admin_type().as_str().to_string(),
                                    onchange: move |e: Event<FormData>| {
                                        admin_type.set(AdminType::from_str_or_default(&e.value()));
                                    },
                                    option { value: AdminType::School.as_str(), "School" }
                                    option { value: AdminType::Corporate.as_str(), "Corporate" }
                                }
                                Input {
                                    label: admin_type().organization_label().to_string(),
                                    value: organization(),
                                    required: true,
                                    on_input: move |e: FormEvent| organization.set(e.value()),
                                }
                                Button {
                                    button_type: "submit",
                                    disabled: loading(),
                                    if loading() { "Creating account..." } else { "Sign Up" }
                                }
                            }
                        }

                        CardFooter {
                            div { class: "auth-footer",
                                span { "Already have an account?" }
                                Link { to: Route::Login {}, "Sign in" }
                            }
                        }
                    } else {
                        CardHeader {
                            CardTitle { "Welcome back" }
                            CardDescription { "Sign in to manage your organization" }
                        }
                        CardFooter {
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| {
                                    navigator().push(Route::Login {});
                                },
                                "Sign In"
                            }
                        }
                    }
                }
            }
        }
    }
}
