pub mod common;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod home;
pub mod login;
pub mod not_found;
pub mod parents;
pub mod roles;
pub mod students;
pub mod teachers;
pub mod users;

use crate::auth::{use_auth, use_auth_service, use_sidebar_visibility};
use crate::ProfileState;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdBriefcase, LdBuilding2, LdContact, LdGraduationCap, LdLayoutDashboard,
    LdShield, LdUserCog, LdUsers,
};
use dioxus_free_icons::Icon;
use registry::AuthService;
use shared_ui::{
    Avatar, AvatarFallback, DropdownMenu, DropdownMenuContent, DropdownMenuItem,
    DropdownMenuLabel, DropdownMenuSeparator, DropdownMenuTrigger, Navbar, Separator, Sidebar,
    SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupContent, SidebarGroupLabel,
    SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider,
    SidebarRail, SidebarSeparator, SidebarTrigger, SwitchField,
};

use dashboard::Dashboard;
use home::Home;
use login::Login;
use not_found::NotFound;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    // ── Academic ──
    #[route("/academic-management/students")]
    Students {},
    #[route("/academic-management/parents")]
    Parents {},
    #[route("/academic-management/teachers")]
    Teachers {},
    // ── Corporate ──
    #[route("/corporate-management/employees")]
    Employees {},
    #[route("/corporate-management/departments")]
    Departments {},
    #[route("/corporate-management/users")]
    CorporateUsers {},
    // ── Access ──
    #[route("/user-management/list")]
    UserList {},
    #[route("/roles-permissions/roles")]
    Roles {},
    #[end_layout]
    #[end_layout]
    // Bare section paths land on the section's first screen.
    #[redirect("/user-management", || Route::UserList {})]
    #[redirect("/roles-permissions", || Route::Roles {})]
    #[redirect("/academic-management/:..rest", |rest: Vec<String>| Route::Students {})]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Sends signed-out visitors back to the home page.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();

    if auth.is_authenticated() {
        return rsx! { Outlet::<Route> {} };
    }

    navigator().replace(Route::Home {});
    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting..." }
        }
    }
}

#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let profile: ProfileState = use_context();
    let mut auth = use_auth();
    let auth_service = use_auth_service();

    let vis = use_sidebar_visibility();

    let mut theme_state = shared_ui::theme::use_theme_state();

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::Students {} => "Students",
        Route::Parents {} => "Parents",
        Route::Teachers {} => "Teachers",
        Route::Employees {} => "Employees",
        Route::Departments {} => "Departments",
        Route::CorporateUsers {} | Route::UserList {} => "Users",
        Route::Roles {} => "Roles & Permissions",
        Route::Home {} | Route::Login {} | Route::NotFound { .. } => "",
    };

    let sign_out = move |_: String| {
        let service = auth_service.clone();
        spawn(async move {
            if let Err(e) = service.logout().await {
                tracing::warn!(error = %e, "logout failed; clearing the session anyway");
            }
            auth.clear_auth();
            navigator().push(Route::Home {});
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 22, height: 22 }
                        div {
                            div { class: "sidebar-brand-name", "Campus Admin" }
                            if let Some(org) = profile.organization.read().as_ref() {
                                div { class: "sidebar-brand-org", "{org}" }
                            }
                        }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup {
                        SidebarGroupContent {
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::Dashboard {},
                                        SidebarMenuButton { active: matches!(route, Route::Dashboard {}),
                                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                            "Dashboard"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if vis.academic {
                        SidebarSeparator {}
                        SidebarGroup {
                            SidebarGroupLabel { "Academic Management" }
                            SidebarGroupContent {
                                SidebarMenu {
                                    SidebarMenuItem {
                                        Link { to: Route::Students {},
                                            SidebarMenuButton { active: matches!(route, Route::Students {}),
                                                Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 18, height: 18 }
                                                "Students"
                                            }
                                        }
                                    }
                                    SidebarMenuItem {
                                        Link { to: Route::Parents {},
                                            SidebarMenuButton { active: matches!(route, Route::Parents {}),
                                                Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                                "Parents"
                                            }
                                        }
                                    }
                                    SidebarMenuItem {
                                        Link { to: Route::Teachers {},
                                            SidebarMenuButton { active: matches!(route, Route::Teachers {}),
                                                Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                                                "Teachers"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if vis.corporate {
                        SidebarSeparator {}
                        SidebarGroup {
                            SidebarGroupLabel { "Corporate Management" }
                            SidebarGroupContent {
                                SidebarMenu {
                                    SidebarMenuItem {
                                        Link { to: Route::Employees {},
                                            SidebarMenuButton { active: matches!(route, Route::Employees {}),
                                                Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                                                "Employees"
                                            }
                                        }
                                    }
                                    SidebarMenuItem {
                                        Link { to: Route::Departments {},
                                            SidebarMenuButton { active: matches!(route, Route::Departments {}),
                                                Icon::<LdBuilding2> { icon: LdBuilding2, width: 18, height: 18 }
                                                "Departments"
                                            }
                                        }
                                    }
                                    SidebarMenuItem {
                                        Link { to: Route::CorporateUsers {},
                                            SidebarMenuButton { active: matches!(route, Route::CorporateUsers {}),
                                                Icon::<LdUserCog> { icon: LdUserCog, width: 18, height: 18 }
                                                "Users"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if vis.access {
                        SidebarSeparator {}
                        SidebarGroup {
                            SidebarGroupLabel { "User Management" }
                            SidebarGroupContent {
                                SidebarMenu {
                                    SidebarMenuItem {
                                        Link { to: Route::UserList {},
                                            SidebarMenuButton { active: matches!(route, Route::UserList {}),
                                                Icon::<LdContact> { icon: LdContact, width: 18, height: 18 }
                                                "User List"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        SidebarGroup {
                            SidebarGroupLabel { "Roles & Permissions" }
                            SidebarGroupContent {
                                SidebarMenu {
                                    SidebarMenuItem {
                                        Link { to: Route::Roles {},
                                            SidebarMenuButton { active: matches!(route, Route::Roles {}),
                                                Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                                                "Roles"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    SwitchField {
                        label: "Dark mode",
                        checked: (theme_state.is_dark)(),
                        on_change: move |checked: bool| {
                            theme_state.is_dark.set(checked);
                            theme_state.apply();
                        },
                    }
                }

                SidebarRail {}
            }

            SidebarInset {
                Navbar {
                    div { class: "navbar-bar",
                        SidebarTrigger {
                            span { class: "navbar-trigger-icon", "\u{2630}" }
                        }

                        Separator { horizontal: false }

                        span { class: "navbar-title", "{page_title}" }

                        div { class: "navbar-spacer" }

                        DropdownMenu {
                            DropdownMenuTrigger {
                                Avatar {
                                    AvatarFallback { "{profile.initials}" }
                                }
                            }
                            DropdownMenuContent {
                                DropdownMenuLabel {
                                    span { "{profile.display_name}" }
                                    span { "{profile.email}" }
                                }
                                DropdownMenuSeparator {}
                                DropdownMenuItem::<String> {
                                    value: "sign-out".to_string(),
                                    index: 0usize,
                                    on_select: sign_out,
                                    "Sign Out"
                                }
                            }
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Students() -> Element {
    rsx! { students::list::StudentListPage {} }
}

#[component]
fn Parents() -> Element {
    rsx! { parents::list::ParentListPage {} }
}

#[component]
fn Teachers() -> Element {
    rsx! { teachers::list::TeacherListPage {} }
}

#[component]
fn Employees() -> Element {
    rsx! { employees::list::EmployeeListPage {} }
}

#[component]
fn Departments() -> Element {
    rsx! { departments::list::DepartmentListPage {} }
}

#[component]
fn CorporateUsers() -> Element {
    rsx! { users::list::UserListPage {} }
}

#[component]
fn UserList() -> Element {
    rsx! { users::list::UserListPage {} }
}

#[component]
fn Roles() -> Element {
    rsx! { roles::list::RoleListPage {} }
}
