use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdKey;
use dioxus_free_icons::Icon;
use registry::{DirectoryUserAxis, PasswordResetFlow};
use shared_types::{normalize_page_size, DirectoryUser, DirectoryUserType};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, DataTable, DataTableActions,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    Input, PageHeader, PageTitle, Pagination, SearchBar, StatusBadge,
};

use super::reset_dialog::ResetPasswordDialog;
use crate::routes::common::{report, CategoryFilter};
use crate::state::{use_config, use_list_view, use_registry};

fn type_badge(user_type: DirectoryUserType) -> BadgeVariant {
    match user_type {
        DirectoryUserType::Student => BadgeVariant::Primary,
        DirectoryUserType::Employee => BadgeVariant::Warning,
    }
}

fn affiliation_label(user: &DirectoryUser) -> String {
    user.affiliation().unwrap_or("-").to_string()
}

fn hours_label(hours: f64) -> String {
    format!("{hours:.2}")
}

/// Read-only directory of student and employee accounts with login
/// activity and a password-reset action.
#[component]
pub fn UserListPage() -> Element {
    let config = use_config();
    let registry = use_registry();
    let page_size_options = config.pagination.page_size_options.clone();
    let initial_size = normalize_page_size(
        config.pagination.default_page_size,
        &page_size_options,
        config.pagination.default_page_size,
    );
    let mut view = use_list_view::<DirectoryUser>(initial_size, false);
    let mut reset = use_signal(PasswordResetFlow::new);
    let reset_enabled = config.features.password_reset;
    let columns: u32 = if reset_enabled { 8 } else { 7 };

    let page = view.read().visible(&registry.read().users);
    let query = view.read().filter().query().to_string();
    let user_type = view
        .read()
        .filter()
        .category(DirectoryUserAxis::UserType)
        .to_string();

    let type_options: Vec<(String, String)> = [DirectoryUserType::Student, DirectoryUserType::Employee]
        .iter()
        .map(|t| (t.as_str().to_string(), t.display_name().to_string()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/src/routes/lists.css") }

        div { class: "list-page",
            PageHeader {
                PageTitle { description: "Student and employee accounts with login activity".to_string(), "Users" }
            }

            SearchBar {
                div { class: "list-search",
                    Input {
                        value: query,
                        placeholder: "Search by name, email or user ID...",
                        on_input: move |e: FormEvent| view.write().set_query(e.value()),
                    }
                }
                div { class: "list-filter",
                    CategoryFilter {
                        label: "User Type",
                        all_label: "All Users",
                        value: user_type,
                        options: type_options,
                        on_change: move |v: String| {
                            view.write().set_category(DirectoryUserAxis::UserType, v)
                        },
                    }
                }
            }

            DataTable {
                DataTableHeader {
                    DataTableColumn { "User ID" }
                    DataTableColumn { "Name" }
                    DataTableColumn { "Type" }
                    DataTableColumn { "Department / Grade" }
                    DataTableColumn { "Last Login" }
                    DataTableColumn { "Hours" }
                    DataTableColumn { "Status" }
                    if reset_enabled {
                        DataTableColumn { align_end: true, "Actions" }
                    }
                }
                DataTableBody {
                    if page.is_empty() {
                        DataTableEmpty { colspan: columns, "No users found." }
                    }
                    for user in page.rows.iter().cloned() {
                        DataTableRow { key: "{user.id}",
                            DataTableCell { "{user.user_id}" }
                            DataTableCell {
                                span { class: "cell-primary", "{user.name}" }
                                span { class: "cell-secondary", "{user.email}" }
                                span { class: "cell-secondary", "{user.phone}" }
                            }
                            DataTableCell {
                                Badge { variant: type_badge(user.user_type), "{user.user_type.display_name()}" }
                            }
                            DataTableCell { "{affiliation_label(&user)}" }
                            DataTableCell {
                                span { "{user.last_login_label()}" }
                                if let Some(out) = user.last_logout.as_ref() {
                                    span { class: "cell-secondary", "Logged out {out.date} {out.time}" }
                                }
                            }
                            DataTableCell { "{hours_label(user.total_login_hours)}" }
                            DataTableCell {
                                StatusBadge { status: user.status }
                            }
                            if reset_enabled {
                                DataTableActions {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        size: ButtonSize::Small,
                                        title: "Reset password",
                                        onclick: {
                                            let user = user.clone();
                                            move |_| {
                                                if let Err(e) = reset.write().request(user.clone()) {
                                                    report(&e, None);
                                                }
                                            }
                                        },
                                        Icon::<LdKey> { icon: LdKey, width: 16, height: 16 }
                                        "Reset"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                meta: page.meta.clone(),
                page_size_options,
                on_page_change: move |p: usize| view.write().set_page(p, &registry.read().users),
                on_page_size_change: move |size: usize| view.write().set_page_size(size),
            }
        }

        ResetPasswordDialog { flow: reset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_are_shown_to_two_places() {
        assert_eq!(hours_label(7.25), "7.25");
        assert_eq!(hours_label(10.0), "10.00");
    }
}
