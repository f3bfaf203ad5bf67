use crate::auth::{use_auth, use_sidebar_visibility};
use crate::state::use_registry;
use dioxus::prelude::*;
use registry::KindSummary;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageTitle};

/// Plural heading for a summary tile.
fn tile_title(kind: &str) -> String {
    match kind {
        "Student" => "Students".into(),
        "Teacher" => "Teachers".into(),
        "Parent" => "Parents".into(),
        "Employee" => "Employees".into(),
        "Department" => "Departments".into(),
        "User" => "Users".into(),
        "Role" => "Roles".into(),
        other => other.to_string(),
    }
}

/// Record counts for the sections the signed-in role can reach.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let registry = use_registry();
    let vis = use_sidebar_visibility();

    let greeting = auth
        .current_user()
        .map(|u| format!("Welcome back, {}", u.name))
        .unwrap_or_else(|| "Welcome".to_string());

    let academic = registry.read().academic_summary();
    let corporate = registry.read().corporate_summary();
    let access = registry.read().access_summary();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                PageTitle { description: greeting, "Dashboard" }
            }

            if vis.academic {
                SummarySection { title: "Academic", tiles: academic }
            }
            if vis.corporate {
                SummarySection { title: "Corporate", tiles: corporate }
            }
            if vis.access {
                SummarySection { title: "Access", tiles: access }
            }
            if !vis.academic && !vis.corporate && !vis.access {
                p { class: "dashboard-empty",
                    "There is nothing to manage for your role yet."
                }
            }
        }
    }
}

#[component]
fn SummarySection(title: String, tiles: Vec<KindSummary>) -> Element {
    rsx! {
        section {
            h3 { class: "dashboard-section-title", "{title}" }
            div { class: "dashboard-grid",
                for tile in tiles {
                    Card { key: "{tile.kind}",
                        CardHeader {
                            CardTitle { "{tile_title(tile.kind)}" }
                            CardDescription { "Total records" }
                        }
                        CardContent {
                            div { class: "dashboard-stat-value", "{tile.total}" }
                            div { class: "dashboard-stat-detail", "{tile.active} active" }
                        }
                    }
                }
            }
        }
    }
}
