//! Sidebar navigation with grouped menu items

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Catalog",
            items: vec![
                ("/categories", "Categories", "folder-closed"),
                ("/currencies", "Currencies", "currency"),
                ("/employees", "Employees", "users"),
            ],
        },
        MenuGroup {
            label: "Content",
            items: vec![
                ("/posts-pages", "Posts pages", "file-text"),
                ("/products-pages", "Products pages", "package"),
            ],
        },
        MenuGroup {
            label: "Insights",
            items: vec![("/statistics", "Statistics", "bar-chart")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                {icon("package")}
                <span class="sidebar__brand-title">"Catalog Admin"</span>
            </div>
            <nav class="sidebar__nav">
                {menu_groups()
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="sidebar__group">
                                <div class="sidebar__group-label">{group.label}</div>
                                {group
                                    .items
                                    .into_iter()
                                    .map(|(path, label, icon_name)| {
                                        let pathname = location.pathname;
                                        // Plain anchors: the Router intercepts same-origin clicks.
                                        view! {
                                            <a
                                                href=path
                                                class=move || {
                                                    if pathname.get() == path {
                                                        "sidebar__link sidebar__link--active"
                                                    } else {
                                                        "sidebar__link"
                                                    }
                                                }
                                            >
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
