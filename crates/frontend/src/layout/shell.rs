use crate::layout::sidebar::Sidebar;
use leptos::prelude::*;

/// Application frame: fixed sidebar on the left, routed page content on the
/// right.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="app-shell__content">{children()}</main>
        </div>
    }
}
