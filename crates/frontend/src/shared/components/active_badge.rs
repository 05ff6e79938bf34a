use leptos::prelude::*;

/// Activation state badge used in every entity table.
///
/// Clicking the badge fires the toggle-activation mutation; the click must
/// not bubble into the row-click (edit) handler.
#[component]
pub fn ActiveBadge(
    #[prop(into)] is_active: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <span
            class=move || {
                if is_active.get() {
                    "badge badge--success badge--clickable"
                } else {
                    "badge badge--muted badge--clickable"
                }
            }
            title="Toggle activation"
            on:click=move |ev| {
                ev.stop_propagation();
                on_toggle.run(());
            }
        >
            {move || if is_active.get() { "Active" } else { "Inactive" }}
        </span>
    }
}
