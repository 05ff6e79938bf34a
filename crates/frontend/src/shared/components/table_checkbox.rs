use leptos::prelude::*;

/// Checkbox cell for table rows.
///
/// Stops click propagation so toggling the checkbox never triggers the
/// row-click (edit) handler.
#[component]
pub fn TableCheckbox(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|ev| ev.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
