use super::view_model::CurrencyDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn CurrencyDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = CurrencyDetailsViewModel::new();
    vm.load(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container currency-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit currency" } else { "New currency" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="currency-name">"Name"</label>
                    <input
                        type="text"
                        id="currency-name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        placeholder="Currency name"
                    />
                </div>

                <div class="form-group">
                    <label for="currency-code">"Code"</label>
                    <input
                        type="text"
                        id="currency-code"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().code
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.code = event_target_value(&ev));
                            }
                        }
                        placeholder="Three letters, e.g. USD"
                        maxlength="3"
                    />
                </div>

                <div class="form-group">
                    <label for="currency-symbol">"Symbol"</label>
                    <input
                        type="text"
                        id="currency-symbol"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().symbol
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.symbol = event_target_value(&ev));
                            }
                        }
                        placeholder="$, €, ..."
                        maxlength="4"
                    />
                </div>

                <label class="checkbox-field">
                    <input
                        type="checkbox"
                        prop:checked={
                            let vm = vm_clone.clone();
                            move || vm.form.get().is_active
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.is_active = event_target_checked(&ev));
                            }
                        }
                    />
                    "Active"
                </label>

                <div class="localization-section">
                    <div class="localization-section__title">
                        {icon("globe")}
                        "Translations"
                    </div>
                    {
                        let vm = vm_clone.clone();
                        move || {
                            let languages = vm.languages.get();
                            vm.form
                                .get()
                                .localizations
                                .iter()
                                .enumerate()
                                .map(|(i, row)| {
                                    let label = languages
                                        .iter()
                                        .find(|l| l.id == row.language_id)
                                        .map(|l| l.display_label())
                                        .unwrap_or_else(|| row.language_id.to_string());
                                    let vm_name = vm.clone();
                                    let name_value = row.name.clone();
                                    view! {
                                        <div class="localization-row">
                                            <div class="localization-row__language">{label}</div>
                                            <div class="form-group">
                                                <label>"Name"</label>
                                                <input
                                                    type="text"
                                                    prop:value=name_value
                                                    on:input=move |ev| {
                                                        vm_name.form.update(|f| {
                                                            if let Some(l) = f.localizations.get_mut(i) {
                                                                l.name = event_target_value(&ev);
                                                            }
                                                        });
                                                    }
                                                />
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()() || vm.saving.get()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Save" } else { "Create" }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
