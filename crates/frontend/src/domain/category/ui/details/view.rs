use super::view_model::CategoryDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn CategoryDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new();
    vm.load(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container category-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit category" } else { "New category" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="category-name">"Name"</label>
                    <input
                        type="text"
                        id="category-name"
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
                        placeholder="Category name"
                    />
                </div>

                <div class="form-group">
                    <label for="category-description">"Description"</label>
                    <textarea
                        id="category-description"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().description
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.description = event_target_value(&ev));
                            }
                        }
                        placeholder="Optional description"
                        rows="3"
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
                                    let vm_desc = vm.clone();
                                    let name_value = row.name.clone();
                                    let description_value = row.description.clone();
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
                                            <div class="form-group">
                                                <label>"Description"</label>
                                                <textarea
                                                    prop:value=description_value
                                                    on:input=move |ev| {
                                                        vm_desc.form.update(|f| {
                                                            if let Some(l) = f.localizations.get_mut(i) {
                                                                l.description = event_target_value(&ev);
                                                            }
                                                        });
                                                    }
                                                    rows="2"
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
