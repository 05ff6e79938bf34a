use super::view_model::EmployeeDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn EmployeeDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = EmployeeDetailsViewModel::new();
    vm.load(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container employee-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit employee" } else { "New employee" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="employee-first-name">"First name"</label>
                        <input
                            type="text"
                            id="employee-first-name"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().first_name
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.first_name = event_target_value(&ev));
                                }
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="employee-last-name">"Last name"</label>
                        <input
                            type="text"
                            id="employee-last-name"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().last_name
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.last_name = event_target_value(&ev));
                                }
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="employee-email">"Email"</label>
                        <input
                            type="email"
                            id="employee-email"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().email
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.email = event_target_value(&ev));
                                }
                            }
                            placeholder="name@example.com"
                        />
                    </div>
                    <div class="form-group">
                        <label for="employee-phone">"Phone"</label>
                        <input
                            type="tel"
                            id="employee-phone"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().phone
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.phone = event_target_value(&ev));
                                }
                            }
                            placeholder="Optional"
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="employee-job-title">"Job title"</label>
                    <input
                        type="text"
                        id="employee-job-title"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().job_title
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.job_title = event_target_value(&ev));
                            }
                        }
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
                                    let vm_first = vm.clone();
                                    let vm_last = vm.clone();
                                    let vm_title = vm.clone();
                                    let first_value = row.first_name.clone();
                                    let last_value = row.last_name.clone();
                                    let title_value = row.job_title.clone();
                                    view! {
                                        <div class="localization-row">
                                            <div class="localization-row__language">{label}</div>
                                            <div class="form-row">
                                                <div class="form-group">
                                                    <label>"First name"</label>
                                                    <input
                                                        type="text"
                                                        prop:value=first_value
                                                        on:input=move |ev| {
                                                            vm_first.form.update(|f| {
                                                                if let Some(l) = f.localizations.get_mut(i) {
                                                                    l.first_name = event_target_value(&ev);
                                                                }
                                                            });
                                                        }
                                                    />
                                                </div>
                                                <div class="form-group">
                                                    <label>"Last name"</label>
                                                    <input
                                                        type="text"
                                                        prop:value=last_value
                                                        on:input=move |ev| {
                                                            vm_last.form.update(|f| {
                                                                if let Some(l) = f.localizations.get_mut(i) {
                                                                    l.last_name = event_target_value(&ev);
                                                                }
                                                            });
                                                        }
                                                    />
                                                </div>
                                                <div class="form-group">
                                                    <label>"Job title"</label>
                                                    <input
                                                        type="text"
                                                        prop:value=title_value
                                                        on:input=move |ev| {
                                                            vm_title.form.update(|f| {
                                                                if let Some(l) = f.localizations.get_mut(i) {
                                                                    l.job_title = event_target_value(&ev);
                                                                }
                                                            });
                                                        }
                                                    />
                                                </div>
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
