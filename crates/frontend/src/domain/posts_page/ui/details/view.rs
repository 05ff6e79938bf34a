use super::view_model::PostsPageDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn PostsPageDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = PostsPageDetailsViewModel::new();
    vm.load(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container posts-page-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit posts page" } else { "New posts page" }
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
                        <label for="posts-page-title">"Title"</label>
                        <input
                            type="text"
                            id="posts-page-title"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().title
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.title = event_target_value(&ev));
                                }
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="posts-page-slug">"Slug"</label>
                        <input
                            type="text"
                            id="posts-page-slug"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().slug
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.slug = event_target_value(&ev));
                                }
                            }
                            placeholder="lowercase-and-hyphens"
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="posts-page-excerpt">"Excerpt"</label>
                    <textarea
                        id="posts-page-excerpt"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().excerpt
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.excerpt = event_target_value(&ev));
                            }
                        }
                        placeholder="Short summary shown in listings"
                        rows="2"
                    />
                </div>

                <div class="form-group">
                    <label for="posts-page-content">"Content"</label>
                    <textarea
                        id="posts-page-content"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().content
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.content = event_target_value(&ev));
                            }
                        }
                        rows="6"
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
                                    let vm_title = vm.clone();
                                    let vm_excerpt = vm.clone();
                                    let vm_content = vm.clone();
                                    let title_value = row.title.clone();
                                    let excerpt_value = row.excerpt.clone();
                                    let content_value = row.content.clone();
                                    view! {
                                        <div class="localization-row">
                                            <div class="localization-row__language">{label}</div>
                                            <div class="form-group">
                                                <label>"Title"</label>
                                                <input
                                                    type="text"
                                                    prop:value=title_value
                                                    on:input=move |ev| {
                                                        vm_title.form.update(|f| {
                                                            if let Some(l) = f.localizations.get_mut(i) {
                                                                l.title = event_target_value(&ev);
                                                            }
                                                        });
                                                    }
                                                />
                                            </div>
                                            <div class="form-group">
                                                <label>"Excerpt"</label>
                                                <textarea
                                                    prop:value=excerpt_value
                                                    on:input=move |ev| {
                                                        vm_excerpt.form.update(|f| {
                                                            if let Some(l) = f.localizations.get_mut(i) {
                                                                l.excerpt = event_target_value(&ev);
                                                            }
                                                        });
                                                    }
                                                    rows="2"
                                                />
                                            </div>
                                            <div class="form-group">
                                                <label>"Content"</label>
                                                <textarea
                                                    prop:value=content_value
                                                    on:input=move |ev| {
                                                        vm_content.form.update(|f| {
                                                            if let Some(l) = f.localizations.get_mut(i) {
                                                                l.content = event_target_value(&ev);
                                                            }
                                                        });
                                                    }
                                                    rows="4"
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
