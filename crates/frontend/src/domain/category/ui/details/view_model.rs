use crate::domain::category::api;
use crate::domain::language;
use contracts::domain::category::aggregate::{CategoryDto, CategoryLocalization};
use contracts::shared::dropdown::DropdownItem;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the category details form
#[derive(Clone)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    pub languages: RwSignal<Vec<DropdownItem>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CategoryDto {
                is_active: true,
                ..Default::default()
            }),
            languages: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || !self.form.get().name.trim().is_empty()
    }

    /// Load the record (edit mode) and the language dropdown, then seed one
    /// localization row per catalog language.
    pub fn load(&self, id: Option<String>) {
        let form = self.form;
        let error = self.error;
        let languages = self.languages;
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(existing_id) = id {
                match api::get(&existing_id).await {
                    Ok(category) => {
                        form.set(CategoryDto {
                            id: Some(category.to_string_id()),
                            name: category.name,
                            description: category.description,
                            is_active: category.base.is_active,
                            localizations: category.localizations,
                        });
                    }
                    Err(e) => {
                        error.set(Some(format!("Load failed: {}", e)));
                        return;
                    }
                }
            }

            match language::api::dropdown().await {
                Ok(items) => {
                    form.update(|f| ensure_language_rows(&mut f.localizations, &items));
                    languages.set(items);
                }
                Err(e) => error.set(Some(format!("Failed to load languages: {}", e))),
            }
        });
    }

    /// Validate and submit the form
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if current.name.trim().is_empty() {
            self.error.set(Some("Name is required".to_string()));
            return;
        }

        let dto = current.pruned();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &dto.id {
                Some(id) => api::update(id, &dto).await.map(|_| ()),
                None => api::create(&dto).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => {
                    log::error!("Failed to save category: {}", e);
                    error.set(Some(e));
                }
            }
        });
    }
}

/// One editable row per catalog language; rows already present keep their
/// input, new languages are appended blank in dropdown order.
fn ensure_language_rows(rows: &mut Vec<CategoryLocalization>, languages: &[DropdownItem]) {
    for lang in languages {
        if !rows.iter().any(|r| r.language_id == lang.id) {
            rows.push(CategoryLocalization {
                language_id: lang.id,
                ..Default::default()
            });
        }
    }
    rows.sort_by_key(|r| {
        languages
            .iter()
            .position(|l| l.id == r.language_id)
            .unwrap_or(usize::MAX)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn lang(name: &str) -> DropdownItem {
        DropdownItem {
            id: Uuid::new_v4(),
            name: name.into(),
            code: name[..2].to_lowercase(),
        }
    }

    #[test]
    fn seeds_one_row_per_language() {
        let langs = vec![lang("English"), lang("Arabic")];
        let mut rows = Vec::new();
        ensure_language_rows(&mut rows, &langs);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].language_id, langs[0].id);
        assert_eq!(rows[1].language_id, langs[1].id);
    }

    #[test]
    fn keeps_existing_input_and_order() {
        let langs = vec![lang("English"), lang("Arabic")];
        let mut rows = vec![CategoryLocalization {
            language_id: langs[1].id,
            name: "مشروبات".into(),
            description: String::new(),
        }];
        ensure_language_rows(&mut rows, &langs);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].language_id, langs[0].id);
        assert_eq!(rows[1].name, "مشروبات");
    }
}
