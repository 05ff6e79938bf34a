use crate::domain::language;
use crate::domain::posts_page::api;
use contracts::domain::posts_page::aggregate::{PostsPageDto, PostsPageLocalization};
use contracts::shared::dropdown::DropdownItem;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the posts-page details form
#[derive(Clone)]
pub struct PostsPageDetailsViewModel {
    pub form: RwSignal<PostsPageDto>,
    pub languages: RwSignal<Vec<DropdownItem>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl PostsPageDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PostsPageDto {
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
        move || {
            let f = self.form.get();
            !f.title.trim().is_empty() && slug_is_valid(&f.slug)
        }
    }

    pub fn load(&self, id: Option<String>) {
        let form = self.form;
        let error = self.error;
        let languages = self.languages;
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(existing_id) = id {
                match api::get(&existing_id).await {
                    Ok(page) => {
                        form.set(PostsPageDto {
                            id: Some(page.to_string_id()),
                            slug: page.slug,
                            title: page.title,
                            excerpt: page.excerpt,
                            content: page.content,
                            is_active: page.base.is_active,
                            localizations: page.localizations,
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

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if current.title.trim().is_empty() {
            self.error.set(Some("Title is required".to_string()));
            return;
        }
        if !slug_is_valid(&current.slug) {
            self.error.set(Some(
                "Slug must be lowercase letters, digits and hyphens".to_string(),
            ));
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
                    log::error!("Failed to save posts page: {}", e);
                    error.set(Some(e));
                }
            }
        });
    }
}

fn slug_is_valid(slug: &str) -> bool {
    let trimmed = slug.trim();
    !trimmed.is_empty()
        && !trimmed.starts_with('-')
        && !trimmed.ends_with('-')
        && trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn ensure_language_rows(rows: &mut Vec<PostsPageLocalization>, languages: &[DropdownItem]) {
    for lang in languages {
        if !rows.iter().any(|r| r.language_id == lang.id) {
            rows.push(PostsPageLocalization {
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

    #[test]
    fn slug_check_matches_aggregate_rule() {
        assert!(slug_is_valid("about-us"));
        assert!(slug_is_valid(" about-us "));
        assert!(!slug_is_valid(""));
        assert!(!slug_is_valid("About"));
        assert!(!slug_is_valid("-about"));
    }
}
