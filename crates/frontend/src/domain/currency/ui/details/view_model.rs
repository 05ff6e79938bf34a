use crate::domain::currency::api;
use crate::domain::language;
use contracts::domain::currency::aggregate::{CurrencyDto, CurrencyLocalization};
use contracts::shared::dropdown::DropdownItem;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the currency details form
#[derive(Clone)]
pub struct CurrencyDetailsViewModel {
    pub form: RwSignal<CurrencyDto>,
    pub languages: RwSignal<Vec<DropdownItem>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CurrencyDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CurrencyDto {
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
            !f.name.trim().is_empty() && code_is_valid(&f.code)
        }
    }

    pub fn load(&self, id: Option<String>) {
        let form = self.form;
        let error = self.error;
        let languages = self.languages;
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(existing_id) = id {
                match api::get(&existing_id).await {
                    Ok(currency) => {
                        form.set(CurrencyDto {
                            id: Some(currency.to_string_id()),
                            name: currency.name,
                            code: currency.code,
                            symbol: currency.symbol,
                            is_active: currency.base.is_active,
                            localizations: currency.localizations,
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

        if current.name.trim().is_empty() {
            self.error.set(Some("Name is required".to_string()));
            return;
        }
        if !code_is_valid(&current.code) {
            self.error
                .set(Some("Code must be three letters (e.g. USD)".to_string()));
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
                    log::error!("Failed to save currency: {}", e);
                    error.set(Some(e));
                }
            }
        });
    }
}

/// Form-level echo of the aggregate's code rule; case is normalized by
/// `CurrencyDto::pruned` on submit.
fn code_is_valid(code: &str) -> bool {
    let trimmed = code.trim();
    trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic())
}

fn ensure_language_rows(rows: &mut Vec<CurrencyLocalization>, languages: &[DropdownItem]) {
    for lang in languages {
        if !rows.iter().any(|r| r.language_id == lang.id) {
            rows.push(CurrencyLocalization {
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
    fn code_validation_accepts_any_case() {
        assert!(code_is_valid("USD"));
        assert!(code_is_valid("usd"));
        assert!(code_is_valid(" eur "));
        assert!(!code_is_valid("US"));
        assert!(!code_is_valid("USDX"));
        assert!(!code_is_valid("U1D"));
    }
}
