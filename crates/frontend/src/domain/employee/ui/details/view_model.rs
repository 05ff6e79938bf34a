use crate::domain::employee::api;
use crate::domain::language;
use contracts::domain::employee::aggregate::{EmployeeDto, EmployeeLocalization};
use contracts::shared::dropdown::DropdownItem;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the employee details form
#[derive(Clone)]
pub struct EmployeeDetailsViewModel {
    pub form: RwSignal<EmployeeDto>,
    pub languages: RwSignal<Vec<DropdownItem>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl EmployeeDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EmployeeDto {
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
            !f.first_name.trim().is_empty()
                && !f.last_name.trim().is_empty()
                && email_is_valid(&f.email)
        }
    }

    pub fn load(&self, id: Option<String>) {
        let form = self.form;
        let error = self.error;
        let languages = self.languages;
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(existing_id) = id {
                match api::get(&existing_id).await {
                    Ok(employee) => {
                        form.set(EmployeeDto {
                            id: Some(employee.to_string_id()),
                            first_name: employee.first_name,
                            last_name: employee.last_name,
                            email: employee.email,
                            phone: employee.phone,
                            job_title: employee.job_title,
                            is_active: employee.base.is_active,
                            localizations: employee.localizations,
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

        if current.first_name.trim().is_empty() {
            self.error.set(Some("First name is required".to_string()));
            return;
        }
        if current.last_name.trim().is_empty() {
            self.error.set(Some("Last name is required".to_string()));
            return;
        }
        if !email_is_valid(&current.email) {
            self.error
                .set(Some("Email address is not valid".to_string()));
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
                    log::error!("Failed to save employee: {}", e);
                    error.set(Some(e));
                }
            }
        });
    }
}

// Same loose check the aggregate applies; the mail server is the authority.
fn email_is_valid(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

fn ensure_language_rows(rows: &mut Vec<EmployeeLocalization>, languages: &[DropdownItem]) {
    for lang in languages {
        if !rows.iter().any(|r| r.language_id == lang.id) {
            rows.push(EmployeeLocalization {
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
    fn email_check_matches_aggregate_rule() {
        assert!(email_is_valid("ada@example.com"));
        assert!(email_is_valid("  ada@example.com  "));
        assert!(!email_is_valid("ada"));
        assert!(!email_is_valid("ada@"));
        assert!(!email_is_valid("ada@localhost"));
    }
}
