use crate::domain::common::{AggregateId, AggregateRoot, BaseEntity, EntityMetadata};
use crate::shared::dropdown::DropdownItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageId(pub Uuid);

impl LanguageId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for LanguageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LanguageId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Catalog language. Localization rows of every other entity reference one
/// of these by id; the admin only reads them (dropdown service).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    #[serde(flatten)]
    pub base: BaseEntity<LanguageId>,

    pub name: String,
    /// Short tag like "en" or "ar"
    pub code: String,
}

impl Language {
    pub fn new_for_insert(name: String, code: String) -> Self {
        Self {
            base: BaseEntity::new(LanguageId(Uuid::new_v4())),
            name,
            code,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn to_dropdown_item(&self) -> DropdownItem {
        DropdownItem {
            id: self.base.id.value(),
            name: self.name.clone(),
            code: self.code.clone(),
        }
    }

    /// Apply form data
    pub fn update(&mut self, dto: &LanguageDto) {
        self.name = dto.name.clone();
        self.code = dto.code.trim().to_ascii_lowercase();
    }

    /// Validate record data
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if !is_valid_tag(&self.code) {
            return Err("Code must be a short lowercase tag (e.g. en, ar, pt-br)".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

fn is_valid_tag(code: &str) -> bool {
    (2..=8).contains(&code.len())
        && code.starts_with(|c: char| c.is_ascii_lowercase())
        && code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl AggregateRoot for Language {
    type Id = LanguageId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn is_active(&self) -> bool {
        self.base.is_active
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn collection_name() -> &'static str {
        "languages"
    }

    fn element_name() -> &'static str {
        "Language"
    }

    fn list_name() -> &'static str {
        "Languages"
    }
}

/// DTO for language create/update forms
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LanguageDto {
    pub id: Option<String>,
    pub name: String,
    pub code: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_tag_shape() {
        let mut lang = Language::new_for_insert("English".into(), "en".into());
        assert!(lang.validate().is_ok());
        lang.code = "pt-br".into();
        assert!(lang.validate().is_ok());
        lang.code = "EN".into();
        assert!(lang.validate().is_err());
        lang.code = "e".into();
        assert!(lang.validate().is_err());
        lang.code = "1en".into();
        assert!(lang.validate().is_err());
    }

    #[test]
    fn update_normalizes_code() {
        let mut lang = Language::new_for_insert("English".into(), "en".into());
        let dto = LanguageDto {
            name: "Arabic".into(),
            code: " AR ".into(),
            ..Default::default()
        };
        lang.update(&dto);
        assert_eq!(lang.code, "ar");
        assert!(lang.validate().is_ok());
    }
}
