use crate::domain::common::{AggregateId, AggregateRoot, BaseEntity, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Localization
// ============================================================================

/// Per-language translated copy of the category display fields
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CategoryLocalization {
    #[serde(rename = "languageId")]
    pub language_id: Uuid,
    pub name: String,
    pub description: String,
}

impl CategoryLocalization {
    /// A row the user never filled in; stripped before submit
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.description.trim().is_empty()
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseEntity<CategoryId>,

    pub name: String,
    pub description: String,

    pub localizations: Vec<CategoryLocalization>,
}

impl Category {
    /// Create a new category for insertion
    pub fn new_for_insert(
        name: String,
        description: String,
        localizations: Vec<CategoryLocalization>,
    ) -> Self {
        Self {
            base: BaseEntity::new(CategoryId::new_v4()),
            name,
            description,
            localizations,
        }
    }

    /// ID as a string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply form data
    pub fn update(&mut self, dto: &CategoryDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.localizations = dto
            .localizations
            .iter()
            .filter(|l| !l.is_blank())
            .cloned()
            .collect();
    }

    /// Validate record data
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        validate_localizations(&self.localizations)?;
        Ok(())
    }

    /// Pre-write hook
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

/// Duplicate language rows are a form bug, not user input; non-blank rows
/// must carry at least a name.
fn validate_localizations(rows: &[CategoryLocalization]) -> Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for row in rows {
        if !seen.insert(row.language_id) {
            return Err("Duplicate localization language".into());
        }
        if !row.is_blank() && row.name.trim().is_empty() {
            return Err("Localized name is required".into());
        }
    }
    Ok(())
}

impl AggregateRoot for Category {
    type Id = CategoryId;

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
        "categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for category create/update forms
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub localizations: Vec<CategoryLocalization>,
}

impl CategoryDto {
    /// Strip untouched localization rows; keeps submit payloads minimal
    pub fn pruned(&self) -> Self {
        let mut dto = self.clone();
        dto.localizations.retain(|l| !l.is_blank());
        dto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category::new_for_insert(name.to_string(), String::new(), Vec::new())
    }

    #[test]
    fn validate_requires_name() {
        assert!(category("Drinks").validate().is_ok());
        assert!(category("").validate().is_err());
        assert!(category("   ").validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_language() {
        let lang = Uuid::new_v4();
        let mut cat = category("Drinks");
        cat.localizations = vec![
            CategoryLocalization {
                language_id: lang,
                name: "Boissons".into(),
                description: String::new(),
            },
            CategoryLocalization {
                language_id: lang,
                name: "Getränke".into(),
                description: String::new(),
            },
        ];
        assert!(cat.validate().is_err());
    }

    #[test]
    fn validate_rejects_description_only_row() {
        let mut cat = category("Drinks");
        cat.localizations = vec![CategoryLocalization {
            language_id: Uuid::new_v4(),
            name: String::new(),
            description: "only a description".into(),
        }];
        assert!(cat.validate().is_err());
    }

    #[test]
    fn update_strips_blank_rows() {
        let mut cat = category("Drinks");
        let dto = CategoryDto {
            id: None,
            name: "Beverages".into(),
            description: "All drinks".into(),
            is_active: true,
            localizations: vec![
                CategoryLocalization {
                    language_id: Uuid::new_v4(),
                    name: "Boissons".into(),
                    description: String::new(),
                },
                CategoryLocalization::default(),
            ],
        };
        cat.update(&dto);
        assert_eq!(cat.name, "Beverages");
        assert_eq!(cat.localizations.len(), 1);
    }

    #[test]
    fn pruned_keeps_partial_rows() {
        let dto = CategoryDto {
            localizations: vec![
                CategoryLocalization::default(),
                CategoryLocalization {
                    language_id: Uuid::new_v4(),
                    name: "Boissons".into(),
                    description: String::new(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(dto.pruned().localizations.len(), 1);
    }
}
