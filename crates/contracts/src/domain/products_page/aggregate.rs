use crate::domain::common::{AggregateId, AggregateRoot, BaseEntity, EntityMetadata};
use crate::domain::posts_page::aggregate::is_valid_slug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique products-page identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductsPageId(pub Uuid);

impl ProductsPageId {
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

impl AggregateId for ProductsPageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductsPageId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Localization
// ============================================================================

/// Per-language content of a products page
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductsPageLocalization {
    #[serde(rename = "languageId")]
    pub language_id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,
}

impl ProductsPageLocalization {
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
            && self.content.trim().is_empty()
            && self.meta_description.trim().is_empty()
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Landing page for a products section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsPage {
    #[serde(flatten)]
    pub base: BaseEntity<ProductsPageId>,

    /// URL segment, lowercase ASCII letters/digits/hyphens
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,

    pub localizations: Vec<ProductsPageLocalization>,
}

impl ProductsPage {
    pub fn new_for_insert(
        slug: String,
        title: String,
        content: String,
        meta_description: String,
        localizations: Vec<ProductsPageLocalization>,
    ) -> Self {
        Self {
            base: BaseEntity::new(ProductsPageId::new_v4()),
            slug,
            title,
            content,
            meta_description,
            localizations,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply form data
    pub fn update(&mut self, dto: &ProductsPageDto) {
        self.slug = dto.slug.trim().to_string();
        self.title = dto.title.clone();
        self.content = dto.content.clone();
        self.meta_description = dto.meta_description.clone();
        self.localizations = dto
            .localizations
            .iter()
            .filter(|l| !l.is_blank())
            .cloned()
            .collect();
    }

    /// Validate record data
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        if !is_valid_slug(&self.slug) {
            return Err("Slug must be lowercase letters, digits and hyphens".into());
        }
        let mut seen = std::collections::HashSet::new();
        for row in &self.localizations {
            if !seen.insert(row.language_id) {
                return Err("Duplicate localization language".into());
            }
            if !row.is_blank() && row.title.trim().is_empty() {
                return Err("Localized title is required".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for ProductsPage {
    type Id = ProductsPageId;

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
        "products-pages"
    }

    fn element_name() -> &'static str {
        "Products page"
    }

    fn list_name() -> &'static str {
        "Products pages"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for products-page create/update forms
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductsPageDto {
    pub id: Option<String>,
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "metaDescription")]
    pub meta_description: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub localizations: Vec<ProductsPageLocalization>,
}

impl ProductsPageDto {
    pub fn pruned(&self) -> Self {
        let mut dto = self.clone();
        dto.slug = dto.slug.trim().to_string();
        dto.localizations.retain(|l| !l.is_blank());
        dto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_localized_title() {
        let mut page = ProductsPage::new_for_insert(
            "catalog".into(),
            "Catalog".into(),
            String::new(),
            String::new(),
            Vec::new(),
        );
        page.localizations = vec![ProductsPageLocalization {
            language_id: Uuid::new_v4(),
            title: String::new(),
            content: "body".into(),
            meta_description: String::new(),
        }];
        assert!(page.validate().is_err());

        page.localizations[0].title = "Catalogue".into();
        assert!(page.validate().is_ok());
    }
}
