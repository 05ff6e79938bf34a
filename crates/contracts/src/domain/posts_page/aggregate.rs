use crate::domain::common::{AggregateId, AggregateRoot, BaseEntity, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique posts-page identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostsPageId(pub Uuid);

impl PostsPageId {
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

impl AggregateId for PostsPageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PostsPageId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Localization
// ============================================================================

/// Per-language content of a posts page
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PostsPageLocalization {
    #[serde(rename = "languageId")]
    pub language_id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

impl PostsPageLocalization {
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
            && self.excerpt.trim().is_empty()
            && self.content.trim().is_empty()
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Editorial content page for the posts section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsPage {
    #[serde(flatten)]
    pub base: BaseEntity<PostsPageId>,

    /// URL segment, lowercase ASCII letters/digits/hyphens
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,

    pub localizations: Vec<PostsPageLocalization>,
}

impl PostsPage {
    pub fn new_for_insert(
        slug: String,
        title: String,
        excerpt: String,
        content: String,
        localizations: Vec<PostsPageLocalization>,
    ) -> Self {
        Self {
            base: BaseEntity::new(PostsPageId::new_v4()),
            slug,
            title,
            excerpt,
            content,
            localizations,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply form data
    pub fn update(&mut self, dto: &PostsPageDto) {
        self.slug = dto.slug.trim().to_string();
        self.title = dto.title.clone();
        self.excerpt = dto.excerpt.clone();
        self.content = dto.content.clone();
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

pub(crate) fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl AggregateRoot for PostsPage {
    type Id = PostsPageId;

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
        "posts-pages"
    }

    fn element_name() -> &'static str {
        "Posts page"
    }

    fn list_name() -> &'static str {
        "Posts pages"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for posts-page create/update forms
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PostsPageDto {
    pub id: Option<String>,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub localizations: Vec<PostsPageLocalization>,
}

impl PostsPageDto {
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
    fn slug_shape() {
        assert!(is_valid_slug("about-us"));
        assert!(is_valid_slug("faq2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("About-Us"));
        assert!(!is_valid_slug("about us"));
        assert!(!is_valid_slug("-about"));
        assert!(!is_valid_slug("about-"));
    }

    #[test]
    fn validate_requires_title_and_slug() {
        let mut page = PostsPage::new_for_insert(
            "about-us".into(),
            "About us".into(),
            String::new(),
            String::new(),
            Vec::new(),
        );
        assert!(page.validate().is_ok());
        page.title.clear();
        assert!(page.validate().is_err());
        page.title = "About us".into();
        page.slug = "About Us".into();
        assert!(page.validate().is_err());
    }
}
