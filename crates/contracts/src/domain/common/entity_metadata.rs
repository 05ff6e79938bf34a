use serde::{Deserialize, Serialize};

/// Audit metadata carried by every catalog record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// When the record was created
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// When the record was last updated
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl EntityMetadata {
    /// Fresh metadata for a new record
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_moves_only_updated_at() {
        let mut meta = EntityMetadata::new();
        let created = meta.created_at;
        let updated = meta.updated_at;
        meta.touch();
        assert_eq!(meta.created_at, created);
        assert!(meta.updated_at >= updated);
    }
}
