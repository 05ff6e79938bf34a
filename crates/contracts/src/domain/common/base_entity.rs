use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Base slice shared by every catalog record: identifier, activation flag
/// and audit timestamps. Entity-specific display fields live on the
/// aggregate itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseEntity<Id> {
    /// Unique record identifier
    pub id: Id,
    /// Whether the record participates in public listings
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Lifecycle metadata
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl<Id> BaseEntity<Id> {
    /// Create a new active record
    pub fn new(id: Id) -> Self {
        Self {
            id,
            is_active: true,
            metadata: EntityMetadata::new(),
        }
    }

    /// Create a record with existing metadata (deserialized from the API)
    pub fn with_metadata(id: Id, is_active: bool, metadata: EntityMetadata) -> Self {
        Self {
            id,
            is_active,
            metadata,
        }
    }

    /// Bump the update timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }

    /// Flip the activation flag
    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
        self.touch();
    }
}
