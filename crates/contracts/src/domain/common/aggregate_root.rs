use super::EntityMetadata;

/// Trait implemented by every catalog aggregate.
///
/// Instance accessors expose the record's base slice; the class-level
/// methods carry the UI naming used for page titles, storage keys and
/// API paths.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ========================================================================
    // Instance accessors
    // ========================================================================

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Activation flag
    fn is_active(&self) -> bool;

    /// Audit metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable audit metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ========================================================================
    // Class-level metadata
    // ========================================================================

    /// REST collection segment (e.g. "categories")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Category")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Categories")
    fn list_name() -> &'static str;
}
