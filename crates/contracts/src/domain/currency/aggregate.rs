use crate::domain::common::{AggregateId, AggregateRoot, BaseEntity, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique currency identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyId(pub Uuid);

impl CurrencyId {
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

impl AggregateId for CurrencyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CurrencyId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Localization
// ============================================================================

/// Per-language currency name
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CurrencyLocalization {
    #[serde(rename = "languageId")]
    pub language_id: Uuid,
    pub name: String,
}

impl CurrencyLocalization {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Currency accepted by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    #[serde(flatten)]
    pub base: BaseEntity<CurrencyId>,

    pub name: String,
    /// ISO-4217-style code, three ASCII letters ("USD")
    pub code: String,
    pub symbol: String,

    pub localizations: Vec<CurrencyLocalization>,
}

impl Currency {
    pub fn new_for_insert(
        name: String,
        code: String,
        symbol: String,
        localizations: Vec<CurrencyLocalization>,
    ) -> Self {
        Self {
            base: BaseEntity::new(CurrencyId::new_v4()),
            name,
            code,
            symbol,
            localizations,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply form data
    pub fn update(&mut self, dto: &CurrencyDto) {
        self.name = dto.name.clone();
        self.code = dto.code.trim().to_ascii_uppercase();
        self.symbol = dto.symbol.clone();
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
        if !is_valid_code(&self.code) {
            return Err("Code must be three letters (e.g. USD)".into());
        }
        let mut seen = std::collections::HashSet::new();
        for row in &self.localizations {
            if !seen.insert(row.language_id) {
                return Err("Duplicate localization language".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

fn is_valid_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

impl AggregateRoot for Currency {
    type Id = CurrencyId;

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
        "currencies"
    }

    fn element_name() -> &'static str {
        "Currency"
    }

    fn list_name() -> &'static str {
        "Currencies"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for currency create/update forms
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CurrencyDto {
    pub id: Option<String>,
    pub name: String,
    pub code: String,
    pub symbol: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub localizations: Vec<CurrencyLocalization>,
}

impl CurrencyDto {
    pub fn pruned(&self) -> Self {
        let mut dto = self.clone();
        dto.code = dto.code.trim().to_ascii_uppercase();
        dto.localizations.retain(|l| !l.is_blank());
        dto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(name: &str, code: &str) -> Currency {
        Currency::new_for_insert(name.to_string(), code.to_string(), "$".into(), Vec::new())
    }

    #[test]
    fn validate_code_shape() {
        assert!(currency("US Dollar", "USD").validate().is_ok());
        assert!(currency("US Dollar", "usd").validate().is_err());
        assert!(currency("US Dollar", "USDX").validate().is_err());
        assert!(currency("US Dollar", "U1").validate().is_err());
        assert!(currency("", "USD").validate().is_err());
    }

    #[test]
    fn update_uppercases_code() {
        let mut cur = currency("US Dollar", "USD");
        let dto = CurrencyDto {
            name: "Euro".into(),
            code: " eur ".into(),
            symbol: "€".into(),
            ..Default::default()
        };
        cur.update(&dto);
        assert_eq!(cur.code, "EUR");
        assert!(cur.validate().is_ok());
    }
}
