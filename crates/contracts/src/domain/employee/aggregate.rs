use crate::domain::common::{AggregateId, AggregateRoot, BaseEntity, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
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

impl AggregateId for EmployeeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EmployeeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Localization
// ============================================================================

/// Per-language employee display fields
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EmployeeLocalization {
    #[serde(rename = "languageId")]
    pub language_id: Uuid,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
}

impl EmployeeLocalization {
    pub fn is_blank(&self) -> bool {
        self.first_name.trim().is_empty()
            && self.last_name.trim().is_empty()
            && self.job_title.trim().is_empty()
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Staff member shown on the public site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(flatten)]
    pub base: BaseEntity<EmployeeId>,

    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,

    pub localizations: Vec<EmployeeLocalization>,
}

impl Employee {
    pub fn new_for_insert(
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
        job_title: String,
        localizations: Vec<EmployeeLocalization>,
    ) -> Self {
        Self {
            base: BaseEntity::new(EmployeeId::new_v4()),
            first_name,
            last_name,
            email,
            phone,
            job_title,
            localizations,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Display name for lists
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Apply form data
    pub fn update(&mut self, dto: &EmployeeDto) {
        self.first_name = dto.first_name.clone();
        self.last_name = dto.last_name.clone();
        self.email = dto.email.trim().to_string();
        self.phone = dto.phone.clone();
        self.job_title = dto.job_title.clone();
        self.localizations = dto
            .localizations
            .iter()
            .filter(|l| !l.is_blank())
            .cloned()
            .collect();
    }

    /// Validate record data
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("First name is required".into());
        }
        if self.last_name.trim().is_empty() {
            return Err("Last name is required".into());
        }
        if !is_valid_email(&self.email) {
            return Err("Email address is not valid".into());
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

// The mail server is the authority; this catches obvious typos only.
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

impl AggregateRoot for Employee {
    type Id = EmployeeId;

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
        "employees"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for employee create/update forms
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmployeeDto {
    pub id: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub localizations: Vec<EmployeeLocalization>,
}

impl EmployeeDto {
    pub fn pruned(&self) -> Self {
        let mut dto = self.clone();
        dto.email = dto.email.trim().to_string();
        dto.localizations.retain(|l| !l.is_blank());
        dto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(first: &str, last: &str, email: &str) -> Employee {
        Employee::new_for_insert(
            first.to_string(),
            last.to_string(),
            email.to_string(),
            String::new(),
            "Clerk".into(),
            Vec::new(),
        )
    }

    #[test]
    fn validate_names_and_email() {
        assert!(employee("Ada", "Lovelace", "ada@example.com").validate().is_ok());
        assert!(employee("", "Lovelace", "ada@example.com").validate().is_err());
        assert!(employee("Ada", "", "ada@example.com").validate().is_err());
        assert!(employee("Ada", "Lovelace", "ada").validate().is_err());
        assert!(employee("Ada", "Lovelace", "ada@").validate().is_err());
        assert!(employee("Ada", "Lovelace", "@example.com").validate().is_err());
        assert!(employee("Ada", "Lovelace", "ada@localhost").validate().is_err());
    }

    #[test]
    fn full_name_trims() {
        let emp = employee("Ada", "", "ada@example.com");
        assert_eq!(emp.full_name(), "Ada");
    }
}
