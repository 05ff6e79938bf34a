use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal list entry returned by dropdown endpoints and used to populate
/// select inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DropdownItem {
    pub id: Uuid,
    pub name: String,
    pub code: String,
}

impl DropdownItem {
    /// Label shown inside a select option
    pub fn display_label(&self) -> String {
        if self.code.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_with_and_without_code() {
        let mut item = DropdownItem {
            id: Uuid::new_v4(),
            name: "English".into(),
            code: "en".into(),
        };
        assert_eq!(item.display_label(), "English (en)");
        item.code.clear();
        assert_eq!(item.display_label(), "English");
    }
}
