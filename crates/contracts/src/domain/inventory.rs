use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::EntityDraft;
use crate::shared::validation::{is_blank, FieldErrors, Validate};

/// Warehouse / storage location record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub create_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryDraft {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub location: String,
    pub active: bool,
}

impl InventoryDraft {
    pub fn from_entity(inventory: &Inventory) -> Self {
        Self {
            id: Some(inventory.id),
            name: inventory.name.clone(),
            description: inventory.description.clone(),
            location: inventory.location.clone(),
            active: inventory.active,
        }
    }
}

impl Validate for InventoryDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.name) {
            errors.insert("name".into(), "Name is required".into());
        }
        if is_blank(&self.location) {
            errors.insert("location".into(), "Location is required".into());
        }
        errors
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub location: String,
    pub active: bool,
}

impl EntityDraft for InventoryDraft {
    type Payload = InventoryPayload;

    fn to_payload(&self) -> InventoryPayload {
        InventoryPayload {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> InventoryDraft {
        InventoryDraft {
            name: "Main warehouse".into(),
            location: "Building A".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn each_missing_required_field_is_reported_alone() {
        let mut draft = valid_draft();
        draft.name.clear();
        let errors = draft.validate();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["name"]);

        let mut draft = valid_draft();
        draft.location.clear();
        let errors = draft.validate();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["location"]);
    }

    #[test]
    fn entity_dates_parse_from_wire_format() {
        let inventory: Inventory = serde_json::from_str(
            r#"{"id": 1, "name": "Main", "location": "A", "createDate": "2024-01-05"}"#,
        )
        .unwrap();
        assert_eq!(
            inventory.create_date,
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }
}
