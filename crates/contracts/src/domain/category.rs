use serde::{Deserialize, Serialize};

use crate::domain::EntityDraft;
use crate::shared::validation::{is_blank, FieldErrors, Validate};

/// Product category reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub quantity_products: i64,
}

/// Transient create/edit form state for a category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDraft {
    pub id: Option<i64>,
    pub name: String,
    pub active: bool,
    pub quantity_products: Option<i64>,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            active: false,
            quantity_products: None,
        }
    }
}

impl CategoryDraft {
    pub fn from_entity(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            active: category.active,
            quantity_products: Some(category.quantity_products),
        }
    }
}

impl Validate for CategoryDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.name) {
            errors.insert("name".into(), "Name is required".into());
        }
        errors
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_products: Option<i64>,
}

impl EntityDraft for CategoryDraft {
    type Payload = CategoryPayload;

    fn to_payload(&self) -> CategoryPayload {
        CategoryPayload {
            id: self.id,
            name: self.name.clone(),
            active: self.active,
            quantity_products: self.quantity_products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_has_no_errors() {
        let draft = CategoryDraft {
            name: "Peripherals".into(),
            ..Default::default()
        };
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let draft = CategoryDraft {
            name: "   ".into(),
            ..Default::default()
        };
        let errors = draft.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("name"));
    }

    #[test]
    fn create_payload_omits_id_and_count() {
        let draft = CategoryDraft {
            name: "Networks".into(),
            active: true,
            ..Default::default()
        };
        let json = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(json["name"], "Networks");
        assert_eq!(json["active"], true);
        assert!(json.get("id").is_none());
        assert!(json.get("quantityProducts").is_none());
    }

    #[test]
    fn edit_draft_round_trips_entity_fields() {
        let entity = Category {
            id: 4,
            name: "Software".into(),
            active: false,
            quantity_products: 23,
        };
        let draft = CategoryDraft::from_entity(&entity);
        assert_eq!(draft.id, Some(4));
        assert_eq!(draft.quantity_products, Some(23));
        let json = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["quantityProducts"], 23);
    }
}
