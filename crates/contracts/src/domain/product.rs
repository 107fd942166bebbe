use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::inventory::Inventory;
use crate::domain::EntityDraft;
use crate::shared::validation::{is_blank, FieldErrors, Validate};

/// Stocked product. Belongs to exactly one inventory and any number of
/// categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub batch: Option<i64>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub inventory: Option<Inventory>,
    #[serde(default)]
    pub created_by_user_id: Option<i64>,
}

/// Create/edit form state for a product. `quantity` and `batch` stay as the
/// raw input text until submit-time coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub serial_number: String,
    pub batch: String,
    pub active: bool,
    pub categories: Vec<Category>,
    pub inventory_id: Option<i64>,
    pub created_by_user_id: Option<i64>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            quantity: String::new(),
            serial_number: String::new(),
            batch: String::new(),
            active: true,
            categories: Vec::new(),
            inventory_id: None,
            created_by_user_id: None,
        }
    }
}

impl ProductDraft {
    pub fn from_entity(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            quantity: product.quantity.to_string(),
            serial_number: product.serial_number.clone(),
            batch: product.batch.map(|b| b.to_string()).unwrap_or_default(),
            active: product.active,
            categories: product.categories.clone(),
            inventory_id: product.inventory.as_ref().map(|i| i.id),
            created_by_user_id: product.created_by_user_id,
        }
    }

    /// Adds a category to the draft's set. Idempotent by id.
    pub fn add_category(&mut self, category: Category) {
        if !self.categories.iter().any(|c| c.id == category.id) {
            self.categories.push(category);
        }
    }

    /// Removes a category by id. No-op when the id is absent.
    pub fn remove_category(&mut self, id: i64) {
        self.categories.retain(|c| c.id != id);
    }
}

impl Validate for ProductDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.name) {
            errors.insert("name".into(), "Name is required".into());
        }
        if is_blank(&self.quantity) {
            errors.insert("quantity".into(), "Quantity is required".into());
        } else {
            match self.quantity.trim().parse::<i64>() {
                Ok(value) if value >= 0 => {}
                Ok(_) => {
                    errors.insert(
                        "quantity".into(),
                        "Quantity must be zero or greater".into(),
                    );
                }
                Err(_) => {
                    errors.insert("quantity".into(), "Quantity must be a number".into());
                }
            }
        }
        if !is_blank(&self.batch) && self.batch.trim().parse::<i64>().is_err() {
            errors.insert("batch".into(), "Batch must be a number".into());
        }
        if self.inventory_id.is_none() {
            errors.insert("inventory".into(), "Please choose an inventory".into());
        }
        errors
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub serial_number: String,
    pub batch: Option<i64>,
    pub active: bool,
    pub categories: Vec<Category>,
    pub inventory: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_user_id: Option<i64>,
}

impl EntityDraft for ProductDraft {
    type Payload = ProductPayload;

    fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: self.quantity.trim().parse().unwrap_or_default(),
            serial_number: self.serial_number.clone(),
            batch: self.batch.trim().parse().ok(),
            active: self.active,
            categories: self.categories.clone(),
            inventory: self.inventory_id.unwrap_or_default(),
            created_by_user_id: self.created_by_user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64) -> Category {
        Category {
            id,
            name: format!("category-{id}"),
            active: true,
            quantity_products: 0,
        }
    }

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "Laptop".into(),
            quantity: "15".into(),
            inventory_id: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn add_category_is_idempotent() {
        let mut draft = valid_draft();
        draft.add_category(category(2));
        draft.add_category(category(2));
        let once = draft.clone();
        draft.add_category(category(2));
        assert_eq!(draft, once);
        assert_eq!(draft.categories.len(), 1);
    }

    #[test]
    fn remove_absent_category_is_a_no_op() {
        let mut draft = valid_draft();
        draft.add_category(category(1));
        let before = draft.clone();
        draft.remove_category(99);
        assert_eq!(draft, before);
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn missing_inventory_is_reported() {
        let mut draft = valid_draft();
        draft.inventory_id = None;
        let errors = draft.validate();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["inventory"]);
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let mut draft = valid_draft();
        draft.quantity = "-3".into();
        assert!(draft.validate().contains_key("quantity"));
    }

    #[test]
    fn non_numeric_quantity_is_rejected() {
        let mut draft = valid_draft();
        draft.quantity = "many".into();
        assert!(draft.validate().contains_key("quantity"));
    }

    #[test]
    fn payload_coerces_numeric_text() {
        let mut draft = valid_draft();
        draft.quantity = "15".into();
        draft.batch = "3".into();
        let payload = draft.to_payload();
        assert_eq!(payload.quantity, 15);
        assert_eq!(payload.batch, Some(3));
        assert_eq!(payload.inventory, 1);
    }

    #[test]
    fn empty_batch_serializes_as_null() {
        let payload = valid_draft().to_payload();
        assert_eq!(payload.batch, None);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["batch"].is_null());
    }
}
