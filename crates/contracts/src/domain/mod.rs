pub mod category;
pub mod inventory;
pub mod product;
pub mod role;
pub mod user;

use serde::Serialize;

use crate::shared::validation::Validate;

/// A form draft that can be turned into a create/update request body.
///
/// Drafts mirror the entity field-by-field but keep numeric inputs as text
/// until submit-time coercion; `to_payload` must only be called on a draft
/// whose `validate()` returned no errors.
pub trait EntityDraft: Validate + Clone + Default + Send + Sync + 'static {
    type Payload: Serialize + Clone + Send + Sync + 'static;

    fn to_payload(&self) -> Self::Payload;
}
