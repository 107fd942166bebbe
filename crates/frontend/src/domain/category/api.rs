use contracts::domain::category::{Category, CategoryDraft};

use crate::shared::api_utils;
use crate::shared::gateway::EntityGateway;

#[derive(Clone, Copy)]
pub struct CategoryGateway;

impl EntityGateway for CategoryGateway {
    type Entity = Category;
    type Draft = CategoryDraft;

    fn resource() -> &'static str {
        "category"
    }
}

/// `PATCH /category/{id}/toggle-active`
pub async fn toggle_active(id: i64) -> Result<(), String> {
    api_utils::patch(&format!("/category/{}/toggle-active", id)).await
}
