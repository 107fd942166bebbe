use contracts::domain::product::{Product, ProductDraft};

use crate::shared::api_utils;
use crate::shared::gateway::EntityGateway;

#[derive(Clone, Copy)]
pub struct ProductGateway;

impl EntityGateway for ProductGateway {
    type Entity = Product;
    type Draft = ProductDraft;

    fn resource() -> &'static str {
        "product"
    }
}

/// `PATCH /product/{id}/toggle-active`
pub async fn toggle_active(id: i64) -> Result<(), String> {
    api_utils::patch(&format!("/product/{}/toggle-active", id)).await
}
