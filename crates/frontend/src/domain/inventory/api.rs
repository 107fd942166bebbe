use contracts::domain::inventory::{Inventory, InventoryDraft};

use crate::shared::gateway::EntityGateway;

#[derive(Clone, Copy)]
pub struct InventoryGateway;

impl EntityGateway for InventoryGateway {
    type Entity = Inventory;
    type Draft = InventoryDraft;

    fn resource() -> &'static str {
        "inventory"
    }
}
