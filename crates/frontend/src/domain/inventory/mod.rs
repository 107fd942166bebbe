pub mod api;
pub mod fallback;
pub mod ui;

use contracts::domain::inventory::Inventory;

use crate::shared::list::Searchable;

impl Searchable for Inventory {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
    }
}
