pub mod api;
pub mod fallback;
pub mod ui;

use contracts::domain::product::Product;

use crate::shared::list::Searchable;

impl Searchable for Product {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.serial_number.to_lowercase().contains(needle)
    }
}
