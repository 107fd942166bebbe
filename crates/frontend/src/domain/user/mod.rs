pub mod api;
pub mod fallback;
pub mod ui;

use contracts::domain::user::User;

use crate::shared::list::Searchable;

impl Searchable for User {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}
