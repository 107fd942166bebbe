use serde::{Deserialize, Serialize};

/// Access role. Reference data from the server; never mutated locally except
/// by toggling membership in a user's role set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub active: bool,
}
