use contracts::domain::user::{User, UserDraft};

use crate::shared::gateway::EntityGateway;

#[derive(Clone, Copy)]
pub struct UserGateway;

impl EntityGateway for UserGateway {
    type Entity = User;
    type Draft = UserDraft;

    fn resource() -> &'static str {
        "user"
    }
}
