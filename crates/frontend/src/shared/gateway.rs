//! Capability-based gateway to a remote entity collection.
//!
//! The REST conventions are uniform across entities, so the trait carries the
//! whole request flow as default methods; an entity binding supplies only its
//! resource name and associated types.

use serde::de::DeserializeOwned;

use contracts::domain::EntityDraft;
use contracts::shared::envelope::{EntityPage, ListPayload};

use crate::shared::api_utils;

#[allow(async_fn_in_trait)]
pub trait EntityGateway: Copy + Send + Sync + 'static {
    type Entity: DeserializeOwned + Clone + Send + Sync + 'static;
    type Draft: EntityDraft;

    /// Resource path segment, e.g. `"category"`.
    fn resource() -> &'static str;

    /// Fetch one page. `page` is the zero-based upstream index.
    async fn list(&self, page: u32, size: u32) -> Result<EntityPage<Self::Entity>, String> {
        let payload: ListPayload<Self::Entity> = api_utils::get_json(&format!(
            "/{}?page={}&size={}",
            Self::resource(),
            page,
            size
        ))
        .await?;
        Ok(payload.into_page())
    }

    async fn get(&self, id: i64) -> Result<Self::Entity, String> {
        api_utils::get_json(&format!("/{}/{}", Self::resource(), id)).await
    }

    async fn create(&self, draft: &Self::Draft) -> Result<(), String> {
        api_utils::post_json(&format!("/{}", Self::resource()), &draft.to_payload()).await
    }

    /// Update sends the id in the body, not the path.
    async fn update(&self, draft: &Self::Draft) -> Result<(), String> {
        api_utils::put_json(&format!("/{}", Self::resource()), &draft.to_payload()).await
    }

    async fn delete(&self, id: i64) -> Result<(), String> {
        api_utils::delete(&format!("/{}/{}", Self::resource(), id)).await
    }
}
