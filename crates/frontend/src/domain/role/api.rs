use contracts::domain::role::Role;
use contracts::shared::envelope::ListPayload;

use crate::shared::api_utils;

/// `GET /role?page&size`. Roles are list-only reference data; one page is
/// plenty for the pickers.
pub async fn fetch_roles() -> Result<Vec<Role>, String> {
    let payload: ListPayload<Role> = api_utils::get_json("/role?page=0&size=50").await?;
    Ok(payload.into_page().items)
}
