//! Response envelope and pagination payloads.
//!
//! The backend wraps every payload as `{ "data": ... }`. List endpoints
//! paginate with a zero-based `page` query parameter and return either a bare
//! array or a page object exposing `totalPages`/`totalElements`.

use serde::Deserialize;

/// Standard `{ data, message? }` wrapper around entity payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// A list payload as the server actually sends it: either a bare ordered
/// sequence or a page object. Some endpoints name the item field `data`,
/// others `content`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Items(Vec<T>),
    Paged(PagedPayload<T>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedPayload<T> {
    #[serde(default)]
    pub data: Option<Vec<T>>,
    #[serde(default)]
    pub content: Option<Vec<T>>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_elements: Option<u64>,
}

/// Normalized page of entities. `total_pages` is always at least 1.
#[derive(Debug, Clone)]
pub struct EntityPage<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub total_elements: Option<u64>,
}

impl<T> ListPayload<T> {
    pub fn into_page(self) -> EntityPage<T> {
        match self {
            ListPayload::Items(items) => EntityPage {
                items,
                total_pages: 1,
                total_elements: None,
            },
            ListPayload::Paged(paged) => EntityPage {
                items: paged.data.or(paged.content).unwrap_or_default(),
                total_pages: paged.total_pages.unwrap_or(1).max(1),
                total_elements: paged.total_elements,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_defaults_to_one_page() {
        let payload: ListPayload<i64> = serde_json::from_str("[1, 2, 3]").unwrap();
        let page = payload.into_page();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_elements, None);
    }

    #[test]
    fn page_object_with_data_field() {
        let payload: ListPayload<i64> =
            serde_json::from_str(r#"{"data": [7, 8], "totalPages": 4, "totalElements": 40}"#)
                .unwrap();
        let page = payload.into_page();
        assert_eq!(page.items, vec![7, 8]);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_elements, Some(40));
    }

    #[test]
    fn page_object_with_content_field() {
        let payload: ListPayload<i64> =
            serde_json::from_str(r#"{"content": [5], "totalPages": 2}"#).unwrap();
        let page = payload.into_page();
        assert_eq!(page.items, vec![5]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn missing_total_pages_defaults_to_one() {
        let payload: ListPayload<i64> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        let page = payload.into_page();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn envelope_unwraps_data() {
        let envelope: ApiEnvelope<Vec<i64>> =
            serde_json::from_str(r#"{"data": [1], "message": "ok"}"#).unwrap();
        assert_eq!(envelope.data, vec![1]);
        assert_eq!(envelope.message.as_deref(), Some("ok"));
    }
}
