use contracts::domain::centers::CenterName;
use contracts::domain::events::{EventPayload, EventRegistration, FreeEvent};

use crate::shared::http::{ApiClient, ApiError};

pub async fn fetch_events(api: ApiClient) -> Result<Vec<FreeEvent>, ApiError> {
    api.get("/events").await
}

pub async fn create_event(api: ApiClient, payload: &EventPayload) -> Result<FreeEvent, ApiError> {
    api.post("/events", payload).await
}

pub async fn update_event(
    api: ApiClient,
    id: &str,
    payload: &EventPayload,
) -> Result<FreeEvent, ApiError> {
    api.patch(&format!("/events/{id}"), payload).await
}

pub async fn delete_event(api: ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/events/{id}")).await
}

/// Slim center list backing the location select on the event form.
pub async fn fetch_center_names(api: ApiClient) -> Result<Vec<CenterName>, ApiError> {
    api.get("/centers/names").await
}

pub async fn fetch_registrations(
    api: ApiClient,
    event_id: &str,
) -> Result<Vec<EventRegistration>, ApiError> {
    api.get(&format!(
        "/event-registrations?event_id={}",
        urlencoding::encode(event_id)
    ))
    .await
}
