use contracts::domain::awareness::{AwarenessItem, AwarenessPayload};

use crate::shared::http::{ApiClient, ApiError};

pub async fn fetch_items(api: ApiClient) -> Result<Vec<AwarenessItem>, ApiError> {
    api.get("/health-awareness").await
}

pub async fn create_item(
    api: ApiClient,
    payload: &AwarenessPayload,
) -> Result<AwarenessItem, ApiError> {
    api.post("/health-awareness", payload).await
}

pub async fn update_item(
    api: ApiClient,
    id: &str,
    payload: &AwarenessPayload,
) -> Result<AwarenessItem, ApiError> {
    api.put(&format!("/health-awareness/{id}"), payload).await
}

pub async fn delete_item(api: ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/health-awareness/{id}")).await
}
