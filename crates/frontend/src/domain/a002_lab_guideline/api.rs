use contracts::domain::guidelines::{Guideline, GuidelinePayload};

use crate::shared::http::{ApiClient, ApiError};

pub async fn fetch_guidelines(api: ApiClient) -> Result<Vec<Guideline>, ApiError> {
    api.get("/labtests").await
}

pub async fn fetch_guideline(api: ApiClient, id: &str) -> Result<Guideline, ApiError> {
    api.get(&format!("/labtests/{id}")).await
}

pub async fn create_guideline(
    api: ApiClient,
    payload: &GuidelinePayload,
) -> Result<Guideline, ApiError> {
    api.post("/labtests", payload).await
}

pub async fn update_guideline(
    api: ApiClient,
    id: &str,
    payload: &GuidelinePayload,
) -> Result<Guideline, ApiError> {
    api.put(&format!("/labtests/{id}"), payload).await
}

pub async fn delete_guideline(api: ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/labtests/{id}")).await
}
