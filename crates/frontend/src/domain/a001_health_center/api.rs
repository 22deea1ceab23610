use contracts::domain::bookings::{BookingStatus, LabBooking, UpdateBookingStatus};
use contracts::domain::centers::{
    Center, CenterTest, ServiceActivation, ServiceOverrides, UpdateCenter,
};

use crate::shared::http::{ApiClient, ApiError};

pub async fn fetch_centers(api: ApiClient) -> Result<Vec<Center>, ApiError> {
    api.get("/centers").await
}

/// Maps the current session identity to its center record.
pub async fn fetch_my_center(api: ApiClient) -> Result<Center, ApiError> {
    api.get("/centers/me").await
}

pub async fn fetch_center(api: ApiClient, id: &str) -> Result<Center, ApiError> {
    api.get(&format!("/centers/{id}")).await
}

pub async fn update_center(
    api: ApiClient,
    id: &str,
    payload: &UpdateCenter,
) -> Result<Center, ApiError> {
    api.put(&format!("/centers/{id}"), payload).await
}

pub async fn delete_center(api: ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/centers/{id}")).await
}

pub async fn fetch_center_tests(api: ApiClient, id: &str) -> Result<Vec<CenterTest>, ApiError> {
    api.get(&format!("/centers/{id}/tests")).await
}

pub async fn update_service_overrides(
    api: ApiClient,
    service_id: &str,
    payload: &ServiceOverrides,
) -> Result<serde_json::Value, ApiError> {
    api.put(&format!("/center-services/{service_id}"), payload)
        .await
}

pub async fn deactivate_service(api: ApiClient, service_id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = api
        .put(
            &format!("/center-services/{service_id}"),
            &ServiceActivation { is_active: false },
        )
        .await?;
    Ok(())
}

pub async fn fetch_lab_bookings(
    api: ApiClient,
    search: &str,
) -> Result<Vec<LabBooking>, ApiError> {
    let path = if search.trim().is_empty() {
        "/bookings/lab".to_string()
    } else {
        format!("/bookings/lab?search={}", urlencoding::encode(search.trim()))
    };
    api.get(&path).await
}

pub async fn update_booking_status(
    api: ApiClient,
    id: &str,
    status: BookingStatus,
) -> Result<serde_json::Value, ApiError> {
    api.patch(
        &format!("/bookings/lab/{id}/status"),
        &UpdateBookingStatus { status },
    )
    .await
}
