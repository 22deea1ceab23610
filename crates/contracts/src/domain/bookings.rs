use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

/// Lab-test booking row (`/api/bookings/lab`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabBooking {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    pub patient_name: String,
    pub test_name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub payment_status: Option<String>,
    pub status: BookingStatus,
    #[serde(default)]
    pub report_url: Option<String>,
}

impl LabBooking {
    /// Online payments are flagged by `paymentStatus`, anything else is
    /// pay-at-center.
    pub fn paid_online(&self) -> bool {
        self.payment_status
            .as_deref()
            .map(|s| s.trim().eq_ignore_ascii_case("online"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateBookingStatus {
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_wire_casing() {
        assert_eq!(
            serde_json::to_string(&UpdateBookingStatus {
                status: BookingStatus::Completed
            })
            .unwrap(),
            r#"{"status":"Completed"}"#
        );
        let s: BookingStatus = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(s, BookingStatus::Pending);
    }

    #[test]
    fn online_payment_detection_is_lenient() {
        let mut b: LabBooking = serde_json::from_str(
            r#"{"_id":"B1","patientName":"Jane","testName":"FBC","status":"Pending"}"#,
        )
        .unwrap();
        assert!(!b.paid_online());
        b.payment_status = Some(" Online ".into());
        assert!(b.paid_online());
        b.payment_status = Some("cash".into());
        assert!(!b.paid_online());
    }
}
