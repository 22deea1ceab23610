use serde::{Deserialize, Serialize};

/// Health center record as served by `/api/centers/*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Center {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// GeoJSON point, coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl GeoPoint {
    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        match self.coordinates.as_slice() {
            [lng, lat] => Some((*lat, *lng)),
            _ => None,
        }
    }
}

/// Slim listing returned by `/api/centers/names`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterName {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// One diagnostic test offered by a center (`/api/centers/:id/tests`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterTest {
    pub center_service_id: String,
    #[serde(default)]
    pub test_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub capacity: Option<i64>,
    #[serde(default)]
    pub daily_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateCenter {
    pub name: String,
    pub address: Address,
    pub contact: Contact,
    pub email: Option<String>,
}

/// Per-service overrides edited from the center tests page. Nulls are
/// meaningful (clear the override), so nothing is skipped here.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceOverrides {
    pub price_override: Option<f64>,
    pub capacity: Option<i64>,
    pub daily_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceActivation {
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sparse_center_record() {
        let json = r#"{"_id":"C1","name":"Colombo Lab"}"#;
        let c: Center = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, "C1");
        assert!(c.address.is_none() && c.location.is_none());
    }

    #[test]
    fn geo_point_orders_lat_lng() {
        let p = GeoPoint {
            coordinates: vec![79.861, 6.927],
        };
        assert_eq!(p.lat_lng(), Some((6.927, 79.861)));
        assert_eq!(GeoPoint { coordinates: vec![] }.lat_lng(), None);
    }

    #[test]
    fn service_overrides_serialize_explicit_nulls() {
        let dto = ServiceOverrides {
            price_override: None,
            capacity: Some(20),
            daily_count: None,
        };
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"price_override":null,"capacity":20,"daily_count":null}"#
        );
    }
}
