use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwarenessKind {
    #[default]
    #[serde(rename = "article")]
    Article,
    #[serde(rename = "video")]
    Video,
}

impl AwarenessKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AwarenessKind::Article => "article",
            AwarenessKind::Video => "video",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "video" => AwarenessKind::Video,
            _ => AwarenessKind::Article,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "medium" => Severity::Medium,
            "high" => Severity::High,
            _ => Severity::Info,
        }
    }
}

/// Health awareness article/video record (`/api/health-awareness`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwarenessItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: AwarenessKind,
    #[serde(default)]
    pub severity: Severity,
    #[serde(rename = "mediaUrl", default)]
    pub media_url: Option<String>,
    #[serde(rename = "activeFrom", default)]
    pub active_from: Option<String>,
    #[serde(rename = "activeTo", default)]
    pub active_to: Option<String>,
}

/// Create/update payload. Blank optional fields are omitted, matching the
/// backend's sparse writes.
#[derive(Debug, Clone, Serialize)]
pub struct AwarenessPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub kind: AwarenessKind,
    pub severity: Severity,
    #[serde(rename = "mediaUrl", skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(rename = "activeFrom", skip_serializing_if = "Option::is_none")]
    pub active_from: Option<String>,
    #[serde(rename = "activeTo", skip_serializing_if = "Option::is_none")]
    pub active_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_with_wire_field_names() {
        let json = r#"{
            "_id": "H1",
            "title": "Dengue season",
            "type": "video",
            "severity": "high",
            "mediaUrl": "https://img.example/dengue.mp4",
            "activeFrom": "2025-05-01T00:00:00.000Z"
        }"#;
        let item: AwarenessItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, AwarenessKind::Video);
        assert_eq!(item.severity, Severity::High);
        assert_eq!(item.media_url.as_deref(), Some("https://img.example/dengue.mp4"));
        assert!(item.summary.is_none() && item.region.is_none());
    }

    #[test]
    fn kind_and_severity_default_when_absent() {
        let item: AwarenessItem =
            serde_json::from_str(r#"{"_id":"H2","title":"Hydration"}"#).unwrap();
        assert_eq!(item.kind, AwarenessKind::Article);
        assert_eq!(item.severity, Severity::Info);
    }

    #[test]
    fn select_values_round_trip() {
        assert_eq!(AwarenessKind::parse("video"), AwarenessKind::Video);
        assert_eq!(AwarenessKind::parse("anything"), AwarenessKind::Article);
        assert_eq!(Severity::parse(Severity::High.as_str()), Severity::High);
        assert_eq!(Severity::parse(""), Severity::Info);
    }

    #[test]
    fn payload_omits_blank_optionals() {
        let payload = AwarenessPayload {
            title: "Dengue season".into(),
            summary: None,
            description: None,
            category: Some("Outbreak".into()),
            region: None,
            kind: AwarenessKind::Article,
            severity: Severity::Medium,
            media_url: None,
            active_from: Some("2025-05-01".into()),
            active_to: None,
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"title":"Dengue season","category":"Outbreak","type":"article","severity":"medium","activeFrom":"2025-05-01"}"#
        );
    }
}
