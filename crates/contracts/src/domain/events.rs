use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Free screening event (`/api/events`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeEvent {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub slots_total: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventPayload {
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub slots_total: String,
}

/// Patient registration for an event (`/api/event-registrations`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRegistration {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nic: Option<String>,
    #[serde(default)]
    pub contact_no: Option<String>,
}

/// Accepts both bare dates and full ISO timestamps.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

impl FreeEvent {
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_event_date)
    }
}

/// Display order for the events list: upcoming events first in ascending
/// date order, then past events newest-first. Undated events sort last.
pub fn order_for_display(mut events: Vec<FreeEvent>, today: NaiveDate) -> Vec<FreeEvent> {
    let (mut upcoming, mut past): (Vec<_>, Vec<_>) = events
        .drain(..)
        .partition(|e| e.day().map(|d| d >= today).unwrap_or(false));
    upcoming.sort_by_key(|e| e.day());
    past.sort_by_key(|e| std::cmp::Reverse(e.day()));
    upcoming.extend(past);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, date: Option<&str>) -> FreeEvent {
        FreeEvent {
            id: id.into(),
            name: format!("Event {id}"),
            description: None,
            date: date.map(Into::into),
            time: None,
            location: None,
            slots_total: None,
        }
    }

    #[test]
    fn parses_iso_timestamp_and_bare_date() {
        assert_eq!(
            parse_event_date("2025-06-01T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert_eq!(
            parse_event_date("2025-06-01"),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert_eq!(parse_event_date("soon"), None);
    }

    #[test]
    fn upcoming_ascending_then_past_descending() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let ordered = order_for_display(
            vec![
                event("past_old", Some("2025-01-01")),
                event("soon", Some("2025-06-20")),
                event("past_recent", Some("2025-06-10")),
                event("later", Some("2025-07-01")),
                event("undated", None),
            ],
            today,
        );
        let ids: Vec<&str> = ordered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["soon", "later", "past_recent", "past_old", "undated"]
        );
    }

    #[test]
    fn today_counts_as_upcoming() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let ordered = order_for_display(vec![event("today", Some("2025-06-15"))], today);
        assert_eq!(ordered[0].id, "today");
        assert!(ordered[0].day().unwrap() >= today);
    }
}
