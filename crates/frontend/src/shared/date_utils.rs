use chrono::NaiveDate;

/// Format an ISO date or timestamp as "DD.MM.YYYY". Values that do not
/// carry a parseable day render as "-".
pub fn format_day(raw: &str) -> String {
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day() {
        assert_eq!(format_day("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_day("2024-12-31"), "31.12.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_day("invalid"), "-");
        assert_eq!(format_day(""), "-");
    }
}
