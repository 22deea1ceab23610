use chrono::{Datelike, NaiveDate};

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Day cells for a month view laid out Sunday-first: leading `None` blanks
/// for the offset of the first weekday, then the day numbers.
pub fn day_cells(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month);
    let mut cells = vec![None; offset];
    cells.extend((1..=days).map(Some));
    cells
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_y, next_m) = next_month(year, month);
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = NaiveDate::from_ymd_opt(next_y, next_m, 1);
    match (first, next) {
        (Some(a), Some(b)) => (b - a).num_days() as u32,
        _ => 0,
    }
}

pub fn month_title(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn june_2025_starts_on_sunday() {
        let cells = day_cells(2025, 6);
        assert_eq!(cells[0], Some(1));
        assert_eq!(cells.len(), 30);
    }

    #[test]
    fn march_2024_has_leading_blanks() {
        // 2024-03-01 is a Friday
        let cells = day_cells(2024, 3);
        assert_eq!(&cells[..5], &[None; 5]);
        assert_eq!(cells[5], Some(1));
        assert_eq!(cells.last(), Some(&Some(31)));
    }

    #[test]
    fn leap_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
    }

    #[test]
    fn month_arithmetic_wraps_years() {
        assert_eq!(prev_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(next_month(2025, 6), (2025, 7));
    }

    #[test]
    fn titles() {
        assert_eq!(month_title(2025, 6), "June 2025");
    }
}
