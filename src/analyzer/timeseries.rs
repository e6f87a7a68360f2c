use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::parser::columns::{resolve_value, DATE_COLUMNS};
use crate::parser::deserializers::parse_flexible_date;
use crate::parser::types::Row;

/// One calendar day of activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimePoint {
    pub date: String,
    pub tickets: usize,
}

/// Count rows per calendar day, sorted ascending by day.
///
/// The date is the first non-empty cell among the date column candidates.
/// Rows without one, and rows whose value does not parse as a date, are
/// left out rather than failing the aggregation. Bucketing is keyed by
/// the chronological day, so ordering does not depend on string form.
pub fn tickets_per_day(rows: &[Row]) -> Vec<TimePoint> {
    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for row in rows {
        let Some(raw) = resolve_value(row, DATE_COLUMNS) else {
            continue;
        };
        let Some(day) = parse_flexible_date(raw) else {
            continue;
        };
        *by_day.entry(day).or_insert(0) += 1;
    }

    by_day
        .into_iter()
        .map(|(day, tickets)| TimePoint {
            date: day.format("%Y-%m-%d").to_string(),
            tickets,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(tickets_per_day(&[]).is_empty());
    }

    #[test]
    fn test_counts_per_day_across_aliases() {
        let rows = vec![
            Row::from_pairs(&[("Date", "2024-01-05")]),
            Row::from_pairs(&[("date", "2024-01-05")]),
            Row::from_pairs(&[("Created Date", "2024-01-06")]),
        ];
        let points = tickets_per_day(&rows);
        assert_eq!(
            points,
            vec![
                TimePoint { date: "2024-01-05".into(), tickets: 2 },
                TimePoint { date: "2024-01-06".into(), tickets: 1 },
            ]
        );
    }

    #[test]
    fn test_created_on_alias() {
        let rows = vec![Row::from_pairs(&[("Created On", "2024-02-01")])];
        assert_eq!(tickets_per_day(&rows)[0].date, "2024-02-01");
    }

    #[test]
    fn test_time_of_day_truncated() {
        let rows = vec![
            Row::from_pairs(&[("Date", "2024-01-05T08:00:00Z")]),
            Row::from_pairs(&[("Date", "2024-01-05 23:59:59")]),
        ];
        let points = tickets_per_day(&rows);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].tickets, 2);
    }

    #[test]
    fn test_rows_without_date_are_skipped() {
        let rows = vec![
            Row::from_pairs(&[("Date", "2024-01-05")]),
            Row::from_pairs(&[("Status", "Open")]),
            Row::from_pairs(&[("Date", "")]),
        ];
        let points = tickets_per_day(&rows);
        let total: usize = points.iter().map(|p| p.tickets).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_unparseable_dates_are_excluded() {
        let rows = vec![
            Row::from_pairs(&[("Date", "not-a-date")]),
            Row::from_pairs(&[("Date", "2024-01-05")]),
        ];
        let points = tickets_per_day(&rows);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, "2024-01-05");
    }

    #[test]
    fn test_sorted_chronologically_regardless_of_input_order() {
        let rows = vec![
            Row::from_pairs(&[("Date", "2024-01-01")]),
            Row::from_pairs(&[("Date", "2023-12-31")]),
            Row::from_pairs(&[("Date", "2024-02-15")]),
        ];
        let points = tickets_per_day(&rows);
        let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-12-31", "2024-01-01", "2024-02-15"]);
    }

    #[test]
    fn test_no_duplicate_days_and_sum_bounded() {
        let rows = vec![
            Row::from_pairs(&[("Date", "2024-01-05")]),
            Row::from_pairs(&[("Date", "2024-01-05T10:00:00")]),
            Row::from_pairs(&[("Date", "garbage")]),
        ];
        let points = tickets_per_day(&rows);
        assert_eq!(points.len(), 1);
        let total: usize = points.iter().map(|p| p.tickets).sum();
        assert!(total <= rows.len());
    }
}
