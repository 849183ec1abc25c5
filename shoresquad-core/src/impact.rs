//! Impact accounting: the cumulative total and per-month rollups.
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::state::CleanupEvent;

/// Waste removed and cleanup count for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyImpact {
    pub year: i32,
    pub month: u32,
    pub kg: f64,
    pub cleanups: u32,
}

impl MonthlyImpact {
    /// Short display label such as `Nov 2025`.
    #[must_use]
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).map_or_else(
            || format!("{}-{:02}", self.year, self.month),
            |date| date.format("%b %Y").to_string(),
        )
    }
}

/// Sum of `kg` over all events. The store's single source for the
/// cumulative impact figure.
#[must_use]
pub fn total_kg(events: &[CleanupEvent]) -> f64 {
    events.iter().map(|event| event.kg).sum()
}

/// Group cleanups by the calendar year-month of their date, most recent
/// month first. Events whose date does not parse are left out; the store
/// rejects such dates at its boundary, so they can only arrive via a
/// foreign snapshot.
#[must_use]
pub fn monthly_impact(events: &[CleanupEvent]) -> Vec<MonthlyImpact> {
    let mut groups: BTreeMap<(i32, u32), (f64, u32)> = BTreeMap::new();
    for event in events {
        let Ok(date) = NaiveDate::parse_from_str(&event.date, "%Y-%m-%d") else {
            continue;
        };
        let entry = groups.entry((date.year(), date.month())).or_insert((0.0, 0));
        entry.0 += event.kg;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .rev()
        .map(|((year, month), (kg, cleanups))| MonthlyImpact {
            year,
            month,
            kg,
            cleanups,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(location: &str, date: &str, kg: f64) -> CleanupEvent {
        CleanupEvent {
            location: location.to_string(),
            date: date.to_string(),
            kg,
            members: 3,
        }
    }

    #[test]
    fn groups_by_month_and_sorts_descending() {
        let events = vec![
            event("East Coast Park", "2025-11-28", 10.0),
            event("Sentosa Beach", "2025-11-21", 15.0),
            event("Pasir Ris Park", "2025-10-05", 5.0),
        ];
        let months = monthly_impact(&events);
        assert_eq!(months.len(), 2);
        assert_eq!((months[0].year, months[0].month), (2025, 11));
        assert!((months[0].kg - 25.0).abs() < f64::EPSILON);
        assert_eq!(months[0].cleanups, 2);
        assert_eq!((months[1].year, months[1].month), (2025, 10));
        assert!((months[1].kg - 5.0).abs() < f64::EPSILON);
        assert_eq!(months[1].cleanups, 1);
    }

    #[test]
    fn empty_events_produce_no_groups() {
        assert!(monthly_impact(&[]).is_empty());
    }

    #[test]
    fn unparseable_dates_are_skipped() {
        let events = vec![
            event("Changi Beach", "not-a-date", 7.0),
            event("Changi Beach", "2025-12-01", 3.0),
        ];
        let months = monthly_impact(&events);
        assert_eq!(months.len(), 1);
        assert!((months[0].kg - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn total_is_sum_over_all_events() {
        let events = vec![
            event("East Coast Park", "2025-11-28", 10.0),
            event("Sentosa Beach", "2025-11-21", 15.5),
        ];
        assert!((total_kg(&events) - 25.5).abs() < f64::EPSILON);
    }

    #[test]
    fn month_label_is_short_form() {
        let month = MonthlyImpact {
            year: 2025,
            month: 11,
            kg: 25.0,
            cleanups: 2,
        };
        assert_eq!(month.label(), "Nov 2025");
    }
}
