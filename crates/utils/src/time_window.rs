//! Time-window predicates over `chrono` timestamps.

use chrono::{DateTime, Duration, Utc};

/// Predicate matching timestamps no older than `window` before now.
///
/// Only the lower bound is checked, so timestamps in the future match.
pub fn within_last(window: Duration) -> impl Fn(&DateTime<Utc>) -> bool {
    within_last_at(Utc::now(), window)
}

/// Like [`within_last`], measured from an explicit `now`
pub fn within_last_at(now: DateTime<Utc>, window: Duration) -> impl Fn(&DateTime<Utc>) -> bool {
    let start = now - window;
    move |timestamp| *timestamp >= start
}

/// Predicate matching timestamps in `[start, end]`
pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> impl Fn(&DateTime<Utc>) -> bool {
    move |timestamp| *timestamp >= start && *timestamp <= end
}

/// Time-window filtering for any iterator
pub trait WindowExt: Iterator + Sized {
    /// Keep the elements whose timestamp falls within the last `window`
    fn within_window<F>(self, mut timestamp_of: F, window: Duration) -> impl Iterator<Item = Self::Item>
    where
        F: FnMut(&Self::Item) -> DateTime<Utc>,
    {
        let in_window = within_last(window);
        self.filter(move |item| in_window(&timestamp_of(item)))
    }
}

impl<I> WindowExt for I where I: Iterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_within_last_at() {
        let in_window = within_last_at(at(12), Duration::hours(2));
        assert!(in_window(&at(10)));
        assert!(in_window(&at(11)));
        assert!(!in_window(&at(9)));
    }

    #[test]
    fn test_between_is_inclusive() {
        let in_range = between(at(8), at(10));
        assert!(in_range(&at(8)));
        assert!(in_range(&at(10)));
        assert!(!in_range(&at(11)));
    }

    #[test]
    fn test_within_window_filters_sequence() {
        let now = Utc::now();
        let events = vec![
            ("fresh", now - Duration::minutes(1)),
            ("stale", now - Duration::hours(3)),
            ("recent", now - Duration::minutes(30)),
        ];

        let names: Vec<&str> = events
            .into_iter()
            .within_window(|(_, at)| *at, Duration::hours(1))
            .map(|(name, _)| name)
            .collect();

        assert_eq!(names, vec!["fresh", "recent"]);
    }
}
