//! Monday–Friday business-day arithmetic. No holiday calendar.

use chrono::{Datelike, Days, NaiveDate, Weekday};

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advance `n` business days from `start`.
///
/// Steps one calendar day at a time and counts only weekdays; `start` itself
/// is never counted. `advance(d, 0)` is `d`. Returns `None` if the walk runs
/// past the end of chrono's calendar.
pub fn advance(start: NaiveDate, n: u32) -> Option<NaiveDate> {
    if i64::from(n) > max_business_days_after(start) {
        return None;
    }

    let mut current = start;
    let mut counted = 0;
    while counted < n {
        current = current.checked_add_days(Days::new(1))?;
        if is_business_day(current) {
            counted += 1;
        }
    }
    Some(current)
}

/// Upper bound on the weekdays in `(start, NaiveDate::MAX]`.
fn max_business_days_after(start: NaiveDate) -> i64 {
    let days = NaiveDate::MAX.signed_duration_since(start).num_days();
    days / 7 * 5 + (days % 7).min(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_days_is_identity() {
        let sat = date(2025, 1, 4);
        assert_eq!(advance(sat, 0), Some(sat));
    }

    #[test]
    fn friday_plus_one_is_monday() {
        assert_eq!(advance(date(2025, 1, 3), 1), Some(date(2025, 1, 6)));
    }

    #[test]
    fn weekend_start_counts_from_monday() {
        assert_eq!(advance(date(2025, 1, 4), 1), Some(date(2025, 1, 6)));
        assert_eq!(advance(date(2025, 1, 5), 5), Some(date(2025, 1, 10)));
    }

    #[test]
    fn fifteen_days_from_monday_skips_two_weekends() {
        // Mon 2025-01-06 + 15 business days = Mon 2025-01-27.
        assert_eq!(advance(date(2025, 1, 6), 15), Some(date(2025, 1, 27)));
    }

    #[test]
    fn result_is_weekday_and_counts_exactly_n() {
        let start = date(2024, 2, 20);
        for n in 1..=60 {
            let end = advance(start, n).unwrap();
            assert!(is_business_day(end), "n={n} landed on {end}");

            let counted = start
                .iter_days()
                .skip(1)
                .take_while(|d| *d <= end)
                .filter(|d| is_business_day(*d))
                .count();
            assert_eq!(counted, n as usize, "n={n}");
        }
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(advance(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn unreachable_count_is_rejected_without_walking() {
        let start = std::time::Instant::now();
        assert_eq!(advance(date(2025, 1, 1), u32::MAX), None);
        assert_eq!(advance(date(2025, 1, 1), 4_000_000_000), None);
        assert!(start.elapsed() < std::time::Duration::from_millis(100));
    }

    #[test]
    fn bound_allows_dates_near_the_calendar_end() {
        let near_end = NaiveDate::MAX - Days::new(30);
        let end = advance(near_end, 10).unwrap();
        assert!(is_business_day(end));
        assert!(end <= NaiveDate::MAX);
        assert_eq!(advance(near_end, 30), None);
    }
}
