//! Date sequences for the week and month grids, and date shifting.
//!
//! Weeks start on Sunday.

use chrono::{Datelike, Days, Local, Months, NaiveDate, NaiveTime};

use crate::error::{ScheduleError, ScheduleResult};

/// Number of cells in the month grid (6 rows of 7 days).
pub const MONTH_GRID_CELLS: usize = 42;

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> ScheduleResult<NaiveDate> {
    let offset = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(u64::from(offset)))
        .ok_or_else(|| ScheduleError::DateOutOfRange(format!("week containing {}", date)))
}

/// The 7 days of the week containing `date`, Sunday first.
pub fn week_days(date: NaiveDate) -> ScheduleResult<Vec<NaiveDate>> {
    consecutive_days(week_start(date)?, 7)
}

/// The 42 days of the month grid for `date`'s month.
///
/// The grid starts on the Sunday on or before the 1st, so the 1st sits in
/// its weekday column and leading/trailing cells come from the adjacent
/// months.
pub fn month_days(date: NaiveDate) -> ScheduleResult<Vec<NaiveDate>> {
    let first = date
        .checked_sub_days(Days::new(u64::from(date.day0())))
        .ok_or_else(|| ScheduleError::DateOutOfRange(format!("month containing {}", date)))?;
    let start = week_start(first)
        .map_err(|_| ScheduleError::DateOutOfRange(format!("month containing {}", date)))?;
    consecutive_days(start, MONTH_GRID_CELLS)
        .map_err(|_| ScheduleError::DateOutOfRange(format!("month containing {}", date)))
}

/// `count` consecutive days from `start`; errors unless all of them exist.
fn consecutive_days(start: NaiveDate, count: usize) -> ScheduleResult<Vec<NaiveDate>> {
    let span = Days::new(count.saturating_sub(1) as u64);
    if start.checked_add_days(span).is_none() {
        let range = format!("{} days from {}", count, start);
        return Err(ScheduleError::DateOutOfRange(range));
    }
    Ok(start.iter_days().take(count).collect())
}

pub fn add_days(date: NaiveDate, days: i64) -> ScheduleResult<NaiveDate> {
    let amount = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(amount)
    } else {
        date.checked_sub_days(amount)
    };
    shifted.ok_or_else(|| ScheduleError::DateOutOfRange(format!("{} {:+} days", date, days)))
}

pub fn add_weeks(date: NaiveDate, weeks: i64) -> ScheduleResult<NaiveDate> {
    let days = weeks
        .checked_mul(7)
        .ok_or_else(|| ScheduleError::DateOutOfRange(format!("{} {:+} weeks", date, weeks)))?;
    add_days(date, days)
}

/// Shift by whole months. Days past the end of the target month clamp to
/// its last day (Jan 31 + 1 month is Feb 28 or 29).
pub fn add_months(date: NaiveDate, months: i32) -> ScheduleResult<NaiveDate> {
    let amount = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(amount)
    } else {
        date.checked_sub_months(amount)
    };
    shifted.ok_or_else(|| ScheduleError::DateOutOfRange(format!("{} {:+} months", date, months)))
}

/// Whether `date` is today on the local clock.
pub fn is_today(date: NaiveDate) -> bool {
    date == Local::now().date_naive()
}

/// Whether `day` belongs to the same month (and year) as `anchor`.
pub fn is_current_month(day: NaiveDate, anchor: NaiveDate) -> bool {
    day.year() == anchor.year() && day.month() == anchor.month()
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(s.to_string()))
}

/// Parse HH:MM
pub fn parse_time(s: &str) -> ScheduleResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| ScheduleError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn consecutive(days: &[NaiveDate]) -> bool {
        days.windows(2).all(|w| w[0].succ_opt() == Some(w[1]))
    }

    #[test]
    fn week_days_start_on_sunday() {
        // 2025-01-22 is a Wednesday
        let days = week_days(date(2025, 1, 22)).unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2025, 1, 19));
        assert_eq!(days[0].weekday(), Weekday::Sun);
        assert_eq!(days[6], date(2025, 1, 25));
        assert!(consecutive(&days));
    }

    #[test]
    fn week_days_for_a_sunday_starts_there() {
        let days = week_days(date(2025, 1, 19)).unwrap();
        assert_eq!(days[0], date(2025, 1, 19));
    }

    #[test]
    fn week_days_across_year_boundary() {
        let days = week_days(date(2025, 1, 1)).unwrap();
        assert_eq!(days[0], date(2024, 12, 29));
        assert!(days.contains(&date(2025, 1, 1)));
    }

    #[test]
    fn month_days_grid_shape() {
        for month in 1..=12 {
            let anchor = date(2025, month, 15);
            let days = month_days(anchor).unwrap();
            let first = date(2025, month, 1);

            assert_eq!(days.len(), MONTH_GRID_CELLS);
            assert_eq!(days[0].weekday(), Weekday::Sun);
            assert!(consecutive(&days));

            let index = days.iter().position(|d| *d == first).unwrap();
            assert_eq!(index as u32, first.weekday().num_days_from_sunday());
        }
    }

    #[test]
    fn month_days_when_first_is_sunday() {
        // June 1st 2025 is a Sunday
        let days = month_days(date(2025, 6, 30)).unwrap();
        assert_eq!(days[0], date(2025, 6, 1));
        assert_eq!(days[41], date(2025, 7, 12));
    }

    #[test]
    fn month_days_february_leap_year() {
        // Feb 1st 2024 is a Thursday
        let days = month_days(date(2024, 2, 29)).unwrap();
        assert_eq!(days[0], date(2024, 1, 28));
        assert_eq!(days[4], date(2024, 2, 1));
    }

    #[test]
    fn shifting_days_and_weeks() {
        let d = date(2025, 1, 20);
        assert_eq!(add_days(d, 1).unwrap(), date(2025, 1, 21));
        assert_eq!(add_days(d, -20).unwrap(), date(2024, 12, 31));
        assert_eq!(add_weeks(d, 2).unwrap(), date(2025, 2, 3));
        assert_eq!(add_weeks(d, -1).unwrap(), date(2025, 1, 13));
        // Input is untouched
        assert_eq!(d, date(2025, 1, 20));
    }

    #[test]
    fn shifting_months_clamps() {
        assert_eq!(add_months(date(2025, 1, 31), 1).unwrap(), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 3, 31), -1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_months(date(2025, 11, 15), 3).unwrap(), date(2026, 2, 15));
    }

    #[test]
    fn shifting_out_of_range() {
        assert!(matches!(
            add_days(NaiveDate::MAX, 1),
            Err(ScheduleError::DateOutOfRange(_))
        ));
        assert!(add_weeks(date(2025, 1, 1), i64::MAX).is_err());
        assert!(add_months(NaiveDate::MIN, -1).is_err());
    }

    #[test]
    fn current_month() {
        let anchor = date(2025, 1, 20);
        assert!(is_current_month(date(2025, 1, 1), anchor));
        assert!(!is_current_month(date(2024, 12, 31), anchor));
        assert!(!is_current_month(date(2024, 1, 20), anchor));
    }

    #[test]
    fn today() {
        let now = Local::now().date_naive();
        // Tolerate the clock crossing midnight between the two reads
        assert!(is_today(now) || is_today(now.succ_opt().unwrap()));
        assert!(!is_today(now.pred_opt().unwrap()));
    }

    #[test]
    fn week_and_month_at_range_ends() {
        assert!(matches!(
            week_days(NaiveDate::MIN),
            Err(ScheduleError::DateOutOfRange(_))
        ));
        assert!(matches!(
            week_days(NaiveDate::MAX),
            Err(ScheduleError::DateOutOfRange(_))
        ));
        assert!(matches!(
            month_days(NaiveDate::MIN),
            Err(ScheduleError::DateOutOfRange(_))
        ));
        assert!(matches!(
            month_days(NaiveDate::MAX),
            Err(ScheduleError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn full_windows_near_range_ends() {
        let last_sunday = week_start(NaiveDate::MAX).unwrap();
        let late = last_sunday.pred_opt().unwrap();
        assert_eq!(week_days(late).unwrap().len(), 7);

        let early = add_days(NaiveDate::MIN, 40).unwrap();
        let days = week_days(early).unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].weekday(), Weekday::Sun);
    }

    #[test]
    fn parse_helpers() {
        assert_eq!(parse_date("2025-01-20").unwrap(), date(2025, 1, 20));
        assert!(matches!(parse_date("20/01/2025"), Err(ScheduleError::InvalidDate(_))));
        assert_eq!(
            parse_time("09:15").unwrap(),
            NaiveTime::from_hms_opt(9, 15, 0).unwrap()
        );
        assert!(matches!(parse_time("25:00"), Err(ScheduleError::InvalidTime(_))));
    }
}
