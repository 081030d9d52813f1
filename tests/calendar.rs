#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use permanence::{weekend_days, SchedError};

#[test]
fn november_2025_has_ten_weekend_days() {
    let days: Vec<u32> = weekend_days(2025, 11)
        .unwrap()
        .iter()
        .map(|d| d.day())
        .collect();
    assert_eq!(days, vec![1, 2, 8, 9, 15, 16, 22, 23, 29, 30]);
}

#[test]
fn only_weekends_and_none_missing() {
    for year in [2023, 2024, 2025, 2100] {
        for month in 1..=12 {
            let days = weekend_days(year, month).unwrap();
            assert!(days
                .iter()
                .all(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun)));
            assert!(days.windows(2).all(|w| w[0] < w[1]));

            let expected: Vec<NaiveDate> = (1..=31)
                .filter_map(|d| NaiveDate::from_ymd_opt(year, month, d))
                .filter(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
                .collect();
            assert_eq!(days, expected, "{year}-{month}");
        }
    }
}

#[test]
fn december_stops_at_year_end() {
    let days = weekend_days(2025, 12).unwrap();
    assert_eq!(days.last(), Some(&NaiveDate::from_ymd_opt(2025, 12, 28).unwrap()));
    assert!(days.iter().all(|d| d.year() == 2025 && d.month() == 12));
}

#[test]
fn leap_february() {
    // 29 février 2020 : samedi
    let days = weekend_days(2020, 2).unwrap();
    assert_eq!(days.len(), 9);
    assert_eq!(days.last(), Some(&NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()));
}

#[test]
fn out_of_range_month_fails() {
    assert_eq!(
        weekend_days(2025, 0),
        Err(SchedError::InvalidDate { year: 2025, month: 0 })
    );
    assert_eq!(
        weekend_days(2025, 13),
        Err(SchedError::InvalidDate { year: 2025, month: 13 })
    );
}

#[test]
fn repeated_calls_agree() {
    assert_eq!(weekend_days(2024, 6).unwrap(), weekend_days(2024, 6).unwrap());
}
