use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate, Weekday};

/// Premier jour du mois et premier jour du mois suivant (borne exclusive).
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), SchedError> {
    let invalid = || SchedError::InvalidDate { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    Ok((first, next))
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Samedis et dimanches du mois, en ordre chronologique.
///
/// Échoue avec [`SchedError::InvalidDate`] si `month` n'est pas dans 1..=12.
pub fn weekend_days(year: i32, month: u32) -> Result<Vec<NaiveDate>, SchedError> {
    let (mut current, next) = month_bounds(year, month)?;
    let mut days = Vec::with_capacity(10);
    while current < next {
        if is_weekend(current) {
            days.push(current);
        }
        current = current
            .succ_opt()
            .ok_or(SchedError::InvalidDate { year, month })?;
    }
    Ok(days)
}
