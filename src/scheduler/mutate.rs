use super::conflicts::check_day;
use super::types::{SchedError, ViolationKind};
use crate::model::{DayAssignment, Roster, ShiftPlan, Unavailability};
use chrono::NaiveDate;

/// Remplace `out` par `with` sur la journée `date`.
///
/// `with` reprend la place exacte de `out` : s'il remplace le responsable, il
/// doit lui-même être responsable. Le planning n'est modifié que si la
/// journée résultante respecte toutes les règles.
pub fn replace(
    roster: &Roster,
    unavailability: &Unavailability,
    plan: &mut ShiftPlan,
    date: NaiveDate,
    out: &str,
    with: &str,
) -> Result<(), SchedError> {
    if roster.find(out).is_none() {
        return Err(SchedError::UnknownEmployee(out.to_string()));
    }
    if roster.find(with).is_none() {
        return Err(SchedError::UnknownEmployee(with.to_string()));
    }

    let current = plan.get(date).ok_or(SchedError::UnknownDate(date))?;
    let candidate = if current.manager == out {
        DayAssignment::new(with, current.second.as_str())
    } else if current.second == out {
        DayAssignment::new(current.manager.as_str(), with)
    } else {
        return Err(SchedError::SwapInvalid("person not on duty that day"));
    };

    let problems = check_day(roster, unavailability, date, &candidate);
    if let Some(kind) = problems.first() {
        return Err(SchedError::SwapInvalid(match kind {
            ViolationKind::SamePersonTwice => "replacement already on duty that day",
            ViolationKind::NotAManager => "replacement must be a manager",
            ViolationKind::Unavailable(_) => "replacement unavailable that day",
            _ => "replacement breaks staffing rules",
        }));
    }

    if let Some(slot) = plan.get_mut(date) {
        *slot = candidate;
    }
    Ok(())
}
