use super::types::{SchedError, Violation, ViolationKind};
use super::util::is_available;
use crate::calendar::weekend_days;
use crate::model::{DayAssignment, Roster, ShiftPlan, Unavailability};
use chrono::{Datelike, NaiveDate};

/// Vérifie un planning contre les règles dures du mois.
pub fn check_plan(
    roster: &Roster,
    unavailability: &Unavailability,
    plan: &ShiftPlan,
    year: i32,
    month: u32,
) -> Result<Vec<Violation>, SchedError> {
    let expected = weekend_days(year, month)?;
    let mut out = Vec::new();

    for date in &expected {
        if plan.get(*date).is_none() {
            out.push(Violation {
                date: *date,
                kind: ViolationKind::MissingDate,
            });
        }
    }

    for (date, assignment) in plan.iter() {
        if !expected.contains(date) {
            out.push(Violation {
                date: *date,
                kind: ViolationKind::UnexpectedDate,
            });
        }
        out.extend(
            check_day(roster, unavailability, *date, assignment)
                .into_iter()
                .map(|kind| Violation { date: *date, kind }),
        );
    }

    out.sort_by_key(|v| v.date);
    Ok(out)
}

/// Règles d'une seule journée : deux personnes distinctes, connues,
/// disponibles, la première étant responsable.
pub(super) fn check_day(
    roster: &Roster,
    unavailability: &Unavailability,
    date: NaiveDate,
    assignment: &DayAssignment,
) -> Vec<ViolationKind> {
    let mut out = Vec::new();

    if assignment.manager == assignment.second {
        out.push(ViolationKind::SamePersonTwice);
    }

    match roster.find(&assignment.manager) {
        Some(e) if !e.is_manager() => out.push(ViolationKind::NotAManager),
        Some(_) => {}
        None => out.push(ViolationKind::UnknownEmployee(assignment.manager.clone())),
    }
    if roster.find(&assignment.second).is_none() {
        out.push(ViolationKind::UnknownEmployee(assignment.second.clone()));
    }

    for name in assignment.names() {
        if !is_available(name, date.day(), unavailability) {
            out.push(ViolationKind::Unavailable(name.to_string()));
        }
    }

    out
}
