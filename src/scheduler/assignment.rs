use super::types::{Allocation, AssignmentCounter, SchedError};
use super::util::{is_available, least_assigned};
use crate::calendar::weekend_days;
use crate::model::{DayAssignment, Employee, Roster, ShiftPlan, Unavailability};
use chrono::Datelike;

/// Construit le planning du mois, date par date, en ordre chronologique.
///
/// Pour chaque samedi/dimanche : le responsable disponible le moins chargé,
/// puis le membre disponible le moins chargé parmi les autres. Les égalités
/// sont départagées par l'ordre du roster. Le premier jour infaisable
/// interrompt tout le run, aucun planning partiel n'est rendu.
pub fn allocate(
    roster: &Roster,
    year: i32,
    month: u32,
    unavailability: &Unavailability,
) -> Result<Allocation, SchedError> {
    let dates = weekend_days(year, month)?;
    let mut counts = AssignmentCounter::new(roster);
    let mut plan = ShiftPlan::new();

    for date in dates {
        let day = date.day();

        let available_all: Vec<&Employee> = roster
            .iter()
            .filter(|e| is_available(&e.name, day, unavailability))
            .collect();
        let available_managers: Vec<&Employee> = available_all
            .iter()
            .copied()
            .filter(|e| e.is_manager())
            .collect();

        let first = least_assigned(&available_managers, &counts)
            .ok_or(SchedError::NoAvailableManager(date))?;

        let second_candidates: Vec<&Employee> = available_all
            .iter()
            .copied()
            .filter(|e| e.name != first.name)
            .collect();
        let second = least_assigned(&second_candidates, &counts)
            .ok_or(SchedError::NoAvailableSecondMember(date))?;

        #[cfg(feature = "logging")]
        tracing::debug!(%date, first = %first.name, second = %second.name, "day staffed");

        plan.insert(date, DayAssignment::new(&first.name, &second.name));
        counts.increment(&first.name);
        counts.increment(&second.name);
    }

    #[cfg(feature = "logging")]
    tracing::info!(
        year,
        month,
        days = plan.len(),
        spread = counts.spread(),
        "month planned"
    );

    Ok(Allocation { plan, counts })
}

pub fn build_shift(
    roster: &Roster,
    year: i32,
    month: u32,
    unavailability: &Unavailability,
) -> Result<ShiftPlan, SchedError> {
    allocate(roster, year, month, unavailability).map(|a| a.plan)
}
