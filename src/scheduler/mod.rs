mod assignment;
mod conflicts;
mod mutate;
mod types;
mod util;

pub use assignment::{allocate, build_shift};
pub use conflicts::check_plan;
pub use types::{Allocation, AssignmentCounter, SchedError, Violation, ViolationKind};
pub use util::is_available;

use crate::model::{Roster, ShiftPlan, Unavailability};
use chrono::NaiveDate;

/// Scheduler : un roster et ses indisponibilités, prêts à planifier un mois.
#[derive(Debug, Default, Clone)]
pub struct Scheduler {
    roster: Roster,
    unavailability: Unavailability,
}

impl Scheduler {
    pub fn new(roster: Roster, unavailability: Unavailability) -> Self {
        Self {
            roster,
            unavailability,
        }
    }

    pub fn allocate(&self, year: i32, month: u32) -> Result<Allocation, SchedError> {
        assignment::allocate(&self.roster, year, month, &self.unavailability)
    }

    pub fn plan_month(&self, year: i32, month: u32) -> Result<ShiftPlan, SchedError> {
        assignment::build_shift(&self.roster, year, month, &self.unavailability)
    }

    pub fn check(
        &self,
        plan: &ShiftPlan,
        year: i32,
        month: u32,
    ) -> Result<Vec<Violation>, SchedError> {
        conflicts::check_plan(&self.roster, &self.unavailability, plan, year, month)
    }

    pub fn replace(
        &self,
        plan: &mut ShiftPlan,
        date: NaiveDate,
        out: &str,
        with: &str,
    ) -> Result<(), SchedError> {
        mutate::replace(&self.roster, &self.unavailability, plan, date, out, with)
    }
}
