use crate::model::{Roster, ShiftPlan};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("invalid date: {year}-{month:02} is not a valid month")]
    InvalidDate { year: i32, month: u32 },
    #[error("{0}: no manager available, cannot staff this day")]
    NoAvailableManager(NaiveDate),
    #[error("{0}: no second member available, cannot staff this day")]
    NoAvailableSecondMember(NaiveDate),
    #[error("no entry for date {0} in plan")]
    UnknownDate(NaiveDate),
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("swap invalid: {0}")]
    SwapInvalid(&'static str),
}

/// Compteur de permanences par employé pour un run.
///
/// Initialisé explicitement à zéro pour chaque membre du roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentCounter {
    counts: BTreeMap<String, u32>,
}

impl AssignmentCounter {
    pub fn new(roster: &Roster) -> Self {
        let counts = roster.iter().map(|e| (e.name.clone(), 0)).collect();
        Self { counts }
    }

    /// Recompte les permanences d'un planning existant.
    pub fn from_plan(roster: &Roster, plan: &ShiftPlan) -> Self {
        let mut counter = Self::new(roster);
        for (_, assignment) in plan.iter() {
            for name in assignment.names() {
                counter.increment(name);
            }
        }
        counter
    }

    pub fn get(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, name: &str) {
        *self.counts.entry(name.to_owned()).or_insert(0) += 1;
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Écart entre le plus chargé et le moins chargé.
    pub fn spread(&self) -> u32 {
        let max = self.counts.values().max().copied().unwrap_or(0);
        let min = self.counts.values().min().copied().unwrap_or(0);
        max - min
    }
}

/// Résultat complet d'une allocation : planning + compteurs finaux.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub plan: ShiftPlan,
    pub counts: AssignmentCounter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    MissingDate,
    UnexpectedDate,
    SamePersonTwice,
    NotAManager,
    UnknownEmployee(String),
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub date: NaiveDate,
    pub kind: ViolationKind,
}
