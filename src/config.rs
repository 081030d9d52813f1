use crate::model::{Employee, Roster, Unavailability};
use crate::scheduler::Scheduler;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Entrée complète d'une planification : mois cible, roster, indisponibilités.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningConfig {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub employees: Roster,
    #[serde(default)]
    pub unavailable: Unavailability,
}

impl PlanningConfig {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            employees: Roster::default(),
            unavailable: Unavailability::default(),
        }
    }

    /// Jeu d'exemple : 2 responsables, 3 membres, novembre 2025.
    pub fn sample() -> Self {
        Self {
            year: 2025,
            month: 11,
            employees: Roster::new(vec![
                Employee::manager("ManagerA"),
                Employee::manager("ManagerB"),
                Employee::regular("MemberC"),
                Employee::regular("MemberD"),
                Employee::regular("MemberE"),
            ]),
            unavailable: Unavailability::new()
                .with("ManagerA", [1, 15])
                .with("MemberC", [8, 9]),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            bail!("month must be within 1..=12 (got {})", self.month);
        }
        let mut seen = HashSet::new();
        for e in self.employees.iter() {
            if e.name.trim().is_empty() {
                bail!("employee name cannot be empty");
            }
            if !seen.insert(e.name.as_str()) {
                bail!("duplicate employee name: {}", e.name);
            }
        }
        for (name, days) in &self.unavailable.days {
            if let Some(bad) = days.iter().find(|d| !(1..=31).contains(*d)) {
                bail!("unavailable day {bad} for {name} is outside 1..=31");
            }
        }

        #[cfg(feature = "logging")]
        {
            for name in self.unavailable.days.keys() {
                if !seen.contains(name.as_str()) {
                    tracing::warn!(%name, "unavailability listed for unknown employee");
                }
            }
            if self.employees.managers().next().is_none() {
                tracing::warn!("roster has no manager, planning will fail on the first weekend day");
            }
        }
        Ok(())
    }

    pub fn scheduler(&self) -> Scheduler {
        Scheduler::new(self.employees.clone(), self.unavailable.clone())
    }
}
