#![forbid(unsafe_code)]
//! Permanence — planification des permanences du week-end sur un mois.
//!
//! - Samedis et dimanches du mois ciblé.
//! - Deux personnes par jour, dont au moins un responsable.
//! - Indisponibilités par jour du mois ; répartition gloutonne équilibrée.
//! - Échec immédiat sur le premier jour infaisable, jamais de planning partiel.

pub mod calendar;
pub mod config;
pub mod io;
pub mod model;
pub mod notification;
pub mod scheduler;
pub mod storage;

pub use calendar::weekend_days;
pub use config::PlanningConfig;
pub use model::{DayAssignment, Employee, Role, Roster, ShiftPlan, Unavailability};
pub use notification::{prepare_reminder, Reminder, ReminderRenderer, TextReminder};
pub use scheduler::{
    allocate, build_shift, check_plan, is_available, Allocation, AssignmentCounter, SchedError,
    Scheduler, Violation, ViolationKind,
};
pub use storage::{JsonStorage, Storage};
