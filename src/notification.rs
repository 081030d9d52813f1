use crate::model::{DayAssignment, Employee, Roster, ShiftPlan};
use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, TimeDelta};

/// Représente un rappel généré pour un employé.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub name: String,
    pub duty_date: NaiveDate,
    pub notice_on: NaiveDate,
    pub content: String,
}

/// Permet de customiser le rendu du message (texte, SMS, etc.).
pub trait ReminderRenderer {
    fn render(
        &self,
        employee: &Employee,
        date: NaiveDate,
        assignment: &DayAssignment,
        notice_on: NaiveDate,
    ) -> String;
}

/// Gabarit texte simple destiné à un futur mail/SMS.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReminder;

impl ReminderRenderer for TextReminder {
    fn render(
        &self,
        employee: &Employee,
        date: NaiveDate,
        assignment: &DayAssignment,
        notice_on: NaiveDate,
    ) -> String {
        let partner = if assignment.manager == employee.name {
            &assignment.second
        } else {
            &assignment.manager
        };
        format!(
            "Bonjour {name},\n\nTu es de permanence le {day} {date}, avec {partner}.\nCe message est généré le {notice}.\n",
            name = employee.name,
            day = date.format("%A"),
            date = date,
            partner = partner,
            notice = notice_on
        )
    }
}

/// Prépare un rappel pour la prochaine permanence de `name` à partir de `today`.
pub fn prepare_reminder(
    roster: &Roster,
    plan: &ShiftPlan,
    name: &str,
    days_before: i64,
    today: NaiveDate,
    renderer: &dyn ReminderRenderer,
) -> Result<Reminder> {
    if days_before < 0 {
        bail!("days_before must not be negative");
    }

    let employee = roster
        .find(name)
        .with_context(|| format!("unknown employee: {name}"))?;

    let Some((date, assignment)) = plan.duties_of(name, today).next() else {
        bail!("no upcoming duty found for {name}");
    };

    let notice_on = TimeDelta::try_days(days_before)
        .and_then(|d| date.checked_sub_signed(d))
        .context("days_before out of range")?;
    let content = renderer.render(employee, date, assignment, notice_on);
    Ok(Reminder {
        name: employee.name.clone(),
        duty_date: date,
        notice_on,
        content,
    })
}
