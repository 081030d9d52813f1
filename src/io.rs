use crate::model::{Employee, Role, Roster, ShiftPlan, Unavailability};
use crate::scheduler::AssignmentCounter;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV: header `name,role[,unavailable]`
/// où `unavailable` liste des jours du mois séparés par `;` (ex. `1;15`).
pub fn import_employees_csv<P: AsRef<Path>>(
    path: P,
) -> anyhow::Result<(Vec<Employee>, Unavailability)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut employees = Vec::new();
    let mut unavailable = Unavailability::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let role = rec.get(1).context("missing role")?.trim();
        if name.is_empty() {
            bail!("invalid employee row (empty name)");
        }
        let role: Role = role
            .parse()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid role for {name}"))?;
        if let Some(days) = rec.get(2) {
            let days = days.trim();
            if !days.is_empty() {
                let days = parse_days(days)
                    .with_context(|| format!("invalid unavailable days for {name}"))?;
                unavailable.block(name, days);
            }
        }
        employees.push(Employee::new(name, role));
    }
    Ok((employees, unavailable))
}

/// Liste de jours du mois : `1;15`, `1,15` ou `1 15`.
pub fn parse_days(raw: &str) -> anyhow::Result<Vec<u32>> {
    raw.split([';', ',', ' '])
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let day: u32 = chunk
                .parse()
                .with_context(|| format!("not a day number: {chunk}"))?;
            if !(1..=31).contains(&day) {
                bail!("day {day} is outside 1..=31");
            }
            Ok(day)
        })
        .collect()
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_plan_json<P: AsRef<Path>>(path: P, plan: &ShiftPlan) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(plan)?;
    fs::write(path, s)?;
    Ok(())
}

pub fn load_plan_json<P: AsRef<Path>>(path: P) -> anyhow::Result<ShiftPlan> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing plan {}", path.display()))
}

/// Export CSV du planning: header `date,manager,second`
pub fn export_plan_csv<P: AsRef<Path>>(path: P, plan: &ShiftPlan) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "manager", "second"])?;
    for (date, a) in plan.iter() {
        let date = date.to_string();
        w.write_record([date.as_str(), a.manager.as_str(), a.second.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Rendu texte : une ligne par jour.
pub fn render_plan(plan: &ShiftPlan) -> String {
    let mut out = String::new();
    for (date, a) in plan.iter() {
        let _ = writeln!(
            out,
            "{} {} | {} + {}",
            date,
            date.format("%a"),
            a.manager,
            a.second
        );
    }
    out
}

/// Rendu texte des compteurs, dans l'ordre du roster.
pub fn render_counts(roster: &Roster, counts: &AssignmentCounter) -> String {
    let mut out = String::new();
    for e in roster.iter() {
        let _ = writeln!(out, "{} ({}): {}", e.name, e.role, counts.get(&e.name));
    }
    let _ = writeln!(out, "spread: {}", counts.spread());
    out
}
