use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Rôle d'un employé : seul un `Manager` peut tenir la première place d'une permanence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Regular,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Regular => "regular",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manager" | "m" | "responsable" => Ok(Role::Manager),
            "regular" | "r" | "membre" => Ok(Role::Regular),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Employé (le nom sert d'identifiant)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub role: Role,
}

impl Employee {
    pub fn new<N: Into<String>>(name: N, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn manager<N: Into<String>>(name: N) -> Self {
        Self::new(name, Role::Manager)
    }

    pub fn regular<N: Into<String>>(name: N) -> Self {
        Self::new(name, Role::Regular)
    }

    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}

/// Liste ordonnée des employés. L'ordre sert à départager les égalités.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    pub employees: Vec<Employee>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn managers(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|e| e.is_manager())
    }

    pub fn find<'a>(&'a self, name: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.name == name)
    }
}

impl FromIterator<Employee> for Roster {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Jours du mois (1-31) où chaque employé ne peut pas travailler.
/// Un nom absent signifie « toujours disponible ».
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unavailability {
    pub days: BTreeMap<String, BTreeSet<u32>>,
}

impl Unavailability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute des jours bloqués pour `name` (cumulatif).
    pub fn block<N, I>(&mut self, name: N, days: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = u32>,
    {
        self.days.entry(name.into()).or_default().extend(days);
    }

    pub fn with<N, I>(mut self, name: N, days: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = u32>,
    {
        self.block(name, days);
        self
    }

    pub fn blocked(&self, name: &str, day: u32) -> bool {
        self.days.get(name).is_some_and(|set| set.contains(&day))
    }
}

/// Binôme d'un jour : `manager` est toujours un responsable, `second` n'importe qui d'autre.
/// Sérialisé comme la liste `[manager, second]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[String; 2]", into = "[String; 2]")]
pub struct DayAssignment {
    pub manager: String,
    pub second: String,
}

impl DayAssignment {
    pub fn new<A: Into<String>, B: Into<String>>(manager: A, second: B) -> Self {
        Self {
            manager: manager.into(),
            second: second.into(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.manager == name || self.second == name
    }

    pub fn names(&self) -> [&str; 2] {
        [self.manager.as_str(), self.second.as_str()]
    }
}

impl From<[String; 2]> for DayAssignment {
    fn from([manager, second]: [String; 2]) -> Self {
        Self { manager, second }
    }
}

impl From<DayAssignment> for [String; 2] {
    fn from(a: DayAssignment) -> Self {
        [a.manager, a.second]
    }
}

/// Planning du mois : date → binôme, en ordre chronologique.
/// Sérialisé en `{"YYYY-MM-DD": ["manager", "second"], ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftPlan {
    pub days: BTreeMap<NaiveDate, DayAssignment>,
}

impl ShiftPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, assignment: DayAssignment) {
        self.days.insert(date, assignment);
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayAssignment> {
        self.days.get(&date)
    }

    pub fn get_mut(&mut self, date: NaiveDate) -> Option<&mut DayAssignment> {
        self.days.get_mut(&date)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DayAssignment)> {
        self.days.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Dates où `name` est de permanence, à partir de `from` inclus.
    pub fn duties_of<'a>(
        &'a self,
        name: &'a str,
        from: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, &'a DayAssignment)> + 'a {
        self.days
            .range(from..)
            .filter(move |(_, a)| a.contains(name))
            .map(|(d, a)| (*d, a))
    }
}
