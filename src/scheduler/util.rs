use super::types::AssignmentCounter;
use crate::model::{Employee, Unavailability};

/// `name` peut-il travailler le jour `day` du mois ?
pub fn is_available(name: &str, day: u32, unavailability: &Unavailability) -> bool {
    !unavailability.blocked(name, day)
}

/// Premier candidat (dans l'ordre donné) ayant le plus petit compteur.
pub(super) fn least_assigned<'a>(
    candidates: &[&'a Employee],
    counts: &AssignmentCounter,
) -> Option<&'a Employee> {
    let mut best: Option<(&'a Employee, u32)> = None;
    for &candidate in candidates {
        let count = counts.get(&candidate.name);
        match best {
            Some((_, best_count)) if best_count <= count => {}
            _ => best = Some((candidate, count)),
        }
    }
    best.map(|(e, _)| e)
}
