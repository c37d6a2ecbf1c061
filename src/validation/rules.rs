//! Validation rules for transition tables and content pools.
//!
//! Every rule runs and all violations are reported together, so a broken
//! table is fixed in one pass instead of one error at a time.

use crate::content::ContentItem;
use crate::core::{Phase, State};
use crate::validation::violations::{PoolViolation, TableViolation};
use std::collections::{BTreeMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Checked<E> = Validation<(), NonEmptyVec<E>>;

fn check(ok: bool, violation: impl FnOnce() -> TableViolation) -> Checked<TableViolation> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Validate the transition table of `P`, accumulating ALL violations.
///
/// Checks that every phase is declared once, every successor has its own
/// entry, the initial phase has no incoming edges, a terminal phase is
/// reachable from the initial phase, and no phase reachable from the
/// initial phase is stuck in a cycle with no way out.
pub fn validate_table<P: Phase>() -> Checked<TableViolation> {
    let table = P::table();
    let initial = P::INITIAL;
    let mut checks: Vec<Checked<TableViolation>> = Vec::new();

    let mut declared = HashSet::new();
    for phase in table.phases() {
        checks.push(check(declared.insert(phase), || {
            TableViolation::DuplicatePhase {
                phase: phase.name().to_string(),
            }
        }));
    }

    for (from, successors) in table.edges() {
        for to in successors.iter() {
            checks.push(check(declared.contains(to), || TableViolation::MissingPhase {
                from: from.name().to_string(),
                to: to.name().to_string(),
            }));
        }
    }

    checks.push(check(declared.contains(&initial), || {
        TableViolation::MissingInitial {
            initial: initial.name().to_string(),
        }
    }));

    for from in table.predecessors(initial) {
        checks.push(Validation::fail(TableViolation::InitialReentered {
            initial: initial.name().to_string(),
            from: from.name().to_string(),
        }));
    }

    checks.push(check(table.reaches_terminal(initial), || {
        TableViolation::NoReachableTerminal {
            initial: initial.name().to_string(),
        }
    }));

    for phase in table.reachable_from(initial) {
        checks.push(check(table.reaches_terminal(phase), || {
            TableViolation::Livelock {
                phase: phase.name().to_string(),
            }
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// [`validate_table`] as a `Result`.
pub fn check_table<P: Phase>() -> Result<(), Vec<TableViolation>> {
    into_result(validate_table::<P>())
}

/// Validate a content pool, accumulating ALL violations.
///
/// The default mode must have at least one item and ids must be unique
/// within each mode. The same id in two different modes is fine.
pub fn validate_pool<T: ContentItem>(
    modes: &BTreeMap<String, Vec<T>>,
    default_mode: &str,
) -> Checked<PoolViolation> {
    let mut checks: Vec<Checked<PoolViolation>> = Vec::new();

    let default_has_content = modes.get(default_mode).is_some_and(|items| !items.is_empty());
    checks.push(if default_has_content {
        Validation::success(())
    } else {
        Validation::fail(PoolViolation::EmptyDefaultPool {
            mode: default_mode.to_string(),
        })
    });

    for (mode, items) in modes {
        let mut seen = HashSet::new();
        for item in items {
            if !seen.insert(item.id()) {
                checks.push(Validation::fail(PoolViolation::DuplicateId {
                    mode: mode.clone(),
                    id: item.id().to_string(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// [`validate_pool`] as a `Result`.
pub fn check_pool<T: ContentItem>(
    modes: &BTreeMap<String, Vec<T>>,
    default_mode: &str,
) -> Result<(), Vec<PoolViolation>> {
    into_result(validate_pool(modes, default_mode))
}

fn into_result<E: Clone>(validation: Checked<E>) -> Result<(), Vec<E>> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Statement;

    crate::round_phases! {
        game: "Broken",
        enum BrokenPhase {
            Start = "START" => [Spin],
            Spin = "SPIN" => [Loop, Start],
            Loop = "LOOP" => [Spin],
            Orphan = "ORPHAN" => [Start, Ghost],
            Ghost = "GHOST" => [],
        }
        initial: Start,
        round_start: Spin,
    }

    crate::round_phases! {
        game: "Healthy",
        enum HealthyPhase {
            Start = "START" => [Play, Exit],
            Play = "PLAY" => [Play, Exit],
            Exit = "EXIT" => [],
        }
        initial: Start,
        round_start: Play,
    }

    #[test]
    fn healthy_table_passes() {
        assert!(validate_table::<HealthyPhase>().is_success());
        assert_eq!(check_table::<HealthyPhase>(), Ok(()));
    }

    #[test]
    fn broken_table_reports_all_violations() {
        let violations = check_table::<BrokenPhase>().unwrap_err();

        assert!(violations.contains(&TableViolation::InitialReentered {
            initial: "START".to_string(),
            from: "SPIN".to_string(),
        }));
        assert!(violations.contains(&TableViolation::InitialReentered {
            initial: "START".to_string(),
            from: "ORPHAN".to_string(),
        }));
        assert!(violations.contains(&TableViolation::NoReachableTerminal {
            initial: "START".to_string(),
        }));
        for phase in ["START", "SPIN", "LOOP"] {
            assert!(violations.contains(&TableViolation::Livelock {
                phase: phase.to_string(),
            }));
        }
        assert_eq!(violations.len(), 6);
    }

    #[test]
    fn pool_violations_accumulate() {
        let mut modes = BTreeMap::new();
        modes.insert(
            "couples".to_string(),
            vec![
                Statement::new("x", "one"),
                Statement::new("x", "two"),
                Statement::new("y", "three"),
                Statement::new("y", "four"),
            ],
        );

        match validate_pool(&modes, "original") {
            Validation::Failure(errors) => assert_eq!(errors.len(), 3),
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn valid_pool_passes() {
        let mut modes = BTreeMap::new();
        modes.insert("original".to_string(), vec![Statement::new("x", "one")]);
        assert_eq!(check_pool(&modes, "original"), Ok(()));
    }
}
