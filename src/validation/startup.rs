//! Startup validation of the whole game catalog.

use crate::core::Phase;
use crate::games::{
    FuckMarryKillPhase, NeverHaveIEverPhase, TrueFalsePhase, TruthOrDarePhase, WhatIfPhase,
    WouldYouRatherPhase,
};
use crate::validation::rules::check_table;
use crate::validation::violations::{GameReport, StartupError};

fn report<P: Phase>() -> Option<GameReport> {
    check_table::<P>().err().map(|violations| GameReport {
        game: P::GAME,
        violations,
    })
}

/// Validate every game's transition table.
///
/// Meant to run once at process start; a failure here is a programming
/// error in a table declaration, never a per-session condition.
pub fn validate_catalog() -> Result<(), StartupError> {
    let reports: Vec<GameReport> = [
        report::<NeverHaveIEverPhase>(),
        report::<WouldYouRatherPhase>(),
        report::<TruthOrDarePhase>(),
        report::<FuckMarryKillPhase>(),
        report::<TrueFalsePhase>(),
        report::<WhatIfPhase>(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if reports.is_empty() {
        tracing::info!("all game tables validated");
        Ok(())
    } else {
        for report in &reports {
            tracing::error!(
                game = report.game,
                violations = report.violations.len(),
                "invalid transition table"
            );
        }
        Err(StartupError::InvalidTables(reports))
    }
}
