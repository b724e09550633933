use std::io::Write;

use kin_core::self_check::{self, CheckOutcome};

/// Evaluate the known-answer scenarios, logging each one.
///
/// Fails if any scenario does not reproduce its expected value.
pub fn verify() -> anyhow::Result<()> {
    let outcomes = self_check::run();
    ensure_passed(&outcomes)
}

/// Run the check and print one line per scenario.
pub fn report<W: Write>(out: &mut W, decimals: usize) -> anyhow::Result<()> {
    let outcomes = self_check::run();
    for outcome in &outcomes {
        writeln!(out, "{}", describe(outcome, decimals))?;
    }
    ensure_passed(&outcomes)?;
    writeln!(out, "All {} checks passed", outcomes.len())?;
    Ok(())
}

fn ensure_passed(outcomes: &[CheckOutcome]) -> anyhow::Result<()> {
    let mut failed = 0usize;
    for outcome in outcomes {
        let kind = outcome.case.computation.kind();
        if outcome.passed() {
            tracing::debug!(%kind, expected = outcome.case.expected, "self-check passed");
        } else {
            failed += 1;
            tracing::error!(
                %kind,
                expected = outcome.case.expected,
                actual = ?outcome.actual,
                "self-check failed"
            );
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} self-checks failed", outcomes.len());
    }
    Ok(())
}

fn describe(outcome: &CheckOutcome, decimals: usize) -> String {
    let status = if outcome.passed() { "ok" } else { "FAILED" };
    let computation = &outcome.case.computation;
    match outcome.actual {
        Ok(actual) => format!(
            "[{status}] {} (expected {})",
            computation.substitution(actual, decimals),
            outcome.case.expected
        ),
        Err(error) => format!("[{status}] {}: {error}", computation.kind().label()),
    }
}
