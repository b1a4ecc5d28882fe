pub mod calc;
pub mod export;
pub mod work;

use crate::reports;
use clap::Args;
use stitchforge::api;
use stitchforge::calculator::CalculationResult;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// The generated pattern failed its own recount.
pub const EXIT_UNVERIFIED: i32 = 2;

#[derive(Args, Debug, Clone)]
pub struct CountArgs {
    /// Stitches currently on the needle
    #[arg(allow_hyphen_values = true)]
    pub start: String,

    /// Stitches wanted after this row
    #[arg(allow_hyphen_values = true)]
    pub target: String,
}

impl CountArgs {
    pub fn submit(&self) -> Result<CalculationResult, String> {
        api::submit(&self.start, &self.target)
    }
}

pub fn exit_code(submission: &Result<CalculationResult, String>) -> i32 {
    match submission {
        Err(_) | Ok(CalculationResult::Error { .. }) => EXIT_FAILURE,
        Ok(result) => match result.verification() {
            Some(v) if !v.ok => EXIT_UNVERIFIED,
            _ => EXIT_OK,
        },
    }
}

/// Prints input and feasibility errors. Returns the result only when there is something to show.
pub fn plan_or_report(counts: &CountArgs) -> Result<CalculationResult, i32> {
    let submission = counts.submit();
    match submission {
        Err(message) => {
            reports::print_error(&message);
            Err(EXIT_FAILURE)
        }
        Ok(CalculationResult::Error { message }) => {
            reports::print_error(&message);
            Err(EXIT_FAILURE)
        }
        Ok(result) => Ok(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stitchforge::calculator::{calculate, Pattern, Step, Strategy};
    use stitchforge::verifier::VerificationResult;

    fn miscounted() -> CalculationResult {
        CalculationResult::Increase(Pattern {
            strategy: Strategy::EvenIncrease,
            summary: "Increase 2 stitches evenly (2 → 4)".to_string(),
            steps: vec![Step::increase(2, 1)],
            verify: VerificationResult {
                ok: false,
                text: "Verification: 2 knit + 1 added = 3 ❌ MISMATCH (expected 4)".to_string(),
            },
        })
    }

    #[test]
    fn exit_code_flags_unverified_patterns() {
        assert_eq!(exit_code(&Ok(miscounted())), EXIT_UNVERIFIED);
    }

    #[test]
    fn exit_code_for_ordinary_outcomes() {
        assert_eq!(exit_code(&Ok(calculate(8, 12))), EXIT_OK);
        assert_eq!(exit_code(&Ok(CalculationResult::None)), EXIT_OK);
        assert_eq!(exit_code(&Ok(calculate(4, 1))), EXIT_FAILURE);
        assert_eq!(
            exit_code(&Err("Please enter both values.".to_string())),
            EXIT_FAILURE
        );
    }
}
