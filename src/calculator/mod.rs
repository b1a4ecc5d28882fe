mod decrease;
mod increase;
pub mod types;

pub use self::types::{Action, CalculationResult, Pattern, Step, Strategy};
use crate::error::InputError;
use crate::validation::{StitchCounts, MAX_STITCHES};
use std::cmp::Ordering;
use tracing::{debug, error};

/// Plans an even increase or decrease from `start` stitches to `target` stitches.
///
/// Both counts are expected to be positive and at most `MAX_STITCHES`; values
/// outside that range come back as `CalculationResult::Error`. Infeasible
/// decreases (more k2tog than stitch pairs) are reported the same way.
pub fn calculate(start: u32, target: u32) -> CalculationResult {
    if start == 0 || target == 0 {
        return CalculationResult::Error {
            message: InputError::NotPositive.to_string(),
        };
    }

    if start > MAX_STITCHES || target > MAX_STITCHES {
        return CalculationResult::Error {
            message: InputError::TooLarge { max: MAX_STITCHES }.to_string(),
        };
    }

    let outcome = match target.cmp(&start) {
        Ordering::Equal => {
            debug!("{} -> {}: no change", start, target);
            return CalculationResult::None;
        }
        Ordering::Greater => increase::plan(start, target),
        Ordering::Less => decrease::plan(start, target),
    };

    match outcome {
        Ok(result) => {
            if let Some(verify) = result.verification() {
                if !verify.ok {
                    error!(
                        "Generated pattern for {} -> {} failed its own check: {}",
                        start, target, verify.text
                    );
                }
            }
            result
        }
        Err(e) => CalculationResult::Error {
            message: e.to_string(),
        },
    }
}

pub fn calculate_counts(counts: StitchCounts) -> CalculationResult {
    calculate(counts.start, counts.target)
}
