use super::types::{CalculationResult, Pattern, Step, Strategy};
use crate::distribution::distribute;
use crate::error::SfResult;
use crate::verifier::{verify_increase, Tally};
use tracing::debug;

pub(super) fn plan(start: u32, target: u32) -> SfResult<CalculationResult> {
    let inc = target - start;

    // inc == start still counts as dense
    let pattern = if inc >= start {
        dense(start, target, inc)?
    } else {
        even(start, target, inc)?
    };

    Ok(CalculationResult::Increase(pattern))
}

/// Fewer increases than stitches: spread the existing stitches between the increases.
fn even(start: u32, target: u32, inc: u32) -> SfResult<Pattern> {
    debug!("even increase: {} stitches across {} groups", start, inc);

    let segments = distribute(start, inc)?;
    let steps: Vec<Step> = segments.iter().map(|&k| Step::increase(k, 1)).collect();

    let tally = Tally::from_steps(&steps);
    let verify = verify_increase(tally.knit, tally.actions, start, target);

    Ok(Pattern {
        strategy: Strategy::EvenIncrease,
        summary: format!(
            "Increase {} stitches evenly ({} \u{2192} {})",
            inc, start, target
        ),
        steps,
        verify,
    })
}

/// At least one increase per stitch: spread the increases across the stitches instead.
fn dense(start: u32, target: u32, inc: u32) -> SfResult<Pattern> {
    debug!("dense increase: {} increases across {} stitches", inc, start);

    let segments = distribute(inc, start)?;
    let steps: Vec<Step> = segments.iter().map(|&a| Step::increase(1, a)).collect();

    let tally = Tally::from_steps(&steps);
    let verify = verify_increase(tally.knit, tally.actions, start, target);

    Ok(Pattern {
        strategy: Strategy::DenseIncrease,
        summary: format!(
            "Increase {} stitches evenly ({} \u{2192} {}) \u{2014} dense increase",
            inc, start, target
        ),
        steps,
        verify,
    })
}
