use super::types::{CalculationResult, Pattern, Step, Strategy};
use crate::distribution::distribute;
use crate::error::SfResult;
use crate::verifier::{verify_decrease, Tally};
use tracing::debug;

pub(super) fn plan(start: u32, target: u32) -> SfResult<CalculationResult> {
    let dec = start - target;

    // Each k2tog eats two stitches and leaves one.
    let consumed_by_k2tog = 2 * dec as i64;
    let regular = start as i64 - consumed_by_k2tog;

    if regular < 0 {
        debug!(
            "decrease infeasible: {} k2tog need {} stitches, have {}",
            dec, consumed_by_k2tog, start
        );
        return Ok(CalculationResult::Error {
            message: format!(
                "Cannot decrease from {} to {}: would need {} decreases, but that requires at least {} stitches. Maximum decreases possible: {}.",
                start,
                target,
                dec,
                consumed_by_k2tog,
                start / 2
            ),
        });
    }

    let pattern = if regular == 0 {
        all_k2tog(start, target, dec)
    } else {
        // regular < start, so it fits back into u32
        even(start, target, dec, regular as u32)?
    };

    Ok(CalculationResult::Decrease(pattern))
}

fn all_k2tog(start: u32, target: u32, dec: u32) -> Pattern {
    debug!("all k2tog: {} decreases", dec);

    let steps: Vec<Step> = (0..dec).map(|_| Step::decrease(0)).collect();
    let tally = Tally::from_steps(&steps);

    Pattern {
        strategy: Strategy::AllK2tog,
        summary: format!(
            "Decrease {} stitches ({} \u{2192} {}) \u{2014} all k2tog",
            dec, start, target
        ),
        verify: verify_decrease(tally.knit, tally.actions, start, target),
        steps,
    }
}

fn even(start: u32, target: u32, dec: u32, regular: u32) -> SfResult<Pattern> {
    debug!("even decrease: {} plain stitches across {} groups", regular, dec);

    let segments = distribute(regular, dec)?;
    let steps: Vec<Step> = segments.iter().map(|&k| Step::decrease(k)).collect();
    let tally = Tally::from_steps(&steps);

    Ok(Pattern {
        strategy: Strategy::EvenDecrease,
        summary: format!(
            "Decrease {} stitches evenly ({} \u{2192} {})",
            dec, start, target
        ),
        verify: verify_decrease(tally.knit, tally.actions, start, target),
        steps,
    })
}
