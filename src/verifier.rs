use crate::calculator::{Action, Step};
use serde::Serialize;

/// Outcome of re-counting a generated pattern against its start and target.
///
/// `ok == false` means the calculator produced a wrong pattern. It is not a
/// user-facing error and callers must surface it loudly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    pub ok: bool,
    pub text: String,
}

/// Totals recomputed from a step sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub knit: u64,
    pub actions: u64,
}

impl Tally {
    pub fn from_steps(steps: &[Step]) -> Self {
        steps.iter().fold(Self::default(), |acc, s| Self {
            knit: acc.knit + s.knit as u64,
            actions: acc.actions + s.actions as u64,
        })
    }
}

pub fn verify_increase(knit: u64, added: u64, start: u32, target: u32) -> VerificationResult {
    let total = knit + added;
    let ok = knit == start as u64 && total == target as u64;

    let status = if ok {
        "\u{2705}".to_string()
    } else {
        format!("\u{274c} MISMATCH (expected {})", target)
    };

    VerificationResult {
        ok,
        text: format!(
            "Verification: {} knit + {} added = {} {}",
            knit, added, total, status
        ),
    }
}

pub fn verify_decrease(knit: u64, decreases: u64, start: u32, target: u32) -> VerificationResult {
    let consumed = knit + 2 * decreases;
    let produced = knit + decreases;
    let ok = consumed == start as u64 && produced == target as u64;

    let status = if ok {
        "\u{2705}".to_string()
    } else {
        format!(
            "\u{274c} MISMATCH (expected {} consumed, {} produced)",
            start, target
        )
    };

    VerificationResult {
        ok,
        text: format!(
            "Verification: {} knit + {} consumed by k2tog = {} stitches used, producing {} {}",
            knit,
            2 * decreases,
            consumed,
            produced,
            status
        ),
    }
}

/// Re-derives the verification for `steps` from scratch.
pub fn verify_steps(action: Action, steps: &[Step], start: u32, target: u32) -> VerificationResult {
    let tally = Tally::from_steps(steps);
    match action {
        Action::Increase => verify_increase(tally.knit, tally.actions, start, target),
        Action::Decrease => verify_decrease(tally.knit, tally.actions, start, target),
    }
}
