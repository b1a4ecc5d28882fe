use crate::error::InputError;
use serde::Serialize;

/// Largest stitch count accepted. One step is built per group, so this bounds memory.
pub const MAX_STITCHES: u32 = 1_000_000;

/// A validated start/target pair, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StitchCounts {
    pub start: u32,
    pub target: u32,
}

/// Checks the two raw form values, in order: present, whole, positive, in range.
pub fn validate(raw_start: &str, raw_target: &str) -> Result<StitchCounts, InputError> {
    let raw_start = raw_start.trim();
    let raw_target = raw_target.trim();

    if raw_start.is_empty() || raw_target.is_empty() {
        return Err(InputError::Missing);
    }

    let start = parse_whole(raw_start).ok_or(InputError::NotWhole)?;
    let target = parse_whole(raw_target).ok_or(InputError::NotWhole)?;

    if start <= 0 || target <= 0 {
        return Err(InputError::NotPositive);
    }

    let max = MAX_STITCHES;
    if start > max as i128 || target > max as i128 {
        return Err(InputError::TooLarge { max });
    }

    Ok(StitchCounts {
        start: start as u32,
        target: target as u32,
    })
}

/// Parses a mathematical integer. "12" and "12.0" both qualify, "1.5" does not.
fn parse_whole(s: &str) -> Option<i128> {
    if let Ok(n) = s.parse::<i128>() {
        return Some(n);
    }

    let f = s.parse::<f64>().ok()?;
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    // Saturates; anything this large is rejected as out of range anyway.
    Some(f as i128)
}
