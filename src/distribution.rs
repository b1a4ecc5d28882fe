use crate::error::{SfResult, StitchError};
use serde::Serialize;
use std::ops::Index;

/// An ordered split of `total` units into `groups` segments.
///
/// Every segment is either `total / groups` or one more than that, and the
/// larger segments are interleaved by accumulated remainder rather than
/// bunched at either end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    segments: Vec<u32>,
}

impl Distribution {
    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.segments.iter()
    }

    /// Sum of all segments, widened so large splits never wrap.
    pub fn total(&self) -> u64 {
        self.segments.iter().map(|&s| s as u64).sum()
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.segments
    }
}

impl Index<usize> for Distribution {
    type Output = u32;

    fn index(&self, idx: usize) -> &u32 {
        &self.segments[idx]
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Spreads `total` indivisible units across `groups` buckets, Bresenham style.
///
/// After `k` positions exactly `floor(k * (total % groups) / groups)` of the
/// emitted segments are the larger `base + 1` size.
pub fn distribute(total: u32, groups: u32) -> SfResult<Distribution> {
    if groups == 0 {
        return Err(StitchError::InvalidArgument(format!(
            "cannot distribute {} across zero groups",
            total
        )));
    }

    let base = total / groups;
    let remainder = (total % groups) as u64;
    let groups_wide = groups as u64;

    // error < 2 * groups at all times, which only fits in u64
    let mut error: u64 = 0;
    let mut segments = Vec::with_capacity(groups as usize);

    for _ in 0..groups {
        error += remainder;
        if error >= groups_wide {
            segments.push(base + 1);
            error -= groups_wide;
        } else {
            segments.push(base);
        }
    }

    Ok(Distribution { segments })
}
