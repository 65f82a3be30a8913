//! Conformance check against a nominal range

use serde::Serialize;

use crate::entities::Range;

/// True iff `range.min <= value <= range.max`
pub fn within_range(value: f64, range: &Range) -> bool {
    range.min <= value && value <= range.max
}

/// Conformance verdict for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Within,
    Outside,
}

impl Verdict {
    pub fn from_within(within: bool) -> Self {
        if within {
            Verdict::Within
        } else {
            Verdict::Outside
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Within => write!(f, "Within grade range"),
            Verdict::Outside => write!(f, "Outside nominal range"),
        }
    }
}
