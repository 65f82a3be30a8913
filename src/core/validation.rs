//! Input validation for the raw text fields of a calculation

use thiserror::Error;

/// Upper bound for the treat rate, in percent
pub const MAX_TREAT_RATE: f64 = 100.0;

/// A user-correctable input problem. The `Display` text is what gets shown
/// to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Treat rate must be 0–100%.")]
    TreatRate,

    #[error("Initial viscosity must be > 0 cSt.")]
    InitialViscosity,
}

/// A text field after parsing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    /// Nothing entered yet
    Empty,
    /// A finite number
    Value(f64),
    /// Text that is not a finite number
    Invalid,
}

impl Field {
    /// Only the empty string counts as not entered; whitespace-only text is
    /// entered but not a number.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Field::Empty;
        }
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Field::Value(v),
            _ => Field::Invalid,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Field::Value(v) => Some(v),
            Field::Empty | Field::Invalid => None,
        }
    }

    /// Empty fields pass; anything else must parse and satisfy `accept`
    fn check(self, accept: impl Fn(f64) -> bool) -> bool {
        match self {
            Field::Empty => true,
            Field::Value(v) => accept(v),
            Field::Invalid => false,
        }
    }
}

/// Check both inputs and collect every problem found.
///
/// Both rules always run. The treat-rate error, when present, comes first.
pub fn input_errors(initial_viscosity: &str, treat_rate: &str) -> Vec<InputError> {
    let mut errors = Vec::new();
    if !Field::parse(treat_rate).check(|t| (0.0..=MAX_TREAT_RATE).contains(&t)) {
        errors.push(InputError::TreatRate);
    }
    if !Field::parse(initial_viscosity).check(|v| v > 0.0) {
        errors.push(InputError::InitialViscosity);
    }
    errors
}

/// [`input_errors`] rendered as user-facing messages. Empty means valid.
pub fn validate(initial_viscosity: &str, treat_rate: &str) -> Vec<String> {
    input_errors(initial_viscosity, treat_rate)
        .iter()
        .map(ToString::to_string)
        .collect()
}
