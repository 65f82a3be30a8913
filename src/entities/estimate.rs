//! Calculation results

use serde::Serialize;

use crate::entities::model::Range;

/// Which outcome a calculation ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcState {
    /// An estimate was produced
    Computed,
    /// At least one input failed validation
    Invalid,
    /// A required field has not been entered yet
    Incomplete,
    /// No model is registered for the (product, grade) pair
    Unmapped,
}

impl std::fmt::Display for CalcState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcState::Computed => write!(f, "computed"),
            CalcState::Invalid => write!(f, "invalid"),
            CalcState::Incomplete => write!(f, "incomplete"),
            CalcState::Unmapped => write!(f, "unmapped"),
        }
    }
}

/// Result of one viscosity calculation.
///
/// `estimated_viscosity` and `within_range` are only present in the
/// [`CalcState::Computed`] state. `model_label` and `range` are filled in
/// whenever a model exists for the selection, even if inputs are missing or
/// invalid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub state: CalcState,
    /// Unrounded estimate in cSt
    pub estimated_viscosity: Option<f64>,
    pub within_range: Option<bool>,
    pub model_label: Option<String>,
    pub range: Option<Range>,
    pub errors: Vec<String>,
}

impl Estimate {
    pub(crate) fn empty(state: CalcState) -> Self {
        Self {
            state,
            estimated_viscosity: None,
            within_range: None,
            model_label: None,
            range: None,
            errors: Vec::new(),
        }
    }

    pub fn is_computed(&self) -> bool {
        self.state == CalcState::Computed
    }
}
