//! Calculation pipeline: validate, look up, evaluate, check conformance

use tracing::debug;

use crate::core::conformance::within_range;
use crate::core::registry::model_for;
use crate::core::validation::{validate, Field};
use crate::entities::{CalcState, Estimate, IsoGrade, Model, Product};

/// Estimated viscosity (cSt) for `model` at `treat_rate` percent, starting
/// from `initial_viscosity`. Unrounded.
pub fn evaluate(model: &Model, treat_rate: f64, initial_viscosity: f64) -> f64 {
    model.polynomial.evaluate(treat_rate, initial_viscosity)
}

/// Run one calculation from raw text inputs.
///
/// Never fails: invalid, incomplete and unmapped requests are reported
/// through [`Estimate::state`].
pub fn compute(
    product: Product,
    grade: IsoGrade,
    initial_viscosity: &str,
    treat_rate: &str,
) -> Estimate {
    let model = model_for(product, grade);

    let mut estimate = Estimate::empty(CalcState::Incomplete);
    if let Some(model) = &model {
        estimate.model_label = Some(model.label.clone());
        estimate.range = Some(model.range);
    }

    let errors = validate(initial_viscosity, treat_rate);
    if !errors.is_empty() {
        estimate.state = CalcState::Invalid;
        estimate.errors = errors;
        return estimate;
    }

    let (Some(v0), Some(t)) = (
        Field::parse(initial_viscosity).value(),
        Field::parse(treat_rate).value(),
    ) else {
        return estimate;
    };

    let Some(model) = model else {
        debug!(%product, %grade, "no model registered for selection");
        estimate.state = CalcState::Unmapped;
        return estimate;
    };

    let value = evaluate(&model, t, v0);
    let within = within_range(value, &model.range);
    debug!(label = %model.label, t, v0, value, within, "evaluated");

    estimate.state = CalcState::Computed;
    estimate.estimated_viscosity = Some(value);
    estimate.within_range = Some(within);
    estimate
}
