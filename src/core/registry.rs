//! Model registry - fitted viscosity polynomials per product and grade
//!
//! Coefficients come from offline regressions of measured viscosity against
//! treat rate and must be kept exactly as fitted. Each entry lists the
//! coefficients of `t`, `t²` and (optionally) `t³`.

use tracing::debug;

use crate::core::range::range_for;
use crate::entities::{IsoGrade, Model, Polynomial, Product};

struct ModelEntry {
    product: Product,
    grade: IsoGrade,
    polynomial: Polynomial,
}

const fn entry(product: Product, grade: IsoGrade, coefficients: &'static [f64]) -> ModelEntry {
    ModelEntry {
        product,
        grade,
        polynomial: Polynomial::new(coefficients),
    }
}

#[rustfmt::skip]
const MODELS: &[ModelEntry] = &[
    entry(Product::DeconHd,   IsoGrade::Vg220, &[-0.9478, 0.0512]),
    entry(Product::DeconHd,   IsoGrade::Vg320, &[1.5115, -0.9097, 0.0597]),
    entry(Product::DeconApac, IsoGrade::Vg32,  &[-0.2641, 0.0006, 0.0002]),
    entry(Product::DeconApac, IsoGrade::Vg46,  &[-0.9119, 0.0628, -0.0018]),
    entry(Product::DeconApac, IsoGrade::Vg68,  &[-1.1412, 0.0103, 0.0011]),
    entry(Product::DeconA,    IsoGrade::Vg32,  &[-0.3212, 0.0029]),
    entry(Product::DeconA,    IsoGrade::Vg46,  &[-3.6959, 1.2375, -0.0894]),
    entry(Product::DeconA,    IsoGrade::Vg68,  &[-2.1146, 0.0893, -0.0015]),
    entry(Product::Decon,     IsoGrade::Vg32,  &[-0.1258, 0.0029]),
    entry(Product::Decon,     IsoGrade::Vg46,  &[-0.3809, -0.0044]),
    entry(Product::Decon,     IsoGrade::Vg68,  &[-0.1359, -0.0112, 0.0001]),
];

impl ModelEntry {
    fn to_model(&self) -> Model {
        Model {
            product: self.product,
            grade: self.grade,
            label: Model::label_for(self.product, self.grade),
            polynomial: self.polynomial,
            range: range_for(self.product, self.grade),
        }
    }
}

/// Look up the model for a selection.
///
/// Returns `None` for pairs the product does not offer; callers are expected
/// to reconcile the selection first.
pub fn model_for(product: Product, grade: IsoGrade) -> Option<Model> {
    let model = MODELS
        .iter()
        .find(|m| m.product == product && m.grade == grade)
        .map(ModelEntry::to_model);
    debug!(%product, %grade, found = model.is_some(), "model lookup");
    model
}

/// Every registered model, in table order
pub fn models() -> Vec<Model> {
    MODELS.iter().map(ModelEntry::to_model).collect()
}

/// Registered models for one product, in grade order
pub fn models_for_product(product: Product) -> Vec<Model> {
    product
        .allowed_grades()
        .iter()
        .filter_map(|&grade| model_for(product, grade))
        .collect()
}
