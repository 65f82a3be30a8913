//! Entity type definitions

pub mod estimate;
pub mod model;
pub mod product;

pub use estimate::{CalcState, Estimate};
pub use model::{Model, Polynomial, Range};
pub use product::{IsoGrade, ParseGradeError, ParseProductError, Product};
