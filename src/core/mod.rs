//! Core module - the viscosity model engine and configuration

pub mod config;
pub mod conformance;
pub mod engine;
pub mod range;
pub mod registry;
pub mod selection;
pub mod validation;

pub use config::{Config, ConfigError};
pub use conformance::{within_range, Verdict};
pub use engine::{compute, evaluate};
pub use range::{range_for, resolve_range, RangeSource};
pub use registry::{model_for, models, models_for_product};
pub use selection::reconcile;
pub use validation::{input_errors, validate, Field, InputError, MAX_TREAT_RATE};
