//! viscalc: in-service viscosity calculator
//!
//! Estimates the viscosity at 40 °C of a lubricant after blending in fresh
//! additive at a given treat rate, and checks the estimate against the
//! nominal band for the product's ISO VG grade.
//!
//! The engine in [`core`] is pure and synchronous; [`cli`] is the
//! command-line front end.

pub mod cli;
pub mod core;
pub mod entities;
