//! Regression models and conformance ranges

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::entities::product::{IsoGrade, Product};

/// Nominal acceptance band in cSt, inclusive at both ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// No conformance opinion: every non-negative value is accepted
    pub const UNBOUNDED: Range = Range {
        min: 0.0,
        max: f64::INFINITY,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True unless this is the open-ended fallback range
    pub fn is_bounded(&self) -> bool {
        self.max.is_finite()
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_bounded() {
            write!(f, "{}–{}", self.min, self.max)
        } else {
            write!(f, "{}–∞", self.min)
        }
    }
}

/// Estimated viscosity as a polynomial in treat rate `t` plus the initial
/// viscosity `v0`.
///
/// `coefficients[i]` multiplies `t^(i + 1)`. There is no constant term, so
/// the polynomial always returns `v0` unchanged at `t = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    coefficients: &'static [f64],
}

impl Polynomial {
    pub const fn new(coefficients: &'static [f64]) -> Self {
        Self { coefficients }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluate at treat rate `t` for initial viscosity `v0`.
    ///
    /// Terms are summed from the highest power down and `v0` is added last.
    pub fn evaluate(&self, t: f64, v0: f64) -> f64 {
        let shift = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .fold(0.0, |acc, (i, c)| acc + c * t.powi(i as i32 + 1));
        shift + v0
    }
}

fn superscript(power: usize) -> &'static str {
    match power {
        1 => "",
        2 => "²",
        3 => "³",
        _ => "ⁿ",
    }
}

impl std::fmt::Display for Polynomial {
    /// Renders as e.g. `0.0512·t² − 0.9478·t + v0`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (i, &c) in self.coefficients.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }
            let sign = match (first, c < 0.0) {
                (true, true) => "−",
                (true, false) => "",
                (false, true) => " − ",
                (false, false) => " + ",
            };
            write!(f, "{}{}·t{}", sign, c.abs(), superscript(i + 1))?;
            first = false;
        }
        if first {
            write!(f, "v0")
        } else {
            write!(f, " + v0")
        }
    }
}

impl Serialize for Polynomial {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Polynomial", 3)?;
        state.serialize_field("expression", &self.to_string())?;
        state.serialize_field("degree", &self.degree())?;
        state.serialize_field("coefficients", self.coefficients)?;
        state.end()
    }
}

/// Regression model registered for one (product, grade) pair
#[derive(Debug, Clone, Serialize)]
pub struct Model {
    pub product: Product,
    pub grade: IsoGrade,
    /// Display label, e.g. `Decon HD · ISO 220`
    pub label: String,
    pub polynomial: Polynomial,
    pub range: Range,
}

impl Model {
    pub fn label_for(product: Product, grade: IsoGrade) -> String {
        format!("{} · ISO {}", product, grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_quadratic() {
        let p = Polynomial::new(&[-0.9478, 0.0512]);
        let y = p.evaluate(10.0, 200.0);
        assert!((y - 195.642).abs() < 1e-9, "got {y}");
    }

    #[test]
    fn test_evaluate_zero_rate_is_identity() {
        let p = Polynomial::new(&[1.5115, -0.9097, 0.0597]);
        for v0 in [0.1, 30.0, 219.99, 1e6] {
            assert_eq!(p.evaluate(0.0, v0), v0);
        }
    }

    #[test]
    fn test_degree() {
        assert_eq!(Polynomial::new(&[-0.3212, 0.0029]).degree(), 2);
        assert_eq!(Polynomial::new(&[1.0, 2.0, 3.0]).degree(), 3);
    }

    #[test]
    fn test_polynomial_display() {
        insta::assert_snapshot!(
            Polynomial::new(&[-0.9119, 0.0628, -0.0018]).to_string(),
            @"−0.0018·t³ + 0.0628·t² − 0.9119·t + v0"
        );
        insta::assert_snapshot!(
            Polynomial::new(&[-0.1258, 0.0029]).to_string(),
            @"0.0029·t² − 0.1258·t + v0"
        );
    }

    #[test]
    fn test_range_display() {
        assert_eq!(Range::new(198.0, 242.0).to_string(), "198–242");
        assert_eq!(Range::new(28.8, 35.2).to_string(), "28.8–35.2");
        assert_eq!(Range::UNBOUNDED.to_string(), "0–∞");
        assert!(!Range::UNBOUNDED.is_bounded());
    }

    #[test]
    fn test_label_format() {
        assert_eq!(
            Model::label_for(Product::DeconApac, IsoGrade::Vg46),
            "Decon (APAC) · ISO 46"
        );
    }

    #[test]
    fn test_polynomial_serialization() {
        let json = serde_json::to_value(Polynomial::new(&[-0.9478, 0.0512])).unwrap();
        assert_eq!(json["expression"], "0.0512·t² − 0.9478·t + v0");
        assert_eq!(json["degree"], 2);
        assert_eq!(json["coefficients"][1], 0.0512);
    }
}
