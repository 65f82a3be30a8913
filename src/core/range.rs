//! Nominal viscosity bands
//!
//! Ranges resolve in two tiers: an override keyed by the exact
//! (product, grade) pair wins over the range shared by every product using
//! that grade. Pairs covered by neither get [`Range::UNBOUNDED`].

use serde::Serialize;

use crate::entities::{IsoGrade, Product, Range};

/// Product-specific overrides
const OVERRIDES: &[(Product, IsoGrade, Range)] = &[
    (Product::DeconHd, IsoGrade::Vg220, Range::new(198.0, 242.0)),
    (Product::DeconHd, IsoGrade::Vg320, Range::new(288.0, 352.0)),
];

/// Grade-global ranges (ISO VG midpoint ±10%)
const GRADE_RANGES: &[(IsoGrade, Range)] = &[
    (IsoGrade::Vg32, Range::new(28.8, 35.2)),
    (IsoGrade::Vg46, Range::new(41.4, 50.6)),
    (IsoGrade::Vg68, Range::new(61.2, 74.8)),
];

/// Which tier a range was resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSource {
    Override,
    Grade,
    Unbounded,
}

impl std::fmt::Display for RangeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeSource::Override => write!(f, "product override"),
            RangeSource::Grade => write!(f, "grade default"),
            RangeSource::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Resolve the conformance range for a product and grade. Never fails.
pub fn range_for(product: Product, grade: IsoGrade) -> Range {
    resolve_range(product, grade).0
}

/// Like [`range_for`], also reporting which tier matched
pub fn resolve_range(product: Product, grade: IsoGrade) -> (Range, RangeSource) {
    if let Some((_, _, range)) = OVERRIDES
        .iter()
        .find(|(p, g, _)| *p == product && *g == grade)
    {
        return (*range, RangeSource::Override);
    }
    if let Some((_, range)) = GRADE_RANGES.iter().find(|(g, _)| *g == grade) {
        return (*range, RangeSource::Grade);
    }
    (Range::UNBOUNDED, RangeSource::Unbounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_takes_precedence() {
        assert_eq!(
            resolve_range(Product::DeconHd, IsoGrade::Vg220),
            (Range::new(198.0, 242.0), RangeSource::Override)
        );
        assert_eq!(
            range_for(Product::DeconHd, IsoGrade::Vg320),
            Range::new(288.0, 352.0)
        );
    }

    #[test]
    fn test_grade_ranges_shared_across_products() {
        for product in [Product::DeconApac, Product::DeconA, Product::Decon] {
            assert_eq!(range_for(product, IsoGrade::Vg32), Range::new(28.8, 35.2));
            assert_eq!(range_for(product, IsoGrade::Vg46), Range::new(41.4, 50.6));
            assert_eq!(range_for(product, IsoGrade::Vg68), Range::new(61.2, 74.8));
        }
    }

    #[test]
    fn test_grade_range_applies_to_any_product() {
        // Decon HD does not offer ISO 46, but the lookup is total
        assert_eq!(
            resolve_range(Product::DeconHd, IsoGrade::Vg46),
            (Range::new(41.4, 50.6), RangeSource::Grade)
        );
    }

    #[test]
    fn test_unbounded_fallback() {
        let (range, source) = resolve_range(Product::Decon, IsoGrade::Vg220);
        assert_eq!(source, RangeSource::Unbounded);
        assert_eq!(range.min, 0.0);
        assert!(range.max.is_infinite());
    }

    #[test]
    fn test_every_range_is_ordered() {
        for product in Product::ALL {
            for grade in IsoGrade::ALL {
                let range = range_for(product, grade);
                assert!(range.min <= range.max, "{product} {grade}: {range}");
            }
        }
    }
}
