//! Shared helper functions for CLI commands

use miette::Result;

use crate::core::config::MAX_PRECISION;
use crate::core::Config;
use crate::entities::Range;

/// Round to `precision` decimal places for display. Values too large to
/// scale are returned unchanged.
pub fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Format a viscosity with a fixed number of decimals, e.g. `195.6 cSt`
pub fn format_cst(value: f64, precision: usize) -> String {
    format!("{:.*} cSt", precision, value)
}

/// Format a range with its unit, e.g. `198–242 cSt`
pub fn format_range(range: &Range) -> String {
    format!("{} cSt", range)
}

/// Pick the display precision: command-line flag, then config
pub fn display_precision(flag: Option<usize>, config: &Config) -> Result<usize> {
    let precision = flag.unwrap_or(config.precision);
    if precision > MAX_PRECISION {
        return Err(miette::miette!(
            "Precision must be between 0 and {}, got {}",
            MAX_PRECISION,
            precision
        ));
    }
    Ok(precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(195.642, 1), 195.6);
        assert_eq!(round_to(61.472, 2), 61.47);
        assert_eq!(round_to(30.0, 0), 30.0);
    }

    #[test]
    fn test_round_to_huge_value_is_unchanged() {
        assert_eq!(round_to(1.7e308, 1), 1.7e308);
        assert_eq!(round_to(f64::MAX, 6), f64::MAX);
    }

    #[test]
    fn test_format_cst() {
        assert_eq!(format_cst(195.642, 1), "195.6 cSt");
        assert_eq!(format_cst(30.0, 1), "30.0 cSt");
        assert_eq!(format_cst(61.472, 3), "61.472 cSt");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(&Range::new(61.2, 74.8)), "61.2–74.8 cSt");
        assert_eq!(format_range(&Range::UNBOUNDED), "0–∞ cSt");
    }

    #[test]
    fn test_display_precision() {
        let config = Config::default();
        assert_eq!(display_precision(None, &config).unwrap(), 1);
        assert_eq!(display_precision(Some(3), &config).unwrap(), 3);
        assert!(display_precision(Some(9), &config).is_err());
    }
}
