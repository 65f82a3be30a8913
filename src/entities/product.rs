//! Product families and ISO viscosity grades
//!
//! Both sets are closed. A product only offers a subset of the grades; see
//! [`Product::allowed_grades`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fluid product family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Product {
    /// Heavy-duty family, offered in the high grades only
    DeconHd,
    /// Asia-Pacific formulation
    DeconApac,
    DeconA,
    Decon,
}

/// ISO VG viscosity grade (nominal cSt at 40 °C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum IsoGrade {
    Vg32,
    Vg46,
    Vg68,
    Vg220,
    Vg320,
}

const LOW_BAND: &[IsoGrade] = &[IsoGrade::Vg32, IsoGrade::Vg46, IsoGrade::Vg68];
const HIGH_BAND: &[IsoGrade] = &[IsoGrade::Vg220, IsoGrade::Vg320];

impl Product {
    /// Every product, in menu order
    pub const ALL: [Product; 4] = [
        Product::DeconHd,
        Product::DeconApac,
        Product::DeconA,
        Product::Decon,
    ];

    /// Display name used in model labels
    pub fn name(self) -> &'static str {
        match self {
            Product::DeconHd => "Decon HD",
            Product::DeconApac => "Decon (APAC)",
            Product::DeconA => "Decon A",
            Product::Decon => "Decon",
        }
    }

    /// Short product code (e.g. `D_HD`)
    pub fn code(self) -> &'static str {
        match self {
            Product::DeconHd => "D_HD",
            Product::DeconApac => "D_APAC",
            Product::DeconA => "D_A",
            Product::Decon => "D",
        }
    }

    /// Grades offered for this product, in order. The first entry is the
    /// default grade used when reconciling a selection.
    pub fn allowed_grades(self) -> &'static [IsoGrade] {
        match self {
            Product::DeconHd => HIGH_BAND,
            Product::DeconApac | Product::DeconA | Product::Decon => LOW_BAND,
        }
    }

    /// First allowed grade, used when a selection has to be corrected
    pub fn default_grade(self) -> IsoGrade {
        match self {
            Product::DeconHd => IsoGrade::Vg220,
            Product::DeconApac | Product::DeconA | Product::Decon => IsoGrade::Vg32,
        }
    }

    /// Check whether `grade` is offered for this product
    pub fn allows(self, grade: IsoGrade) -> bool {
        self.allowed_grades().contains(&grade)
    }

    /// Command-line value name (e.g. `decon-hd`)
    pub fn cli_name(self) -> &'static str {
        match self {
            Product::DeconHd => "decon-hd",
            Product::DeconApac => "decon-apac",
            Product::DeconA => "decon-a",
            Product::Decon => "decon",
        }
    }
}

impl IsoGrade {
    /// Every grade, ascending
    pub const ALL: [IsoGrade; 5] = [
        IsoGrade::Vg32,
        IsoGrade::Vg46,
        IsoGrade::Vg68,
        IsoGrade::Vg220,
        IsoGrade::Vg320,
    ];

    /// Nominal grade number
    pub fn value(self) -> u16 {
        match self {
            IsoGrade::Vg32 => 32,
            IsoGrade::Vg46 => 46,
            IsoGrade::Vg68 => 68,
            IsoGrade::Vg220 => 220,
            IsoGrade::Vg320 => 320,
        }
    }

    /// Look up a grade by its nominal number
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == value)
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for IsoGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown product: '{0}'. Expected one of: decon-hd, decon-apac, decon-a, decon")]
pub struct ParseProductError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown ISO grade: '{0}'. Expected one of: 32, 46, 68, 220, 320")]
pub struct ParseGradeError(pub String);

impl std::str::FromStr for Product {
    type Err = ParseProductError;

    /// Accepts the CLI value name, the display name or the short code,
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Product::ALL
            .into_iter()
            .find(|p| {
                wanted == p.cli_name()
                    || wanted == p.name().to_lowercase()
                    || wanted == p.code().to_lowercase()
            })
            .ok_or_else(|| ParseProductError(s.to_string()))
    }
}

impl std::str::FromStr for IsoGrade {
    type Err = ParseGradeError;

    /// Accepts `46`, `VG46`, `ISO 46` or `ISO VG 46`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let rest = upper.strip_prefix("ISO").unwrap_or(&upper).trim_start();
        let digits = rest.strip_prefix("VG").unwrap_or(rest).trim();
        digits
            .parse::<u16>()
            .ok()
            .and_then(IsoGrade::from_value)
            .ok_or_else(|| ParseGradeError(s.to_string()))
    }
}

impl From<Product> for String {
    fn from(product: Product) -> Self {
        product.name().to_string()
    }
}

impl TryFrom<String> for Product {
    type Error = ParseProductError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IsoGrade> for u16 {
    fn from(grade: IsoGrade) -> Self {
        grade.value()
    }
}

impl TryFrom<u16> for IsoGrade {
    type Error = ParseGradeError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        IsoGrade::from_value(value).ok_or_else(|| ParseGradeError(value.to_string()))
    }
}
