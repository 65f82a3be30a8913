//! Keeps a (product, grade) selection valid when the product changes

use tracing::debug;

use crate::entities::{IsoGrade, Product};

/// Return `current` if `product` offers it, otherwise the product's default
/// (first allowed) grade.
pub fn reconcile(product: Product, current: IsoGrade) -> IsoGrade {
    if product.allows(current) {
        return current;
    }
    let fallback = product.default_grade();
    debug!(%product, from = %current, to = %fallback, "grade not offered, reconciled");
    fallback
}
