//! The four pollution indices.
//!
//! All functions return raw `f64` values; rounding for display happens in
//! [`crate::assessment::compute_indices`].

use crate::metals::{MetalSymbol, WEIGHTS};
use crate::sample::Sample;

/// Heavy Metal Pollution Index, HPI = Σ(wi × qi) / Σwi with qi = ci / si
/// and wi = 1 / si.
pub fn compute_hpi(sample: &Sample) -> f64 {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (metal, weight) in WEIGHTS.iter() {
        let qi = sample.contamination_factor(metal);
        numerator += weight * qi;
        denominator += weight;
    }
    numerator / denominator
}

/// Heavy Metal Evaluation Index, HEI = Σ(ci / si).
pub fn compute_hei(sample: &Sample) -> f64 {
    MetalSymbol::ALL
        .iter()
        .map(|&m| sample.contamination_factor(m))
        .sum()
}

/// Pollution Load Index, the geometric mean of the contamination factors.
///
/// A single zero concentration collapses the product, so PLI is 0.
pub fn compute_pli(sample: &Sample) -> f64 {
    let product: f64 = MetalSymbol::ALL
        .iter()
        .map(|&m| sample.contamination_factor(m))
        .product();
    product.powf(1.0 / MetalSymbol::COUNT as f64)
}

/// Ecological Risk Index, ERI = Σ(Ti × ci / si).
pub fn compute_eri(sample: &Sample) -> f64 {
    MetalSymbol::ALL
        .iter()
        .map(|&m| m.toxic_factor() * sample.contamination_factor(m))
        .sum()
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
