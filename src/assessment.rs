use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::indices::{compute_eri, compute_hei, compute_hpi, compute_pli, round2};
use crate::metals::MetalSymbol;
use crate::risk::{IndexKind, IndexScores, RiskClassifier, RiskLevel, RiskThresholds};
use crate::sample::Sample;

/// Assessment of one sample. Index values are rounded to 2 decimals;
/// `risk_level` and `breakdown` come from the unrounded values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicesResult {
    pub hpi: f64,
    pub hei: f64,
    pub pli: f64,
    pub eri: f64,
    pub risk_level: RiskLevel,
    pub exceeds_standards: Vec<String>,
    #[serde(default)]
    pub breakdown: Vec<IndexBreakdown>,
}

/// One index with the level it reaches on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexBreakdown {
    pub kind: IndexKind,
    pub value: f64,
    pub level: RiskLevel,
}

impl IndicesResult {
    /// Per-index levels, in HPI, HEI, PLI, ERI order.
    pub fn breakdown(&self) -> &[IndexBreakdown] {
        &self.breakdown
    }

    pub fn is_safe(&self) -> bool {
        self.risk_level == RiskLevel::Safe
    }
}

/// Labels of metals strictly above their standard, in canonical order.
pub fn check_exceeds_standards(sample: &Sample) -> Vec<String> {
    MetalSymbol::ALL
        .iter()
        .filter(|&&m| sample.get(m) > m.standard())
        .map(|m| m.label().to_string())
        .collect()
}

/// Raw index values for a sample.
pub fn compute_scores(sample: &Sample) -> IndexScores {
    IndexScores {
        hpi: compute_hpi(sample),
        hei: compute_hei(sample),
        pli: compute_pli(sample),
        eri: compute_eri(sample),
    }
}

/// Full assessment with the default thresholds.
///
/// The sample must already satisfy [`Sample::validate`]; a negative or
/// non-finite concentration here is a caller bug, checked only in debug builds.
pub fn compute_indices(sample: &Sample) -> IndicesResult {
    compute_indices_with(sample, &RiskThresholds::default())
}

pub fn compute_indices_with<C: RiskClassifier>(sample: &Sample, classifier: &C) -> IndicesResult {
    debug_assert!(sample.is_valid(), "sample violates input contract: {sample:?}");

    let scores = compute_scores(sample);
    trace!(hpi = scores.hpi, hei = scores.hei, pli = scores.pli, eri = scores.eri, "raw indices");

    // Classify before rounding.
    let risk_level = classifier.classify(&scores);
    let breakdown = IndexKind::ALL
        .iter()
        .map(|&kind| {
            let value = scores.get(kind);
            IndexBreakdown {
                kind,
                value: round2(value),
                level: classifier.level_for(kind, value),
            }
        })
        .collect();
    let exceeds_standards = check_exceeds_standards(sample);

    debug!(%risk_level, exceeded = exceeds_standards.len(), "sample assessed");

    IndicesResult {
        hpi: round2(scores.hpi),
        hei: round2(scores.hei),
        pli: round2(scores.pli),
        eri: round2(scores.eri),
        risk_level,
        exceeds_standards,
        breakdown,
    }
}
