use core::fmt;

use serde::{Deserialize, Serialize};

/// Composite risk classification, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four indices the classifier looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    Hpi,
    Hei,
    Pli,
    Eri,
}

impl IndexKind {
    pub const ALL: [IndexKind; 4] = [IndexKind::Hpi, IndexKind::Hei, IndexKind::Pli, IndexKind::Eri];

    pub fn title(&self) -> &'static str {
        match self {
            IndexKind::Hpi => "Heavy Metal Pollution Index",
            IndexKind::Hei => "Heavy Metal Evaluation Index",
            IndexKind::Pli => "Pollution Load Index",
            IndexKind::Eri => "Ecological Risk Index",
        }
    }
}

/// Raw, unrounded index values for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexScores {
    pub hpi: f64,
    pub hei: f64,
    pub pli: f64,
    pub eri: f64,
}

impl IndexScores {
    pub fn get(&self, kind: IndexKind) -> f64 {
        match kind {
            IndexKind::Hpi => self.hpi,
            IndexKind::Hei => self.hei,
            IndexKind::Pli => self.pli,
            IndexKind::Eri => self.eri,
        }
    }
}

/// Lower bounds (exclusive) that escalate a sample into one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierLimits {
    pub hpi: f64,
    pub hei: f64,
    pub pli: f64,
    pub eri: f64,
}

impl TierLimits {
    fn limit(&self, kind: IndexKind) -> f64 {
        match kind {
            IndexKind::Hpi => self.hpi,
            IndexKind::Hei => self.hei,
            IndexKind::Pli => self.pli,
            IndexKind::Eri => self.eri,
        }
    }

    /// True when any single index is strictly above its limit.
    fn exceeded_by(&self, scores: &IndexScores) -> bool {
        scores.hpi > self.hpi || scores.hei > self.hei || scores.pli > self.pli || scores.eri > self.eri
    }
}

/// Tier thresholds for the composite classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub critical: TierLimits,
    pub high: TierLimits,
    pub moderate: TierLimits,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        RiskThresholds {
            critical: TierLimits {
                hpi: 100.0,
                hei: 10.0,
                pli: 3.0,
                eri: 300.0,
            },
            high: TierLimits {
                hpi: 50.0,
                hei: 5.0,
                pli: 2.0,
                eri: 150.0,
            },
            moderate: TierLimits {
                hpi: 25.0,
                hei: 2.0,
                pli: 1.0,
                eri: 75.0,
            },
        }
    }
}

/// Trait for composite risk classification over raw index scores.
pub trait RiskClassifier {
    fn classify(&self, scores: &IndexScores) -> RiskLevel;

    /// Level a single index would reach on its own.
    fn level_for(&self, kind: IndexKind, value: f64) -> RiskLevel;
}

impl RiskClassifier for RiskThresholds {
    /// Most severe tier first; the first tier any index crosses wins.
    fn classify(&self, scores: &IndexScores) -> RiskLevel {
        if self.critical.exceeded_by(scores) {
            RiskLevel::Critical
        } else if self.high.exceeded_by(scores) {
            RiskLevel::High
        } else if self.moderate.exceeded_by(scores) {
            RiskLevel::Moderate
        } else {
            RiskLevel::Safe
        }
    }

    fn level_for(&self, kind: IndexKind, value: f64) -> RiskLevel {
        if value > self.critical.limit(kind) {
            RiskLevel::Critical
        } else if value > self.high.limit(kind) {
            RiskLevel::High
        } else if value > self.moderate.limit(kind) {
            RiskLevel::Moderate
        } else {
            RiskLevel::Safe
        }
    }
}

/// Classify raw index values with the default thresholds.
pub fn classify_risk(hpi: f64, hei: f64, pli: f64, eri: f64) -> RiskLevel {
    RiskThresholds::default().classify(&IndexScores { hpi, hei, pli, eri })
}
