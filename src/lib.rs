#![forbid(unsafe_code)]
//! Heavy-metal pollution indices for water samples.
//!
//! A [`Sample`] of five metal concentrations (mg/L) is scored with four
//! independent indices (HPI, HEI, PLI, ERI), reconciled into one
//! [`RiskLevel`], and checked against the BIS/WHO drinking-water limits.
//!
//! ```
//! use heavymetal_index::{compute_indices, RiskLevel, Sample};
//!
//! let sample = Sample { Pb: 0.02, Cd: 0.006, As: 0.02, Cr: 0.10, Se: 0.02 };
//! let result = compute_indices(&sample);
//! assert_eq!(result.hei, 10.0);
//! assert_eq!(result.risk_level, RiskLevel::High);
//! assert_eq!(result.exceeds_standards.len(), 5);
//! ```

pub mod assessment;
pub mod config;
pub mod error;
pub mod indices;
pub mod logging;
pub mod metals;
pub mod risk;
pub mod sample;

pub use assessment::{
    check_exceeds_standards, compute_indices, compute_indices_with, compute_scores,
    IndexBreakdown, IndicesResult,
};
pub use error::{IngestError, SampleError};
pub use indices::{compute_eri, compute_hei, compute_hpi, compute_pli, round2};
pub use metals::{MetalSymbol, MetalTable, STANDARDS, TOXIC_FACTORS, WEIGHTS};
pub use risk::{classify_risk, IndexKind, IndexScores, RiskClassifier, RiskLevel, RiskThresholds};
pub use sample::{Sample, StationSample};
