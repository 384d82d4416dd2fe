use heavymetal_index::{compute_indices, IndexKind, RiskLevel, Sample};
use pretty_assertions::assert_eq;

const ALL_LABELS: [&str; 5] = [
    "Lead (Pb)",
    "Cadmium (Cd)",
    "Arsenic (As)",
    "Chromium (Cr)",
    "Selenium (Se)",
];

#[test]
fn zero_sample_is_safe() {
    let result = compute_indices(&Sample::ZERO);
    assert_eq!(result.hpi, 0.0);
    assert_eq!(result.hei, 0.0);
    assert_eq!(result.pli, 0.0);
    assert_eq!(result.eri, 0.0);
    assert_eq!(result.risk_level, RiskLevel::Safe);
    assert!(result.exceeds_standards.is_empty());
}

#[test]
fn sample_at_standard_is_moderate_without_exceedances() {
    let sample = Sample {
        Pb: 0.01,
        Cd: 0.003,
        As: 0.01,
        Cr: 0.05,
        Se: 0.01,
    };
    let result = compute_indices(&sample);
    assert_eq!(result.hpi, 1.0);
    assert_eq!(result.hei, 5.0);
    assert_eq!(result.pli, 1.0);
    assert_eq!(result.eri, 52.0);
    // HEI of 5 is past the moderate limit of 2 but not the high limit of 5.
    assert_eq!(result.risk_level, RiskLevel::Moderate);
    assert!(result.exceeds_standards.is_empty());
}

#[test]
fn sample_at_twice_standard_is_high() {
    let sample = Sample {
        Pb: 0.02,
        Cd: 0.006,
        As: 0.02,
        Cr: 0.10,
        Se: 0.02,
    };
    let result = compute_indices(&sample);
    assert_eq!(result.hpi, 2.0);
    assert_eq!(result.hei, 10.0);
    assert_eq!(result.pli, 2.0);
    assert_eq!(result.eri, 104.0);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.exceeds_standards, ALL_LABELS.to_vec());

    let hei = result
        .breakdown()
        .iter()
        .find(|b| b.kind == IndexKind::Hei)
        .unwrap();
    assert_eq!(hei.level, RiskLevel::High);
}

#[test]
fn cadmium_spike_drives_ecological_risk() {
    // Cd at 35x its standard: ERI = 30 * 35 = 1050.
    let sample = Sample::ZERO.with(heavymetal_index::MetalSymbol::Cd, 0.105);
    let result = compute_indices(&sample);
    assert_eq!(result.eri, 1050.0);
    assert_eq!(result.pli, 0.0);
    assert_eq!(result.risk_level, RiskLevel::Critical);
    assert_eq!(result.exceeds_standards, vec!["Cadmium (Cd)"]);
}
