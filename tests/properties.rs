use heavymetal_index::{
    compute_eri, compute_hei, compute_hpi, compute_indices, compute_pli, MetalSymbol, Sample,
};
use proptest::prelude::*;

fn concentration() -> impl Strategy<Value = f64> {
    0.0f64..1.0
}

fn sample() -> impl Strategy<Value = Sample> {
    (
        concentration(),
        concentration(),
        concentration(),
        concentration(),
        concentration(),
    )
        .prop_map(|(pb, cd, as_, cr, se)| Sample {
            Pb: pb,
            Cd: cd,
            As: as_,
            Cr: cr,
            Se: se,
        })
}

fn metal() -> impl Strategy<Value = MetalSymbol> {
    prop::sample::select(MetalSymbol::ALL.to_vec())
}

fn not_below(after: f64, before: f64) -> bool {
    after >= before - 1e-12 * before.abs().max(1.0)
}

proptest! {
    #[test]
    fn assessment_is_idempotent(s in sample()) {
        prop_assert_eq!(compute_indices(&s), compute_indices(&s));
    }

    #[test]
    fn raising_one_metal_never_lowers_an_index(
        s in sample(),
        m in metal(),
        bump in 0.0f64..1.0,
    ) {
        let raised = s.with(m, s.get(m) + bump);
        prop_assert!(not_below(compute_hpi(&raised), compute_hpi(&s)));
        prop_assert!(not_below(compute_hei(&raised), compute_hei(&s)));
        prop_assert!(not_below(compute_pli(&raised), compute_pli(&s)));
        prop_assert!(not_below(compute_eri(&raised), compute_eri(&s)));
    }

    #[test]
    fn raising_one_metal_never_lowers_risk(
        s in sample(),
        m in metal(),
        bump in 0.0f64..1.0,
    ) {
        let raised = s.with(m, s.get(m) + bump);
        prop_assert!(compute_indices(&raised).risk_level >= compute_indices(&s).risk_level);
    }

    #[test]
    fn exceedances_are_canonical_subsequence(s in sample()) {
        let canonical: Vec<&str> = MetalSymbol::ALL.iter().map(|m| m.label()).collect();
        let reported = compute_indices(&s).exceeds_standards;
        let mut cursor = canonical.iter();
        for label in &reported {
            prop_assert!(cursor.any(|c| c == label), "{} out of order in {:?}", label, reported);
        }
    }

    #[test]
    fn composite_level_matches_worst_index(s in sample()) {
        let result = compute_indices(&s);
        let worst = result.breakdown().iter().map(|b| b.level).max();
        prop_assert_eq!(Some(result.risk_level), worst);
    }
}
