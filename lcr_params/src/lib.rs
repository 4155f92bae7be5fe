//! Recommended parameters for low-complexity region detection in proteins.
//!
//! Given a target region length and a [`Focus`], the recommender evaluates empirically fitted
//! regressions for each of five [`Coverage`] levels and reports either a parameter set or the
//! bounds that ruled it out. Two detection programs are covered, see [`Convention`].

// Warning groups (as of rust 1.55)
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2018_idioms,
    unused
)]
// Other warnings (as of rust 1.55)
#![deny(
    confusable_idents,
    const_item_mutation,
    deprecated,
    drop_bounds,
    elided_lifetimes_in_paths,
    irrefutable_let_patterns,
    non_shorthand_field_patterns,
    overlapping_range_endpoints,
    renamed_and_removed_lints,
    unconditional_recursion,
    unknown_lints,
    unused_comparisons,
    while_true
)]

mod fit;
mod flps;
mod row;
mod seg;
mod types;

pub use row::{FlpsParams, NotAvailable, ParameterRow, Params, RowOutcome, SegParams};
pub use types::{Convention, Coverage, Focus, TargetLength};

use log::debug;
use strum::IntoEnumIterator;

/// Compute the row for a single coverage level.
///
/// Rows do not depend on each other; the result is the same whatever order they are requested in.
pub fn recommend_row(
    convention: Convention,
    focus: Focus,
    target: TargetLength,
    coverage: Coverage,
) -> ParameterRow {
    let outcome = match convention {
        Convention::Flps => flps::recommend(focus, coverage, target),
        Convention::Seg => seg::recommend(focus, coverage, target),
    };
    debug!("{convention} {focus} length {target} {coverage}: {outcome:?}");
    ParameterRow { coverage, outcome }
}

/// Compute one row per coverage level, in reporting order.
pub fn recommend(convention: Convention, focus: Focus, target: TargetLength) -> Vec<ParameterRow> {
    Coverage::iter()
        .map(|coverage| recommend_row(convention, focus, target, coverage))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn focus_strategy() -> impl Strategy<Value = Focus> {
        prop_oneof![Just(Focus::Diverse), Just(Focus::Narrow)]
    }

    fn convention_strategy() -> impl Strategy<Value = Convention> {
        prop_oneof![Just(Convention::Flps), Just(Convention::Seg)]
    }

    #[test]
    fn test_flps_diverse_15() {
        let rows = recommend(Convention::Flps, Focus::Diverse, TargetLength::DEFAULT);
        assert_eq!(
            rows[0].params(),
            Some(&Params::Flps(FlpsParams {
                small_m: 8,
                big_m: 10,
                threshold_exponent: -0.153 * 15.0 - 3.994,
            }))
        );
        assert!(!rows[4].is_valid());
    }

    #[test]
    fn test_flps_narrow_10_all_unavailable() {
        let target = TargetLength::new(10).unwrap();
        let rows = recommend(Convention::Flps, Focus::Narrow, target);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| !row.is_valid()));
    }

    #[test]
    fn test_seg_diverse_9_names_ten() {
        let target = TargetLength::new(9).unwrap();
        let row = recommend_row(Convention::Seg, Focus::Diverse, target, Coverage::Forty);
        assert_eq!(
            row.outcome,
            RowOutcome::NotAvailable(NotAvailable::LengthOrEntropy {
                min_length: 10,
                max_length: 300,
            })
        );
        assert!(row.to_string().contains("target length <10"));
    }

    #[test]
    fn test_row_json() {
        let row = recommend_row(
            Convention::Seg,
            Focus::Narrow,
            TargetLength::new(50).unwrap(),
            Coverage::Five,
        );
        let value = serde_json::to_value(row).unwrap();
        assert_eq!(value["coverage"], 5);
        assert_eq!(value["outcome"]["valid"]["seg"]["window"], 50);

        let na = recommend_row(
            Convention::Flps,
            Focus::Diverse,
            TargetLength::new(300).unwrap(),
            Coverage::Two,
        );
        let value = serde_json::to_value(na).unwrap();
        assert_eq!(
            value["outcome"]["not_available"]["length_or_threshold"]["max_length"],
            100
        );
    }

    proptest! {
        #[test]
        fn prop_five_rows_in_order(
            t in 5i64..=300,
            focus in focus_strategy(),
            convention in convention_strategy(),
        ) {
            let rows = recommend(convention, focus, TargetLength::new(t).unwrap());
            let percents: Vec<u32> = rows.iter().map(|row| row.coverage.percent()).collect();
            prop_assert_eq!(percents, vec![2, 5, 10, 25, 40]);
        }

        #[test]
        fn prop_deterministic(
            t in 5i64..=300,
            focus in focus_strategy(),
            convention in convention_strategy(),
        ) {
            let target = TargetLength::new(t).unwrap();
            let first: Vec<String> = recommend(convention, focus, target)
                .iter()
                .map(ToString::to_string)
                .collect();
            let second: Vec<String> = recommend(convention, focus, target)
                .iter()
                .map(ToString::to_string)
                .collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_reverse_order_matches(
            t in 5i64..=300,
            focus in focus_strategy(),
            convention in convention_strategy(),
        ) {
            let target = TargetLength::new(t).unwrap();
            let forward = recommend(convention, focus, target);
            let mut backward: Vec<ParameterRow> = Coverage::iter()
                .rev()
                .map(|coverage| recommend_row(convention, focus, target, coverage))
                .collect();
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn prop_flps_narrow_small_m_is_big_m(t in 5i64..=300) {
            for row in recommend(Convention::Flps, Focus::Narrow, TargetLength::new(t).unwrap()) {
                if let Some(Params::Flps(p)) = row.params() {
                    prop_assert_eq!(p.small_m, p.big_m);
                }
            }
        }
    }
}
