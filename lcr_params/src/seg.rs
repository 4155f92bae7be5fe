//! Recommended SEG parameters: window length `L`, trigger complexity `K1` and extension
//! complexity `K2`.

use crate::fit::{round_to_int, Fit, Piecewise, Regime};
use crate::row::{NotAvailable, Params, RowOutcome, SegParams};
use crate::types::{Coverage, Focus, TargetLength};

/// Rows whose extension complexity exceeds this are not reported.
const MAX_K2: f64 = 4.2;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Window {
    Fitted(Piecewise),
    /// The window is the target length itself.
    Target,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct SegFit {
    window: Window,
    k2: Piecewise,
    /// `K1 = K2 - k1_offset`
    k1_offset: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct SegEntry {
    fit: Regime<SegFit>,
    /// Shortest target length the row is reported for. When it is above the global minimum,
    /// the NA line names it instead of the global minimum.
    min_length: i32,
    max_length: i32,
}

const fn power(coef: f64, exp: f64) -> Fit {
    Fit::Power { coef, exp }
}

const fn log(slope: f64, intercept: f64) -> Fit {
    Fit::Log { slope, intercept }
}

const fn split(low_max: i32, low: Fit, high_min: i32, high: Fit) -> Piecewise {
    Piecewise::Split {
        low_max,
        low,
        high_min,
        high,
    }
}

const fn fitted(window: Piecewise, k2: Piecewise, k1_offset: f64) -> SegFit {
    SegFit {
        window: Window::Fitted(window),
        k2,
        k1_offset,
    }
}

/// NARROW rows use the target length as the window and a single complexity threshold.
const fn at_target(k2: Piecewise) -> SegFit {
    SegFit {
        window: Window::Target,
        k2,
        k1_offset: 0.0,
    }
}

fn entry(focus: Focus, coverage: Coverage) -> SegEntry {
    use Coverage::{Five, Forty, Ten, TwentyFive, Two};

    let (fit, min_length, max_length) = match (focus, coverage) {
        (Focus::Diverse, Two) => (
            Regime::One(fitted(
                split(35, power(1.274, 0.823), 46, power(1.004, 0.891)),
                split(35, log(0.701, 0.155), 46, log(0.447, 1.038)),
                0.3,
            )),
            TargetLength::MIN,
            200,
        ),
        (Focus::Diverse, Five) => (
            Regime::Switch {
                low_max: 50,
                low: fitted(
                    Piecewise::Single(power(1.385, 0.801)),
                    Piecewise::Single(log(0.716, 0.381)),
                    0.3,
                ),
                high: fitted(
                    Piecewise::Single(power(0.747, 0.912)),
                    Piecewise::Single(log(0.337, 1.883)),
                    0.4,
                ),
            },
            TargetLength::MIN,
            300,
        ),
        (Focus::Diverse, Ten) => (
            Regime::One(fitted(
                split(45, power(1.376, 0.799), 56, power(1.298, 0.809)),
                split(45, log(0.69, 0.625), 56, log(0.347, 1.93)),
                0.3,
            )),
            TargetLength::MIN,
            300,
        ),
        (Focus::Diverse, TwentyFive) => (
            Regime::One(fitted(
                Piecewise::Single(power(1.507, 0.762)),
                split(45, log(0.476, 1.566), 56, log(0.314, 2.221)),
                0.3,
            )),
            TargetLength::MIN,
            300,
        ),
        (Focus::Diverse, Forty) => (
            Regime::One(fitted(
                split(55, power(1.491, 0.793), 66, power(1.138, 0.86)),
                split(55, log(0.581, 1.316), 66, log(0.28, 2.442)),
                0.2,
            )),
            10,
            300,
        ),
        (Focus::Narrow, Two) => (
            Regime::One(at_target(split(
                45,
                log(0.818, -0.245),
                56,
                log(0.418, 1.206),
            ))),
            TargetLength::MIN,
            250,
        ),
        (Focus::Narrow, Five) => (
            Regime::One(at_target(split(
                45,
                log(0.824, -0.003),
                56,
                log(0.355, 1.731),
            ))),
            TargetLength::MIN,
            300,
        ),
        (Focus::Narrow, Ten) => (
            Regime::One(at_target(split(
                45,
                log(0.803, 0.251),
                56,
                log(0.3, 2.135),
            ))),
            TargetLength::MIN,
            300,
        ),
        (Focus::Narrow, TwentyFive) => (
            Regime::One(at_target(split(
                45,
                log(0.788, 0.499),
                56,
                log(0.278, 2.405),
            ))),
            TargetLength::MIN,
            300,
        ),
        (Focus::Narrow, Forty) => (
            Regime::One(at_target(split(
                45,
                log(0.705, 0.887),
                56,
                log(0.257, 2.596),
            ))),
            TargetLength::MIN,
            250,
        ),
    };
    SegEntry {
        fit,
        min_length,
        max_length,
    }
}

fn compute(fit: SegFit, target: TargetLength) -> SegParams {
    let t = target.get();
    let window = match fit.window {
        Window::Fitted(window) => round_to_int(window.eval(t)),
        Window::Target => t,
    };
    let k2 = fit.k2.eval(t);
    SegParams {
        window,
        k1: k2 - fit.k1_offset,
        k2,
    }
}

/// Compute the SEG parameters for one coverage level and decide whether they are usable.
pub(crate) fn recommend(focus: Focus, coverage: Coverage, target: TargetLength) -> RowOutcome {
    let entry = entry(focus, coverage);
    let t = target.get();
    let params = compute(entry.fit.select(t), target);

    if t < entry.min_length {
        return RowOutcome::NotAvailable(NotAvailable::LengthOrEntropy {
            min_length: entry.min_length,
            max_length: entry.max_length,
        });
    }
    if t < TargetLength::MIN || t > entry.max_length || params.k2 > MAX_K2 {
        return RowOutcome::NotAvailable(NotAvailable::LengthOrEntropy {
            min_length: TargetLength::MIN,
            max_length: entry.max_length,
        });
    }
    RowOutcome::Valid(Params::Seg(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::ParameterRow;
    use strum::IntoEnumIterator;

    fn lines(focus: Focus, t: i64) -> Vec<String> {
        let target = TargetLength::new(t).unwrap();
        Coverage::iter()
            .map(|coverage| {
                ParameterRow {
                    coverage,
                    outcome: recommend(focus, coverage, target),
                }
                .to_string()
            })
            .collect()
    }

    fn params(focus: Focus, coverage: Coverage, t: i64) -> SegParams {
        compute(
            entry(focus, coverage).fit.select(t as i32),
            TargetLength::new(t).unwrap(),
        )
    }

    #[test]
    fn test_diverse_short_target_40_percent() {
        assert_eq!(
            lines(Focus::Diverse, 9),
            vec![
                "\t~2%\t\t\t8\t1.40\t1.70",
                "\t~5%\t\t\t8\t1.65\t1.95",
                "\t~10%\t\t\t8\t1.84\t2.14",
                "\t~25%\t\t\t8\t2.31\t2.61",
                "\t~40%\t\t\tNA [ target length <10 OR >300, OR K2>4.2]",
            ]
        );
        assert_eq!(
            lines(Focus::Diverse, 10)[4],
            "\t~40%\t\t\t9\t2.45\t2.65"
        );
    }

    #[test]
    fn test_diverse_blended_gap() {
        // 40 sits between the two fits of the 2% row.
        let p = params(Focus::Diverse, Coverage::Two, 40);
        let low = 1.274 * 40f64.powf(0.823);
        let high = 1.004 * 40f64.powf(0.891);
        assert_eq!(p.window, ((low + high) / 2.0).round() as i32);
        let k2 = ((0.701 * 40f64.ln() + 0.155) + (0.447 * 40f64.ln() + 1.038)) / 2.0;
        assert_eq!(p.k2, k2);
        assert_eq!(p.k1, k2 - 0.3);
        assert_eq!(
            lines(Focus::Diverse, 40),
            vec![
                "\t~2%\t\t\t27\t2.41\t2.71",
                "\t~5%\t\t\t27\t2.72\t3.02",
                "\t~10%\t\t\t26\t2.87\t3.17",
                "\t~25%\t\t\t25\t3.02\t3.32",
                "\t~40%\t\t\t28\t3.26\t3.46",
            ]
        );
    }

    #[test]
    fn test_diverse_five_percent_switch() {
        let low = params(Focus::Diverse, Coverage::Five, 50);
        assert_eq!(low.k1, low.k2 - 0.3);
        let high = params(Focus::Diverse, Coverage::Five, 51);
        assert_eq!(high.k1, high.k2 - 0.4);
        assert_eq!(
            lines(Focus::Diverse, 60),
            vec![
                "\t~2%\t\t\t39\t2.57\t2.87",
                "\t~5%\t\t\t31\t2.86\t3.26",
                "\t~10%\t\t\t36\t3.05\t3.35",
                "\t~25%\t\t\t34\t3.21\t3.51",
                "\t~40%\t\t\t38\t3.44\t3.64",
            ]
        );
    }

    #[test]
    fn test_diverse_300() {
        assert_eq!(
            lines(Focus::Diverse, 300),
            vec![
                "\t~2%\t\t\tNA [ target length <5 OR >200, OR K2>4.2]",
                "\t~5%\t\t\t136\t3.41\t3.81",
                "\t~10%\t\t\t131\t3.61\t3.91",
                "\t~25%\t\t\t116\t3.71\t4.01",
                "\t~40%\t\t\t154\t3.84\t4.04",
            ]
        );
    }

    #[test]
    fn test_narrow_window_is_target() {
        assert_eq!(
            lines(Focus::Narrow, 50),
            vec![
                "\t~2%\t\t\t50\t2.90\t2.90",
                "\t~5%\t\t\t50\t3.17\t3.17",
                "\t~10%\t\t\t50\t3.35\t3.35",
                "\t~25%\t\t\t50\t3.54\t3.54",
                "\t~40%\t\t\t50\t3.62\t3.62",
            ]
        );
        assert_eq!(
            lines(Focus::Narrow, 300),
            vec![
                "\t~2%\t\t\tNA [ target length <5 OR >250, OR K2>4.2]",
                "\t~5%\t\t\t300\t3.76\t3.76",
                "\t~10%\t\t\t300\t3.85\t3.85",
                "\t~25%\t\t\t300\t3.99\t3.99",
                "\t~40%\t\t\tNA [ target length <5 OR >250, OR K2>4.2]",
            ]
        );
        for coverage in Coverage::iter() {
            for t in [5, 45, 46, 55, 56, 250] {
                let p = params(Focus::Narrow, coverage, t);
                assert_eq!(i64::from(p.window), t);
                assert_eq!(p.k1, p.k2);
            }
        }
    }

    #[test]
    fn test_unset_length() {
        let outcomes: Vec<RowOutcome> = Coverage::iter()
            .map(|coverage| recommend(Focus::Diverse, coverage, TargetLength::UNSET))
            .collect();
        for outcome in &outcomes[..4] {
            assert!(matches!(
                outcome,
                RowOutcome::NotAvailable(NotAvailable::LengthOrEntropy { min_length: 5, .. })
            ));
        }
        assert_eq!(
            outcomes[4],
            RowOutcome::NotAvailable(NotAvailable::LengthOrEntropy {
                min_length: 10,
                max_length: 300,
            })
        );
    }

    #[test]
    fn test_valid_rows_respect_bounds() {
        for focus in Focus::iter() {
            for coverage in Coverage::iter() {
                for t in 5..=300 {
                    let target = TargetLength::new(t).unwrap();
                    if let RowOutcome::Valid(Params::Seg(p)) = recommend(focus, coverage, target) {
                        assert!(p.k2 <= MAX_K2);
                        assert!(p.k1 <= p.k2);
                        assert!(p.window > 0);
                    }
                }
            }
        }
    }
}
