//! Recommended fLPS parameters: the window bounds `m` and `M` and the p-value threshold `t`.

use crate::fit::{round_to_int, Fit, Piecewise, Regime};
use crate::row::{FlpsParams, NotAvailable, Params, RowOutcome};
use crate::types::{Coverage, Focus, TargetLength};

/// Rows whose threshold exceeds 10^-3 are not reported.
const MAX_THRESHOLD_EXPONENT: f64 = -3.0;
/// Smallest usable minimum window.
const MIN_SMALL_M: i32 = 5;

/// How the minimum window `m` relates to the maximum window `M`.
#[derive(Copy, Clone, Debug, PartialEq)]
enum SmallM {
    /// `M - offset`
    Offset(i32),
    /// An independent fit, rounded.
    Fitted(Fit),
    SameAsBig,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct FlpsFit {
    big_m: Fit,
    small_m: SmallM,
    threshold_exponent: Piecewise,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct FlpsEntry {
    fit: Regime<FlpsFit>,
    /// Shortest target length the fit is trusted for. This folds the per-focus exclusions
    /// (NARROW needs more than 10 residues, and more for the high coverages) into the table.
    min_length: i32,
    max_length: i32,
}

const fn power(coef: f64, exp: f64) -> Fit {
    Fit::Power { coef, exp }
}

const fn linear(slope: f64, intercept: f64) -> Fit {
    Fit::Linear { slope, intercept }
}

const fn diverse(big_m: Fit, small_m: SmallM, threshold_exponent: Fit) -> FlpsFit {
    FlpsFit {
        big_m,
        small_m,
        threshold_exponent: Piecewise::Single(threshold_exponent),
    }
}

const fn narrow(big_m: Fit, threshold_exponent: Piecewise) -> FlpsFit {
    FlpsFit {
        big_m,
        small_m: SmallM::SameAsBig,
        threshold_exponent,
    }
}

fn entry(focus: Focus, coverage: Coverage) -> FlpsEntry {
    use Coverage::{Five, Forty, Ten, TwentyFive, Two};
    use SmallM::{Fitted, Offset};

    let (fit, min_length, max_length) = match (focus, coverage) {
        (Focus::Diverse, Two) => (
            Regime::One(diverse(
                power(2.534, 0.506),
                Offset(2),
                linear(-0.153, -3.994),
            )),
            5,
            100,
        ),
        (Focus::Diverse, Five) => (
            Regime::One(diverse(
                power(3.46, 0.508),
                Offset(4),
                linear(-0.098, -3.305),
            )),
            5,
            200,
        ),
        (Focus::Diverse, Ten) => (
            Regime::One(diverse(
                power(3.912, 0.543),
                Offset(10),
                linear(-0.055, -3.635),
            )),
            5,
            250,
        ),
        (Focus::Diverse, TwentyFive) => (
            Regime::Switch {
                low_max: 105,
                low: diverse(
                    power(5.647, 0.56),
                    Fitted(power(0.872, 0.797)),
                    linear(-0.039, -2.381),
                ),
                high: diverse(power(6.096, 0.552), Offset(50), linear(-0.031, -2.93)),
            },
            5,
            300,
        ),
        (Focus::Diverse, Forty) => (
            Regime::Switch {
                low_max: 105,
                low: diverse(
                    power(9.82, 0.522),
                    Fitted(power(0.481, 0.876)),
                    linear(-0.022, -2.709),
                ),
                high: diverse(power(11.126, 0.484), Offset(80), linear(-0.025, -2.762)),
            },
            16,
            300,
        ),
        (Focus::Narrow, Two) => (
            Regime::One(narrow(
                power(2.324, 0.539),
                Piecewise::Single(linear(-0.149, -3.883)),
            )),
            11,
            100,
        ),
        (Focus::Narrow, Five) => (
            Regime::One(narrow(
                power(2.976, 0.556),
                Piecewise::Split {
                    low_max: 28,
                    low: linear(-0.127, -2.183),
                    high_min: 33,
                    high: linear(-0.09, -3.173),
                },
            )),
            11,
            200,
        ),
        (Focus::Narrow, Ten) => (
            Regime::One(narrow(
                power(3.493, 0.572),
                Piecewise::Single(linear(-0.058, -2.731)),
            )),
            11,
            200,
        ),
        (Focus::Narrow, TwentyFive) => (
            Regime::One(narrow(
                power(3.394, 0.672),
                Piecewise::Split {
                    low_max: 90,
                    low: Fit::Const(-4.0),
                    high_min: 91,
                    high: linear(-0.028, -1.695),
                },
            )),
            50,
            300,
        ),
        (Focus::Narrow, Forty) => (
            Regime::One(narrow(
                power(0.889, 0.977),
                Piecewise::Single(Fit::Const(-4.0)),
            )),
            100,
            300,
        ),
    };
    FlpsEntry {
        fit,
        min_length,
        max_length,
    }
}

fn compute(fit: FlpsFit, target: TargetLength) -> FlpsParams {
    let t = target.get();
    let big_m = round_to_int(fit.big_m.eval(target.as_f64()));
    let small_m = match fit.small_m {
        SmallM::Offset(offset) => big_m - offset,
        SmallM::Fitted(small) => round_to_int(small.eval(target.as_f64())),
        SmallM::SameAsBig => big_m,
    };
    FlpsParams {
        small_m,
        big_m,
        threshold_exponent: fit.threshold_exponent.eval(t),
    }
}

/// Compute the fLPS parameters for one coverage level and decide whether they are usable.
pub(crate) fn recommend(focus: Focus, coverage: Coverage, target: TargetLength) -> RowOutcome {
    let entry = entry(focus, coverage);
    let t = target.get();
    let params = compute(entry.fit.select(t), target);

    let rejected = t < TargetLength::MIN
        || t > entry.max_length
        || t < entry.min_length
        || params.threshold_exponent > MAX_THRESHOLD_EXPONENT
        || params.small_m < MIN_SMALL_M;

    if rejected {
        RowOutcome::NotAvailable(NotAvailable::LengthOrThreshold {
            min_length: TargetLength::MIN,
            max_length: entry.max_length,
        })
    } else {
        RowOutcome::Valid(Params::Flps(params))
    }
}
