//! Closed-form regressions against target length.
//!
//! The coefficients in the formula tables were fitted offline. Evaluation keeps the exact
//! operation order of the fits so that results are reproducible to the last bit.

/// A single fitted curve evaluated at a target length `t`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Fit {
    /// `coef * t^exp`
    Power { coef: f64, exp: f64 },
    /// `slope * ln(t) + intercept`
    Log { slope: f64, intercept: f64 },
    /// `slope * t + intercept`
    Linear { slope: f64, intercept: f64 },
    Const(f64),
}

impl Fit {
    pub(crate) fn eval(self, t: f64) -> f64 {
        match self {
            Fit::Power { coef, exp } => coef * t.powf(exp),
            Fit::Log { slope, intercept } => slope * t.ln() + intercept,
            Fit::Linear { slope, intercept } => slope * t + intercept,
            Fit::Const(value) => value,
        }
    }
}

/// A fit that changes with target length.
///
/// Lengths up to `low_max` use `low`, lengths from `high_min` on use `high`. Lengths in the
/// gap between the two ranges take the mean of both fitted values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Piecewise {
    Single(Fit),
    Split {
        low_max: i32,
        low: Fit,
        high_min: i32,
        high: Fit,
    },
}

impl Piecewise {
    pub(crate) fn eval(self, t: i32) -> f64 {
        let x = f64::from(t);
        match self {
            Piecewise::Single(fit) => fit.eval(x),
            Piecewise::Split {
                low_max,
                low,
                high_min,
                high,
            } => {
                if t <= low_max {
                    low.eval(x)
                } else if t >= high_min {
                    high.eval(x)
                } else {
                    (low.eval(x) + high.eval(x)) / 2.0
                }
            }
        }
    }
}

/// Two whole parameter sets with a hard switch between them and no blending.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Regime<T> {
    One(T),
    /// `low` up to and including `low_max`, `high` above it.
    Switch { low_max: i32, low: T, high: T },
}

impl<T: Copy> Regime<T> {
    pub(crate) fn select(self, t: i32) -> T {
        match self {
            Regime::One(fit) => fit,
            Regime::Switch { low_max, low, high } => {
                if t <= low_max {
                    low
                } else {
                    high
                }
            }
        }
    }
}

/// Round half away from zero to an integer window size.
///
/// NaN maps to zero; it only arises for the unset target length, whose rows are never valid.
pub(crate) fn round_to_int(value: f64) -> i32 {
    value.round() as i32
}
