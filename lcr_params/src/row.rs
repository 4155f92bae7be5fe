use crate::types::Coverage;
use serde::Serialize;
use std::fmt;

/// Window bounds and p-value threshold for fLPS.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct FlpsParams {
    pub small_m: i32,
    pub big_m: i32,
    /// The threshold is `10^threshold_exponent`.
    pub threshold_exponent: f64,
}

impl FlpsParams {
    pub fn threshold(&self) -> f64 {
        10f64.powf(self.threshold_exponent)
    }
}

/// Window length and entropy thresholds for SEG.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SegParams {
    pub window: i32,
    pub k1: f64,
    pub k2: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Params {
    Flps(FlpsParams),
    Seg(SegParams),
}

/// The bounds a rejected row is reported against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotAvailable {
    /// fLPS: target length outside `[min_length, max_length]` or a threshold above 0.001.
    LengthOrThreshold { min_length: i32, max_length: i32 },
    /// SEG: target length outside `[min_length, max_length]` or K2 above 4.2.
    LengthOrEntropy { min_length: i32, max_length: i32 },
}

impl fmt::Display for NotAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NotAvailable::LengthOrThreshold {
                min_length,
                max_length,
            } => write!(
                f,
                "NA [ target length <{min_length} OR >{max_length}, OR t>0.001]"
            ),
            NotAvailable::LengthOrEntropy {
                min_length,
                max_length,
            } => write!(
                f,
                "NA [ target length <{min_length} OR >{max_length}, OR K2>4.2]"
            ),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOutcome {
    Valid(Params),
    NotAvailable(NotAvailable),
}

/// One line of the recommendation: a coverage level and what was computed for it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ParameterRow {
    pub coverage: Coverage,
    pub outcome: RowOutcome,
}

impl ParameterRow {
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, RowOutcome::Valid(_))
    }

    pub fn params(&self) -> Option<&Params> {
        match &self.outcome {
            RowOutcome::Valid(params) => Some(params),
            RowOutcome::NotAvailable(_) => None,
        }
    }
}

/// Formats as the report line, without the trailing newline.
impl fmt::Display for ParameterRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\t{}\t\t\t", self.coverage)?;
        match &self.outcome {
            RowOutcome::Valid(Params::Flps(p)) => write!(
                f,
                "{}\t{}\t{}",
                p.small_m,
                p.big_m,
                c_exponential(p.threshold(), 1)
            ),
            RowOutcome::Valid(Params::Seg(p)) => {
                write!(f, "{}\t{:.2}\t{:.2}", p.window, p.k1, p.k2)
            }
            RowOutcome::NotAvailable(na) => write!(f, "{na}"),
        }
    }
}

/// Format like printf `%.Ne`: the exponent always carries a sign and at least two digits.
pub fn c_exponential(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return formatted;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}
