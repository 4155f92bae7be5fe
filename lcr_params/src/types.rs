use serde::Serialize;
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Requested length, in residues, of the low-complexity region to be detected.
///
/// Lengths supplied by the user are restricted to `[MIN, MAX]`. The only value outside that
/// range that can reach the recommender is [`TargetLength::UNSET`], which stands for a
/// length that was never given on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetLength(i32);

impl TargetLength {
    pub const MIN: i32 = 5;
    pub const MAX: i32 = 300;
    /// Replacement for out-of-range lengths.
    pub const DEFAULT: TargetLength = TargetLength(15);
    /// Placeholder for a length that was never supplied.
    pub const UNSET: TargetLength = TargetLength(-1);

    /// Return the length if it lies in `[MIN, MAX]`.
    pub fn new(length: i64) -> Option<TargetLength> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&length) {
            Some(TargetLength(length as i32))
        } else {
            None
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }

    pub fn is_unset(self) -> bool {
        self == Self::UNSET
    }

    pub(crate) fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for TargetLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How tightly the parameters are tuned around the target length.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, Serialize,
)]
pub enum Focus {
    /// A typical amount of length variance is allowed.
    #[default]
    #[strum(serialize = "DIVERSE")]
    #[serde(rename = "DIVERSE")]
    Diverse,
    /// Length variance is minimized.
    #[strum(serialize = "NARROW")]
    #[serde(rename = "NARROW")]
    Narrow,
}

impl Focus {
    /// Interpret a `-f` value. Only the exact string `narrow` selects [`Focus::Narrow`];
    /// anything else, including misspellings, falls back to [`Focus::Diverse`].
    pub fn from_arg(value: &str) -> Focus {
        if value == "narrow" {
            Focus::Narrow
        } else {
            Focus::Diverse
        }
    }

    /// One-line explanation printed under the report header.
    pub fn explanation(self) -> &'static str {
        match self {
            Focus::Diverse => {
                "A DIVERSE focus means that a typical or average level of length variance \
                 for the annotated regions is allowed."
            }
            Focus::Narrow => {
                "A NARROW focus means that length variance is minimized for the annotated regions."
            }
        }
    }
}

/// Approximate percentage of proteins expected to carry at least one annotated region.
///
/// Declaration order is the order rows are reported in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum Coverage {
    Two,
    Five,
    Ten,
    TwentyFive,
    Forty,
}

impl Coverage {
    pub fn percent(self) -> u32 {
        match self {
            Coverage::Two => 2,
            Coverage::Five => 5,
            Coverage::Ten => 10,
            Coverage::TwentyFive => 25,
            Coverage::Forty => 40,
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{}%", self.percent())
    }
}

impl Serialize for Coverage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.percent())
    }
}

/// The detection program the parameters are recommended for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Convention {
    /// fLPS: window bounds `m`, `M` and a binomial p-value threshold `t`.
    #[strum(serialize = "fLPS")]
    #[serde(rename = "fLPS")]
    Flps,
    /// SEG: window length `L` with trigger and extension entropies `K1`, `K2`.
    #[strum(serialize = "SEG")]
    #[serde(rename = "SEG")]
    Seg,
}
