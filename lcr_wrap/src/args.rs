use anyhow::{anyhow, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use lcr_params::{Focus, TargetLength};
use log::warn;
use parameters_toml::UnsetTargetLength;
use std::convert::Infallible;
use std::io::Write;
use std::str::FromStr;

/// Command line of both parameter programs.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[clap(
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Args {
    /// prints help
    #[clap(short = 'h')]
    pub help: bool,

    /// focus of the parameters: 'diverse' or 'narrow'
    #[clap(short = 'f', value_name = "FOCUS", allow_hyphen_values = true)]
    pub focus: Option<String>,

    /// target length, in the range 5-300 inclusive
    #[clap(short = 'l', value_name = "LENGTH", allow_hyphen_values = true)]
    pub length: Option<LengthArg>,

    /// write the recommendations as JSON instead of the text report
    #[clap(long)]
    pub json: bool,

    // Stray operands are accepted and ignored.
    #[clap(hide = true)]
    pub operands: Vec<String>,
}

impl Args {
    /// Any `-f` value other than exactly `narrow` means DIVERSE.
    pub fn focus(&self) -> Focus {
        self.focus
            .as_deref()
            .map_or_else(Focus::default, Focus::from_arg)
    }
}

/// A `-l` value, read like C `%d`: leading whitespace, an optional sign and the leading
/// digits. Anything after the digits is ignored. A value without leading digits holds `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthArg(pub Option<i64>);

impl FromStr for LengthArg {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<LengthArg, Infallible> {
        let s = s.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits: &str = &digits[..digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len())];
        if digits.is_empty() {
            return Ok(LengthArg(None));
        }
        let magnitude = digits
            .bytes()
            .try_fold(0i64, |acc, b| {
                acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
            })
            .unwrap_or(i64::MAX);
        Ok(LengthArg(Some(if negative { -magnitude } else { magnitude })))
    }
}

/// How the target length is settled when `-l` is missing or out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    /// Replaces out-of-range values.
    pub fallback: TargetLength,
    pub unset: UnsetTargetLength,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        LengthPolicy {
            fallback: TargetLength::DEFAULT,
            unset: UnsetTargetLength::Sentinel,
        }
    }
}

impl LengthPolicy {
    /// Build the policy from parameters.toml.
    pub fn from_parameters() -> Result<LengthPolicy> {
        let default = *parameters_toml::default_target_length()?;
        let fallback = TargetLength::new(i64::from(default)).ok_or_else(|| {
            anyhow!(
                "default_target_length = {default} is outside the allowed range {}-{}",
                TargetLength::MIN,
                TargetLength::MAX
            )
        })?;
        Ok(LengthPolicy {
            fallback,
            unset: *parameters_toml::unset_target_length()?,
        })
    }

    /// Settle the target length, writing the out-of-range warning to `err`.
    pub fn resolve(&self, length: Option<LengthArg>, err: &mut impl Write) -> Result<TargetLength> {
        match length {
            Some(LengthArg(value)) => match value.and_then(TargetLength::new) {
                Some(target) => Ok(target),
                None => {
                    writeln!(
                        err,
                        " -l value is out of bounds, re-setting to a DEFAULT VALUE = {}",
                        self.fallback
                    )?;
                    Ok(self.fallback)
                }
            },
            None => match self.unset {
                UnsetTargetLength::Default => Ok(self.fallback),
                UnsetTargetLength::Sentinel => {
                    warn!(
                        "no target length given with -l, computing with the placeholder length {}",
                        TargetLength::UNSET
                    );
                    Ok(TargetLength::UNSET)
                }
            },
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("option {0} requires a value...")]
    MissingValue(String),

    #[error("unrecognized option: {0} ...")]
    Unrecognized(String),

    #[error("{0}")]
    Other(String),
}

impl UsageError {
    pub fn from_clap(err: &clap::Error) -> UsageError {
        let arg = match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => {
                arg.split_whitespace().next().unwrap_or_default().to_string()
            }
            _ => String::new(),
        };
        match err.kind() {
            ErrorKind::InvalidValue | ErrorKind::NoEquals => UsageError::MissingValue(arg),
            ErrorKind::UnknownArgument => UsageError::Unrecognized(arg),
            kind => UsageError::Other(kind.as_str().unwrap_or("invalid arguments").to_string()),
        }
    }
}
