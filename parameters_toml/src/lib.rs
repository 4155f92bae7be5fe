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

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// What to do when no target length is given on the command line.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnsetTargetLength {
    /// Compute with the placeholder length -1; every row then reports NA.
    Sentinel,
    /// Compute with `default_target_length`.
    Default,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// Behaviour when `-l` is omitted.
    unset_target_length: UnsetTargetLength,
    /// Substituted for out-of-range `-l` values, and for a missing `-l` when
    /// `unset_target_length = "default"`.
    default_target_length: i32,
}

const DEFAULT_PARAMETERS: Parameters = Parameters {
    unset_target_length: UnsetTargetLength::Sentinel,
    default_target_length: 15,
};

impl Default for Parameters {
    fn default() -> Self {
        DEFAULT_PARAMETERS
    }
}

static PARAMETERS: OnceLock<Result<Parameters>> = OnceLock::new();

/// Read a parameters file. Keys that are left out keep their default values.
pub fn load(path: &Path) -> Result<Parameters> {
    let s = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
    let parameters: Parameters =
        toml::from_str(&s).with_context(|| path.display().to_string())?;
    info!("loaded parameters from {}", path.display());
    Ok(parameters)
}

/// Return a reference to the global parameters.
/// The parameters may need to be loaded; if loading fails, return Err.
fn parameters() -> &'static Result<Parameters> {
    // TODO: use get_or_try_init once [#109737](https://github.com/rust-lang/rust/issues/109737) is stabilized
    PARAMETERS.get_or_init(|| {
        let path = std::env::current_exe()
            .context("Unable to locate the running executable")?
            .with_file_name("parameters.toml");
        if !path.exists() {
            info!(
                "could not find parameters.toml at {}, falling back to defaults",
                path.display()
            );
            Ok(DEFAULT_PARAMETERS)
        } else {
            load(&path)
        }
    })
}

macro_rules! parameter_getter {
    ($a:ident, $t:ty) => {
        pub fn $a() -> Result<&'static $t> {
            let val = match parameters() {
                Err(e) => return Err(anyhow::anyhow!("{e:#}")),
                Ok(p) => &p.$a,
            };
            if DEFAULT_PARAMETERS.$a != *val {
                warn!("using non-default {} = {:?}", stringify!($a), val);
            }
            Ok(val)
        }
    };
}

parameter_getter!(unset_target_length, UnsetTargetLength);
parameter_getter!(default_target_length, i32);

impl Parameters {
    pub fn unset_target_length(&self) -> UnsetTargetLength {
        self.unset_target_length
    }

    pub fn default_target_length(&self) -> i32 {
        self.default_target_length
    }
}
