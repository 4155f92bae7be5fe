//! SEGparameters: recommended SEG parameters for a target region length.

use lcr_params::Convention;
use std::process::ExitCode;

fn main() -> ExitCode {
    lcr_wrap::main_for(Convention::Seg)
}
