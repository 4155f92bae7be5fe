// Logger for the command line programs. Output goes to stderr so that the report on
// stdout stays clean.

use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Install the logger. `RUST_LOG` overrides the default `warn` level.
pub fn init_log() {
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}
