use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::flags::Flags;

pub fn level(flags: &Flags) -> LevelFilter {
    if flags.is_set("debug") {
        LevelFilter::Debug
    } else if flags.is_set("quiet") {
        LevelFilter::Off
    } else {
        LevelFilter::Warn
    }
}

/// Diagnostics go to stderr so they never mix with command output.
/// A second call is a no-op.
pub fn init(flags: &Flags) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    let _ = TermLogger::init(level(flags), config, TerminalMode::Stderr, ColorChoice::Auto);
}
