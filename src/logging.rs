use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// The logger installed by the `macaque` binary.
pub static STDERR_LOGGER: StderrLogger = StderrLogger;

/// Writes log records to standard error as `LEVEL target > message`.
///
/// Program output goes to standard output, so diagnostics never mix with what
/// a script prints.
pub struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Nowhere left to report a failure to write to stderr.
            let _ = writeln!(std::io::stderr().lock(),
                             "{:<5} {} > {}",
                             record.level(),
                             record.target(),
                             record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Maps the number of `-v` flags to a level filter.
///
/// # Example
/// ```
/// use log::LevelFilter;
/// use macaque::logging::level_for;
///
/// assert_eq!(level_for(0), LevelFilter::Warn);
/// assert_eq!(level_for(2), LevelFilter::Debug);
/// assert_eq!(level_for(9), LevelFilter::Trace);
/// ```
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs [`STDERR_LOGGER`] as the global logger.
///
/// # Errors
/// Fails if another logger has already been installed.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    log::set_logger(&STDERR_LOGGER)?;
    log::set_max_level(level_for(verbosity));
    Ok(())
}
