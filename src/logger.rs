use chrono::Local;
use colored::Colorize;
use log::{Level, LevelFilter};

const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Maps the number of `-v` flags to a level; warnings are always shown.
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger, writing to stderr so that results on stdout
/// stay clean.
pub fn init(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new().format(|out, message, record| {
                             let level = match record.level() {
                                 Level::Error => "ERROR".red().bold(),
                                 Level::Warn => "WARN ".yellow().bold(),
                                 Level::Info => "INFO ".green().bold(),
                                 Level::Debug => "DEBUG".blue().bold(),
                                 Level::Trace => "TRACE".magenta().bold(),
                             };
                             out.finish(format_args!("[{}] [{level}] [{}] {message}",
                                                     Local::now().format(TIMESTAMP_FORMAT),
                                                     record.target()));
                         })
                         .level(level)
                         .chain(std::io::stderr())
                         .apply()?;
    Ok(())
}
