//! Logger setup for the binaries.

use std::path::Path;

use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger,
    LoggerHandle, Naming,
};

/// Log to stderr. `RUST_LOG` overrides `level`.
pub fn init_stderr(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .format(colored_default_format)
        .start()
}

/// Log to rotating files under `dir`, keeping the terminal free for the UI.
/// `RUST_LOG` overrides `level`.
pub fn init_file(level: &str, dir: &Path) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .log_to_file(FileSpec::default().directory(dir))
        .format(opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()
}
