//! Logger setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Initialise log4rs from a YAML file.
///
/// Falls back to warnings on stderr when the file is missing or invalid, so
/// stdout only ever carries the merge result.
pub fn init_logging(log_config: &Path) -> Result<(), Box<dyn Error>> {
    match log4rs::init_file(log_config, Default::default()) {
        Ok(()) => {
            log::debug!("Logging configured from {}", log_config.display());
            Ok(())
        }
        Err(e) => {
            log4rs::init_config(stderr_config(LevelFilter::Warn)?)?;
            log::debug!("Could not load {}: {e}", log_config.display());
            Ok(())
        }
    }
}

/// Console-only config writing records at `level` and above to stderr.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_config() {
        let config = stderr_config(LevelFilter::Info).expect("Error building log config");
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.appenders().len(), 1);
    }
}
