use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LogConfig;

/// Install a global file logger as described by `config`.
///
/// Returns `None` when no log directory is configured or a global subscriber is already set.
/// Otherwise the returned guard must be kept alive for as long as logs should be flushed.
pub fn init_logging(config: &LogConfig) -> Option<WorkerGuard> {
    let directory = config.directory.as_ref()?;
    let appender = tracing_appender::rolling::never(directory, &config.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(config.level)
        .with_ansi(false)
        .try_init();

    match installed {
        Ok(()) => {
            tracing::info!(
                "Logging to {} at level {}",
                directory.join(&config.file_name).display(),
                config.level
            );
            Some(guard)
        }
        Err(e) => {
            eprintln!("Failed to set up logging: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_directory_disables_logging() {
        assert!(init_logging(&LogConfig::default()).is_none());
    }
}
