use std::{path::PathBuf, str::FromStr};

use crate::{
    error::{MazeError, Result},
    generators::{generate, validate_dimensions},
    maze::{Coord, Grid},
};

/// Parameters of a maze generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: u16,
    pub height: u16,
    /// Seed for reproducible mazes. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 31,
            height: 31,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.width, self.height)
    }

    /// Entrance cell: row 1, column 0.
    pub fn entrance(&self) -> Coord {
        (0, 1)
    }

    /// Exit cell: row `height - 2`, column `width - 1`.
    pub fn exit(&self) -> Coord {
        (self.width.saturating_sub(1), self.height.saturating_sub(2))
    }

    pub fn generate(&self) -> Result<Grid> {
        generate(self.width, self.height, self.seed)
    }
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory of the log file. Logging is disabled when `None`.
    pub directory: Option<PathBuf>,
    pub file_name: String,
    pub level: tracing::Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: "mazest.log".to_string(),
            level: tracing::Level::INFO,
        }
    }
}

impl LogConfig {
    pub const DIR_ENV: &'static str = "MAZEST_LOG_DIR";
    pub const LEVEL_ENV: &'static str = "MAZEST_LOG_LEVEL";

    /// Read the log directory and level from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key-value source, falling back to defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(Self::DIR_ENV).filter(|d| !d.trim().is_empty()) {
            config.directory = Some(PathBuf::from(dir));
        }
        if let Some(level) = lookup(Self::LEVEL_ENV) {
            config.level = tracing::Level::from_str(level.trim()).map_err(|_| {
                MazeError::InvalidConfig(format!(
                    "{} has invalid level '{}'",
                    Self::LEVEL_ENV,
                    level
                ))
            })?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_maze_config() {
        let config = MazeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.entrance(), (0, 1));
        assert_eq!(config.exit(), (30, 29));
    }

    #[test]
    fn test_invalid_maze_config() {
        assert_eq!(
            MazeConfig::new(10, 11).validate(),
            Err(MazeError::InvalidDimensions {
                width: 10,
                height: 11
            })
        );
    }

    #[test]
    fn test_config_exit_matches_grid() {
        let config = MazeConfig::new(9, 7).with_seed(3);
        let grid = config.generate().unwrap();
        assert_eq!(grid.entrance(), config.entrance());
        assert_eq!(grid.exit(), config.exit());
    }

    #[test]
    fn test_log_config_from_lookup() {
        let env = HashMap::from([
            (LogConfig::DIR_ENV, "/tmp/mazest".to_string()),
            (LogConfig::LEVEL_ENV, "debug".to_string()),
        ]);
        let config = LogConfig::from_lookup(|key| env.get(key).cloned()).unwrap();
        assert_eq!(config.directory, Some(PathBuf::from("/tmp/mazest")));
        assert_eq!(config.level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_log_config_defaults() {
        let config = LogConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_log_config_bad_level() {
        let result = LogConfig::from_lookup(|key| {
            (key == LogConfig::LEVEL_ENV).then(|| "loud".to_string())
        });
        assert!(matches!(result, Err(MazeError::InvalidConfig(_))));
    }
}
