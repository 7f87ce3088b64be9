//! User configuration at ~/.config/schedule/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::layout::{DEFAULT_MIN_EVENT_HEIGHT, DEFAULT_PIXELS_PER_HOUR, GridMetrics};
use crate::view::{DEFAULT_MONTH_CELL_EVENTS, ViewMode};

/// Grid and startup settings. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub default_view: ViewMode,
    pub pixels_per_hour: f64,
    pub min_event_height: f64,
    /// Events listed per month cell before "+N more"
    pub month_cell_events: usize,
    /// Start each session with the sample events
    pub seed: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            default_view: ViewMode::default(),
            pixels_per_hour: DEFAULT_PIXELS_PER_HOUR,
            min_event_height: DEFAULT_MIN_EVENT_HEIGHT,
            month_cell_events: DEFAULT_MONTH_CELL_EVENTS,
            seed: true,
        }
    }
}

impl ScheduleConfig {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("schedule");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template there
    /// first if nothing exists yet.
    pub fn load() -> ScheduleResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path (`~` is expanded). A missing file yields
    /// the defaults.
    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        let path = expand_path(path);

        let config: ScheduleConfig = Config::builder()
            .add_source(File::from(path.clone()).required(false))
            .build()
            .map_err(|e| ScheduleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ScheduleError::Config(e.to_string()))?;

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> ScheduleResult<()> {
        let path = expand_path(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ScheduleError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Create a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> ScheduleResult<()> {
        let defaults = Self::default();
        let contents = format!(
            "\
# schedule configuration

# View shown when no subcommand picks one (day, week or month):
# default_view = \"{}\"

# Hour grid scale:
# pixels_per_hour = {:.1}
# min_event_height = {:.1}

# Events listed in a month cell before \"+N more\":
# month_cell_events = {}

# Start each session with the sample events:
# seed = {}
",
            defaults.default_view,
            defaults.pixels_per_hour,
            defaults.min_event_height,
            defaults.month_cell_events,
            defaults.seed,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScheduleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ScheduleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn grid_metrics(&self) -> GridMetrics {
        GridMetrics {
            pixels_per_hour: self.pixels_per_hour,
            min_event_height: self.min_event_height,
        }
    }

    fn validate(&self) -> ScheduleResult<()> {
        if self.pixels_per_hour.is_nan() || self.pixels_per_hour <= 0.0 {
            return Err(ScheduleError::Config(format!(
                "pixels_per_hour must be positive, got {}",
                self.pixels_per_hour
            )));
        }
        if self.min_event_height.is_nan() || self.min_event_height < 0.0 {
            return Err(ScheduleError::Config(format!(
                "min_event_height cannot be negative, got {}",
                self.min_event_height
            )));
        }
        Ok(())
    }
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
