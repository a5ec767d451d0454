use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::app_dirs::AppDirs;
use crate::runtime::{
    Pacing, BETWEEN_TRIALS_DELAY, COUNTDOWN_STEP, FAREWELL_DELAY, GET_READY_DELAY,
};
use crate::session::{SessionConfig, DEFAULT_TRIALS};
use crate::word_generator::{DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS};
use crate::word_list::{DEFAULT_WORD_LIST_PATH, DEFAULT_WORD_LIST_SIZE};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub word_list_path: PathBuf,
    pub word_list_size: usize,
    pub trials: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub ready_delay_ms: u64,
    pub countdown_step_ms: u64,
    pub between_trials_ms: u64,
    pub farewell_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_list_path: PathBuf::from(DEFAULT_WORD_LIST_PATH),
            word_list_size: DEFAULT_WORD_LIST_SIZE,
            trials: DEFAULT_TRIALS,
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            ready_delay_ms: GET_READY_DELAY.as_millis() as u64,
            countdown_step_ms: COUNTDOWN_STEP.as_millis() as u64,
            between_trials_ms: BETWEEN_TRIALS_DELAY.as_millis() as u64,
            farewell_delay_ms: FAREWELL_DELAY.as_millis() as u64,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_list_size == 0 {
            return Err(ConfigError::Invalid("word list size must be at least 1".into()));
        }
        if self.trials == 0 {
            return Err(ConfigError::Invalid("at least one trial is required".into()));
        }
        if self.min_words == 0 {
            return Err(ConfigError::Invalid("trials need at least one word".into()));
        }
        if self.min_words >= self.max_words {
            return Err(ConfigError::Invalid(format!(
                "min words ({}) must be below max words ({})",
                self.min_words, self.max_words
            )));
        }
        Ok(())
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            get_ready: Duration::from_millis(self.ready_delay_ms),
            countdown_step: Duration::from_millis(self.countdown_step_ms),
            between_trials: Duration::from_millis(self.between_trials_ms),
            farewell: Duration::from_millis(self.farewell_delay_ms),
        }
    }

    /// Zero every pause
    pub fn without_delays(mut self) -> Self {
        self.ready_delay_ms = 0;
        self.countdown_step_ms = 0;
        self.between_trials_ms = 0;
        self.farewell_delay_ms = 0;
        self
    }

    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        self.validate()?;
        Ok(SessionConfig {
            trials: self.trials,
            word_count: self.min_words..self.max_words,
            pacing: self.pacing(),
        })
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing or unreadable files fall back to the defaults
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => {
                info!(path = %self.path.display(), "loaded config");
                cfg
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring unparsable config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(std::io::Error::other)?;
        fs::write(&self.path, data)?;
        info!(path = %self.path.display(), "saved config");
        Ok(())
    }
}
