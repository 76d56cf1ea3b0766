use core::fmt::{Debug, Display};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "enrollment.toml";
pub const ENV_PREFIX: &str = "ENROLLMENT_";

/// Bounds for a single activity's roll and waitlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterLimits {
    pub min_enrollment_cap: usize,
    pub max_enrollment_cap: usize,
    pub waitlist_capacity: usize,
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self {
            min_enrollment_cap: 10,
            max_enrollment_cap: 250,
            waitlist_capacity: 10,
        }
    }
}

impl RosterLimits {
    #[must_use]
    pub const fn allows_cap(&self, enrollment_cap: usize) -> bool {
        enrollment_cap >= self.min_enrollment_cap && enrollment_cap <= self.max_enrollment_cap
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_enrollment_cap == 0 {
            return Err(ConfigError::Roster("minimum enrollment cap must be positive"));
        }
        if self.min_enrollment_cap > self.max_enrollment_cap {
            return Err(ConfigError::Roster(
                "minimum enrollment cap is above the maximum",
            ));
        }
        if self.waitlist_capacity == 0 {
            return Err(ConfigError::Roster("waitlist capacity must be positive"));
        }
        Ok(())
    }
}

/// Range a student's maximum credit load may be set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentLimits {
    pub min_credits: u8,
    pub max_credits: u8,
}

impl Default for StudentLimits {
    fn default() -> Self {
        Self {
            min_credits: 3,
            max_credits: 18,
        }
    }
}

impl StudentLimits {
    #[must_use]
    pub const fn allows_max_credits(&self, max_credits: u8) -> bool {
        max_credits >= self.min_credits && max_credits <= self.max_credits
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_credits == 0 {
            return Err(ConfigError::Student("maximum credits must be positive"));
        }
        if self.min_credits > self.max_credits {
            return Err(ConfigError::Student("minimum credits are above the maximum"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub roster: RosterLimits,
    pub student: StudentLimits,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.roster.validate()?;
        self.student.validate()
    }
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] figment::Error),
    #[error("invalid roster limits: {0}")]
    Roster(&'static str),
    #[error("invalid student limits: {0}")]
    Student(&'static str),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Built-in defaults, overridden by `enrollment.toml`, overridden by
/// `ENROLLMENT_` environment variables (`ENROLLMENT_ROSTER__WAITLIST_CAPACITY=5`).
#[must_use]
pub fn figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

pub fn get_config() -> Result<Config, ConfigError> {
    let config: Config = figment().extract()?;
    config.validate()?;
    Ok(config)
}
