use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{LifeError, Result, RuleThresholds, Seeder};

/// Game settings supplied by the host.
///
/// Field names follow the camelCase keys of the JSON configuration file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Side length of the square board.
    pub number_of_tiles: usize,
    /// Tick period.
    pub speed_in_milliseconds: u64,
    /// Share of cells alive after seeding, strictly between 0 and 100.
    pub alive_start_percentage: f64,
    /// Offset before the first tick; half a period when unset.
    pub start_delay_milliseconds: Option<u64>,
    /// Fixed seed for reproducible boards; OS entropy when unset.
    pub seed: Option<u64>,
    pub rule: RuleThresholds,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            number_of_tiles: 100,
            speed_in_milliseconds: 100,
            alive_start_percentage: 5.0,
            start_delay_milliseconds: None,
            seed: None,
            rule: RuleThresholds::default(),
        }
    }
}

impl Configuration {
    /// Parse and validate a JSON document. Missing keys take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the core cannot run with. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        if self.number_of_tiles == 0 {
            return Err(LifeError::InvalidConfiguration(
                "number of tiles must be positive".to_owned(),
            ));
        }
        if self.speed_in_milliseconds == 0 {
            return Err(LifeError::InvalidConfiguration(
                "speed in milliseconds must be positive".to_owned(),
            ));
        }
        Seeder::new(self.alive_start_percentage)?;
        self.rule.validate()
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.speed_in_milliseconds)
    }

    pub fn start_delay(&self) -> Duration {
        self.start_delay_milliseconds
            .map(Duration::from_millis)
            .unwrap_or_else(|| self.period() / 2)
    }
}
