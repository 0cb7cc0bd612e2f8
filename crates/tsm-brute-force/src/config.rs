use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tsm_core::{Error, Result};

/// How second-city branches are handed to workers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    /// Contiguous chunks fixed before the workers start.
    #[default]
    Static,
    /// Shared queue; an idle worker takes the next branch.
    Dynamic,
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::Static => f.write_str("static"),
            Schedule::Dynamic => f.write_str("dynamic"),
        }
    }
}

impl FromStr for Schedule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(Schedule::Static),
            "dynamic" => Ok(Schedule::Dynamic),
            other => Err(format!(
                "unknown schedule `{other}` (expected `static` or `dynamic`)"
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Requested worker count. Zero is rejected by [`SolverConfig::validate`].
    pub threads: usize,
    pub schedule: Schedule,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            threads: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            schedule: Schedule::default(),
        }
    }
}

impl SolverConfig {
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads,
            ..Self::default()
        }
    }

    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(Error::InvalidThreadCount(self.threads));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_parses_case_insensitively() {
        assert_eq!("static".parse::<Schedule>(), Ok(Schedule::Static));
        assert_eq!("Dynamic".parse::<Schedule>(), Ok(Schedule::Dynamic));
        assert!("guided".parse::<Schedule>().is_err());
        assert_eq!(Schedule::Dynamic.to_string(), "dynamic");
    }

    #[test]
    fn default_config_has_workers() {
        let cfg = SolverConfig::default();
        assert!(cfg.threads >= 1);
        assert_eq!(cfg.schedule, Schedule::Static);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_threads_rejected() {
        let err = SolverConfig::with_threads(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidThreadCount(0)));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: SolverConfig = serde_json::from_str(r#"{"schedule": "dynamic"}"#).unwrap();
        assert_eq!(cfg.schedule, Schedule::Dynamic);
        assert!(cfg.threads >= 1);

        let cfg: SolverConfig = serde_json::from_str(r#"{"threads": 3}"#).unwrap();
        assert_eq!(cfg.threads, 3);
        assert_eq!(cfg.schedule, Schedule::Static);
    }
}
