//! Runtime configuration for hosting a game
//!
//! Reads optional settings from the environment:
//!
//! | Variable                | Meaning                                     | Default   |
//! |-------------------------|---------------------------------------------|-----------|
//! | `DEBATE_EVIDENCE_PATH`  | JSON evidence table to load                 | built-in  |
//! | `DEBATE_HINT_INTERVAL`  | attempts between automatic hints, 0 = never | 3         |
//! | `DEBATE_SEED`           | seed for rebuttal and hint selection        | OS random |

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::evidence::EvidenceTable;
use crate::random::{RandomSource, StdRandom};

pub const DEFAULT_HINT_INTERVAL: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// External evidence table; `None` uses the built-in one
    pub evidence_path: Option<PathBuf>,
    /// Attempts between automatic hints (0 disables them)
    pub hint_interval: u32,
    /// Fixed seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            evidence_path: None,
            hint_interval: DEFAULT_HINT_INTERVAL,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            evidence_path: lookup("DEBATE_EVIDENCE_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            hint_interval: parse_var(&lookup, "DEBATE_HINT_INTERVAL")?
                .unwrap_or(DEFAULT_HINT_INTERVAL),
            seed: parse_var(&lookup, "DEBATE_SEED")?,
        })
    }

    /// Load and validate the configured evidence table
    pub fn load_table(&self) -> Result<Arc<EvidenceTable>, ConfigError> {
        let table = match &self.evidence_path {
            Some(path) => EvidenceTable::from_path(path)?,
            None => EvidenceTable::builtin()?,
        };
        Ok(Arc::new(table))
    }

    /// Random source honoring the configured seed
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(StdRandom::seeded(seed)),
            None => Box::new(StdRandom::from_entropy()),
        }
    }

    /// Whether a hint is due after this many attempts
    pub fn hint_due(&self, attempts: u32) -> bool {
        self.hint_interval != 0 && attempts != 0 && attempts % self.hint_interval == 0
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(ConfigError::InvalidEnv {
                name: name.to_string(),
                value,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.load_table().unwrap().len(), 5);
    }

    #[test]
    fn test_reads_variables() {
        let config = GameConfig::from_lookup(lookup(&[
            ("DEBATE_EVIDENCE_PATH", "/etc/debate/evidence.json"),
            ("DEBATE_HINT_INTERVAL", "5"),
            ("DEBATE_SEED", " 42 "),
        ]))
        .unwrap();
        assert_eq!(
            config.evidence_path,
            Some(PathBuf::from("/etc/debate/evidence.json"))
        );
        assert_eq!(config.hint_interval, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_number() {
        let err = GameConfig::from_lookup(lookup(&[("DEBATE_SEED", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { name, .. } if name == "DEBATE_SEED"));
    }

    #[test]
    fn test_hint_due() {
        let config = GameConfig::default();
        assert!(!config.hint_due(0));
        assert!(!config.hint_due(2));
        assert!(config.hint_due(3));
        assert!(config.hint_due(6));

        let never = GameConfig {
            hint_interval: 0,
            ..GameConfig::default()
        };
        assert!(!never.hint_due(3));
    }

    #[test]
    fn test_missing_table_file() {
        let config = GameConfig {
            evidence_path: Some(PathBuf::from("/nonexistent/evidence.json")),
            ..GameConfig::default()
        };
        assert!(matches!(config.load_table(), Err(ConfigError::Io(_))));
    }
}
