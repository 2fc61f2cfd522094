//! Pricing configuration.
//!
//! Loaded from environment variables with fallback to defaults, then
//! overridden by command-line flags.
//!
//! | Variable          | Flag      | Default              |
//! |-------------------|-----------|----------------------|
//! | `PRICING_DB_PATH` | `--db`    | `./pricing_dev.db`   |
//! | `PRICING_TODAY`   | `--today` | local system date    |
//! | -                 | `--json`  | table output         |

use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;

use crate::pool::DbConfig;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "./pricing_dev.db";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Runtime configuration for the pricing tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// SQLite database file.
    pub database_path: PathBuf,

    /// Fixed resolution date. `None` means "read the clock".
    pub today: Option<NaiveDate>,

    /// Print results as JSON instead of a table.
    pub json_output: bool,

    /// `--help` was given.
    pub show_help: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            today: None,
            json_output: false,
            show_help: false,
        }
    }
}

impl PricingConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = PricingConfig::default();

        if let Some(path) = lookup("PRICING_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup("PRICING_TODAY") {
            config.today = Some(parse_date("PRICING_TODAY", &raw)?);
        }

        Ok(config)
    }

    /// Applies command-line flags on top of the loaded values.
    ///
    /// `args` excludes the program name.
    pub fn with_args<I>(mut self, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue("--db".to_string()))?;
                    self.database_path = PathBuf::from(path);
                }
                "--today" => {
                    let raw = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue("--today".to_string()))?;
                    self.today = Some(parse_date("--today", &raw)?);
                }
                "--json" => self.json_output = true,
                "--help" | "-h" => self.show_help = true,
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        Ok(self)
    }

    /// The date prices are resolved for: the configured override, else the
    /// local calendar date.
    pub fn resolution_date(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Pool settings for the configured database file.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path.clone())
    }
}

fn parse_date(source: &str, raw: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ConfigError::InvalidValue(format!("{source} (expected YYYY-MM-DD, got '{raw}')")))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing value after {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
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
        move |key| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = PricingConfig::load_from(lookup(&[])).unwrap();
        assert_eq!(config, PricingConfig::default());
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn test_env_values() {
        let config = PricingConfig::load_from(lookup(&[
            ("PRICING_DB_PATH", "/var/lib/pricing.db"),
            ("PRICING_TODAY", "2026-10-18"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/lib/pricing.db"));
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2026, 10, 18));
        assert_eq!(config.resolution_date(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    }

    #[test]
    fn test_invalid_env_date() {
        let err = PricingConfig::load_from(lookup(&[("PRICING_TODAY", "18/10/2026")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref m) if m.starts_with("PRICING_TODAY")));
    }

    #[test]
    fn test_flags_override_env() {
        let config = PricingConfig::load_from(lookup(&[("PRICING_DB_PATH", "env.db")]))
            .unwrap()
            .with_args(args(&["--db", "flag.db", "--today", "2026-01-31", "--json"]))
            .unwrap();

        assert_eq!(config.database_path, PathBuf::from("flag.db"));
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2026, 1, 31));
        assert!(config.json_output);
        assert!(!config.show_help);
        assert_eq!(config.db_config().database_path, PathBuf::from("flag.db"));
    }

    #[test]
    fn test_bad_flags() {
        let base = PricingConfig::default();

        assert!(matches!(
            base.clone().with_args(args(&["--db"])),
            Err(ConfigError::MissingValue(_))
        ));
        assert!(matches!(
            base.clone().with_args(args(&["--today", "tomorrow"])),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            base.with_args(args(&["--verbose"])),
            Err(ConfigError::UnknownArgument(ref a)) if a == "--verbose"
        ));
    }

    #[test]
    fn test_help_flag() {
        let config = PricingConfig::default().with_args(args(&["-h"])).unwrap();
        assert!(config.show_help);
    }
}
