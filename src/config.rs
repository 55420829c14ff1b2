use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_path: None,
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `STATIC_DIR` and `ACTIVITIES_SEED_PATH`.
    /// Call `dotenvy::dotenv()` first if a `.env` file should apply.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port,
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_path: non_empty("ACTIVITIES_SEED_PATH").map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Next port up, or `None` when `port` is already the highest.
    pub fn fallback_bind_addr(&self) -> Option<String> {
        let port = self.port.checked_add(1)?;
        Some(format!("{}:{}", self.host, port))
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.fallback_bind_addr().as_deref(), Some("127.0.0.1:8001"));
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
            ("STATIC_DIR", "public"),
            ("ACTIVITIES_SEED_PATH", "seed.json"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn highest_port_has_no_fallback() {
        let config = AppConfig::from_lookup(lookup(&[("PORT", "65535")])).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:65535");
        assert_eq!(config.fallback_bind_addr(), None);
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "eighty"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("HOST", " "), ("PORT", "")])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
    }
}
