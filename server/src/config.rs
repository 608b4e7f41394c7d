use std::{net::SocketAddr, path::PathBuf};

use thiserror::Error;
use url::Url;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8880";
pub const DEFAULT_SHARE_BASE_URL: &str = "https://eventsify.app/event/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR {value:?} is not a socket address: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("SHARE_BASE_URL {value:?} is invalid: {reason}")]
    ShareBaseUrl { value: String, reason: String },
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Always ends with `/`, so slugs append cleanly.
    pub share_base_url: Url,
    /// JSON array of event records. The built-in snapshot is used when
    /// unset.
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|source| {
            ConfigError::BindAddr {
                value: bind_addr.clone(),
                source,
            }
        })?;

        let share_base_url = parse_share_base_url(
            &lookup("SHARE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SHARE_BASE_URL.to_string()),
        )?;

        let seed_path = lookup("SEED_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            share_base_url,
            seed_path,
        })
    }
}

fn parse_share_base_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| {
        ConfigError::ShareBaseUrl {
            value: value.to_string(),
            reason,
        }
    };

    let mut url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.bind_addr.port(), 8880);
        assert_eq!(config.share_base_url.as_str(), DEFAULT_SHARE_BASE_URL);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config =
            config(&[("SHARE_BASE_URL", "https://evt.example.com/e")]).unwrap();

        assert_eq!(config.share_base_url.as_str(), "https://evt.example.com/e/");
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(matches!(
            config(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::BindAddr { .. })
        ));
        assert!(matches!(
            config(&[("SHARE_BASE_URL", "not a url")]),
            Err(ConfigError::ShareBaseUrl { .. })
        ));
        assert!(matches!(
            config(&[("SHARE_BASE_URL", "ftp://files.example.com/")]),
            Err(ConfigError::ShareBaseUrl { .. })
        ));
    }

    #[test]
    fn test_seed_path() {
        let config = config(&[("SEED_PATH", "/srv/events.json")]).unwrap();
        assert_eq!(config.seed_path, Some(PathBuf::from("/srv/events.json")));
    }
}
