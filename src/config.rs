use crate::{error::config::ConfigError, scanner::ScannerConfig};

static API_BASE_URL_VAR: &str = "AISLE_API_BASE_URL";
static SCANNER_CONTAINER_VAR: &str = "AISLE_SCANNER_CONTAINER";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Base URL of the external API; empty means the origin that served the page
    pub api_base_url: String,
    pub scanner: ScannerConfig,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// In the browser no variables are visible and every setting keeps its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base_url) = lookup(API_BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            let base_url = base_url.trim();
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(ConfigError::InvalidEnvValue {
                    var: API_BASE_URL_VAR.to_string(),
                    reason: format!("expected an http(s) URL, got {:?}", base_url),
                });
            }
            config.api_base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(target) = lookup(SCANNER_CONTAINER_VAR).filter(|v| !v.trim().is_empty()) {
            config.scanner.target = target.trim().to_string();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    /// Expect defaults when no variables are set
    #[test]
    fn defaults_without_variables() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.scanner.target, "#scanner-container");
    }

    /// Expect trailing slash to be stripped from the base URL
    #[test]
    fn strips_trailing_slash() {
        let config =
            Config::from_lookup(lookup(&[(API_BASE_URL_VAR, "https://shop.example.com/")]))
                .unwrap();

        assert_eq!(config.api_base_url, "https://shop.example.com");
    }

    /// Expect Error for a base URL without scheme
    #[test]
    fn rejects_base_url_without_scheme() {
        let result = Config::from_lookup(lookup(&[(API_BASE_URL_VAR, "shop.example.com")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == API_BASE_URL_VAR
        ));
    }

    /// Expect scanner container override to be applied
    #[test]
    fn overrides_scanner_container() {
        let config =
            Config::from_lookup(lookup(&[(SCANNER_CONTAINER_VAR, "#camera")])).unwrap();

        assert_eq!(config.scanner.target, "#camera");
    }
}
