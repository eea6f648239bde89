use snafu::{OptionExt, ResultExt};
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::error::{InvalidBaseUrlSnafu, InvalidEnvSnafu, MissingEnvSnafu, ParseUrlSnafu, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.giphy.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything a client needs to reach the API.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: Url,
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads `GIPHY_API_KEY` (required), `GIPHY_BASE_URL` and `GIPHY_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = get("GIPHY_API_KEY")
            .filter(|key| !key.is_empty())
            .context(MissingEnvSnafu {
                name: "GIPHY_API_KEY",
            })?;

        let mut config = Config::new(api_key);

        if let Some(base) = get("GIPHY_BASE_URL") {
            config = config.with_base_url(&base)?;
        }

        if let Some(secs) = get("GIPHY_TIMEOUT_SECS") {
            let parsed: u64 = secs.trim().parse().ok().context(InvalidEnvSnafu {
                name: "GIPHY_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
            config.timeout = Duration::from_secs(parsed);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base: &str) -> Result<Self> {
        self.base_url = normalize_base_url(base)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Parses a base URL and makes sure relative endpoint paths land under it.
pub(crate) fn normalize_base_url(base: &str) -> Result<Url> {
    let mut url = Url::parse(base).context(ParseUrlSnafu { url: base })?;
    if url.cannot_be_a_base() {
        return InvalidBaseUrlSnafu { url: base }.fail();
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_key() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::MissingEnv { ref name } if name == "GIPHY_API_KEY"));

        let err = Config::from_lookup(lookup(&[("GIPHY_API_KEY", "")])).unwrap_err();
        assert!(matches!(err, Error::MissingEnv { .. }));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("GIPHY_API_KEY", "k")])).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GIPHY_API_KEY", "k"),
            ("GIPHY_BASE_URL", "http://localhost:8080/proxy"),
            ("GIPHY_TIMEOUT_SECS", " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/proxy/");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_bad_timeout() {
        let err = Config::from_lookup(lookup(&[
            ("GIPHY_API_KEY", "k"),
            ("GIPHY_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidEnv { ref value, .. } if value == "soon"));
    }

    #[test]
    fn test_base_url_rejects_opaque() {
        assert!(matches!(
            normalize_base_url("mailto:someone@example.com"),
            Err(Error::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(Error::ParseUrl { .. })
        ));
    }
}
