use std::{env, path::PathBuf, str::FromStr, time::Duration};

use url::Url;

use crate::Error;

pub const SEARCH_URL: &str =
    "https://www.wellsfargo.com/private-foundations/search-results/#searchtab";
pub const BASE_URL: &str = "https://www.wellsfargo.com";
pub const RENDER_WAIT: Duration = Duration::from_secs(2);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime settings, read from `FOUNDATIONS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub search_url: Url,
    pub base_url: Url,
    pub out_dir: PathBuf,
    pub render_wait: Duration,
    pub headful: bool,
    pub chrome: Option<PathBuf>,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: Url::parse(SEARCH_URL).expect("search url should be valid"),
            base_url: Url::parse(BASE_URL).expect("base url should be valid"),
            out_dir: PathBuf::from("."),
            render_wait: RENDER_WAIT,
            headful: false,
            chrome: None,
            request_timeout: REQUEST_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let mut config = Self::default();
        if let Some(v) = lookup("FOUNDATIONS_SEARCH_URL") {
            config.search_url = parse_var("FOUNDATIONS_SEARCH_URL", &v)?;
        }
        if let Some(v) = lookup("FOUNDATIONS_BASE_URL") {
            config.base_url = parse_var("FOUNDATIONS_BASE_URL", &v)?;
        }
        if let Some(v) = lookup("FOUNDATIONS_OUT_DIR") {
            config.out_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("FOUNDATIONS_RENDER_WAIT_MS") {
            config.render_wait = Duration::from_millis(parse_var("FOUNDATIONS_RENDER_WAIT_MS", &v)?);
        }
        if let Some(v) = lookup("FOUNDATIONS_HEADFUL") {
            config.headful = !matches!(v.trim().to_ascii_lowercase().as_str(), "" | "0" | "false");
        }
        if let Some(v) = lookup("FOUNDATIONS_CHROME") {
            config.chrome = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("FOUNDATIONS_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(parse_var("FOUNDATIONS_TIMEOUT_SECS", &v)?);
        }
        if let Some(v) = lookup("FOUNDATIONS_USER_AGENT") {
            config.user_agent = v;
        }
        Ok(config)
    }
}

fn parse_var<T>(var: &str, value: &str) -> crate::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::config_error(var, e))
}
