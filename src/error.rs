use chromiumoxide::error::CdpError;

use crate::parse;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Parse(parse::Error),
    Request(reqwest::Error),
    Browser(String),
    Csv(csv::Error),
    Io(std::io::Error),
    Config(String),
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

impl From<CdpError> for Error {
    fn from(e: CdpError) -> Self {
        Error::Browser(e.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl Error {
    pub fn config_error(var: &str, msg: impl Display) -> Self {
        Error::Config(format!("{var}: {msg}"))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Request(e) => write!(f, "Request error: {}", e),
            Error::Browser(e) => write!(f, "Browser error: {}", e),
            Error::Csv(e) => write!(f, "Csv error: {}", e),
            Error::Io(e) => write!(f, "Io error: {}", e),
            Error::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_variable() {
        let e = Error::config_error("FOUNDATIONS_RENDER_WAIT_MS", "invalid digit found in string");
        assert_eq!(
            e.to_string(),
            "Config error: FOUNDATIONS_RENDER_WAIT_MS: invalid digit found in string"
        );
    }

    #[test]
    fn test_from_parse_error() {
        let e: Error = parse::Error::html_parse_error("table not found").into();
        assert!(matches!(e, Error::Parse(parse::Error::HtmlParse(_))));
        assert_eq!(e.to_string(), "Parse error: HTML Parse Error: table not found");
    }
}
