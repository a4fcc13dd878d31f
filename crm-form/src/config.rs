//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::Debug;
use secrecy::SecretString;
use serde::Deserialize;
use service::infra::http;
use smart_default::SmartDefault;
use url::Url;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Form configuration.
    pub form: Form,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Configuration of the server the form is submitted to.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// URL the page paths are relative to.
    #[default("http://127.0.0.1:5000".to_owned())]
    pub base_url: String,

    /// Timeout of a single request.
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,

    /// Session cookie to authenticate with, as a `name=value` pair.
    #[debug(skip)]
    pub session_cookie: Option<String>,
}

impl TryFrom<Server> for http::Config {
    type Error = url::ParseError;

    fn try_from(value: Server) -> Result<Self, Self::Error> {
        let Server {
            base_url,
            timeout,
            session_cookie,
        } = value;

        Ok(Self {
            base_url: Url::parse(&base_url)?,
            timeout,
            session_cookie: session_cookie.map(SecretString::from),
        })
    }
}

/// Form configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Form {
    /// Path to navigate to once a booking is saved, unless the page
    /// overrides it.
    #[default("/crm/new?saved=1".to_owned())]
    pub success_redirect: String,
}

impl From<Form> for service::Config {
    fn from(value: Form) -> Self {
        let Form { success_redirect } = value;
        Self { success_redirect }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use service::infra::http;

    use super::{Config, Server};

    #[test]
    fn defaults_to_local_server() {
        let conf = Config::default();

        assert_eq!(conf.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(conf.server.timeout, Duration::from_secs(30));
        assert!(conf.server.session_cookie.is_none());
        assert_eq!(
            service::Config::from(conf.form).success_redirect,
            "/crm/new?saved=1",
        );
        assert_eq!(tracing::Level::from(conf.log.level), tracing::Level::INFO);
    }

    #[test]
    fn converts_into_transport_config() {
        let conf = http::Config::try_from(Server {
            session_cookie: Some("session=abc".to_owned()),
            ..Server::default()
        })
        .unwrap();

        assert_eq!(conf.base_url.as_str(), "http://127.0.0.1:5000/");
        assert!(conf.session_cookie.is_some());
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(http::Config::try_from(Server {
            base_url: "not a url".to_owned(),
            ..Server::default()
        })
        .is_err());
    }

    #[test]
    fn hides_session_cookie() {
        let server = Server {
            session_cookie: Some("session=abc".to_owned()),
            ..Server::default()
        };

        assert!(!format!("{server:?}").contains("abc"));
    }
}
