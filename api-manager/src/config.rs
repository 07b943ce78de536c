use requesthandler::QueueName;
use serde::Deserialize;
use servicehandler::dbhandler;
use std::collections::HashSet;
use std::fs::File;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not load config from file: {0}")]
    LoadError(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Port cannot be 0")]
    InvalidPort,

    #[error("Request timeout cannot be 0")]
    InvalidTimeout,

    #[error("Empty publisher name")]
    EmptyPublisher,

    #[error("Duplicate upstream queue: {0}")]
    DuplicateUpstream(QueueName),
}

fn default_publisher() -> String {
    "api-manager".into()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Health, readiness and metric definition endpoints.
    pub admin_listener: Listener,
    /// Name placed on every request sent to the managers.
    #[serde(default = "default_publisher")]
    pub publisher: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Endpoint of each manager, keyed by its request queue.
    pub upstreams: Vec<UpstreamConfig>,
    #[serde(default)]
    pub accesskey_cache: AccesskeyCacheConfig,
    pub logging: Option<LoggingConfig>,
    pub metrics: Option<MetricsConfig>,
}

impl Config {
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let data = serde_yaml::from_reader(file)?;

        Ok(data)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.admin_listener.validate()?;

        if self.request_timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.publisher.is_empty() {
            return Err(ValidationError::EmptyPublisher);
        }

        let mut queues = HashSet::new();
        for upstream in &self.upstreams {
            if !queues.insert(upstream.queue) {
                return Err(ValidationError::DuplicateUpstream(upstream.queue));
            }
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Listener {
    pub host: String,
    pub port: u16,
}

impl Listener {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpstreamConfig {
    pub queue: QueueName,
    pub url: Url,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AccesskeyCacheConfig {
    pub size: u64,
    pub ttl_secs: u64,
}

impl Default for AccesskeyCacheConfig {
    fn default() -> Self {
        AccesskeyCacheConfig {
            size: dbhandler::DEFAULT_SIZE,
            ttl_secs: dbhandler::DEFAULT_TTL_SECS,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub sentry_dsn: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MetricsConfig {
    pub statsd_host: String,
    pub statsd_port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp_file(s: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        write!(tmp, "{}", s).expect("write yaml");

        tmp
    }

    const FULL_CONFIG: &str = r#"
admin_listener:
    host: "127.0.0.1"
    port: 9001
publisher: api-manager-1
request_timeout_ms: 5000
upstreams:
    - queue: call
      url: "http://call-manager.bin-manager:8080"
    - queue: tts
      url: "http://tts-manager.bin-manager:8080"
accesskey_cache:
    size: 500
    ttl_secs: 30
logging:
    sentry_dsn: "https://public@sentry.example.com/1"
metrics:
    statsd_host: 127.0.0.1
    statsd_port: 8125
"#;

    #[test]
    fn test_parse_full_config() {
        let tmp = write_tmp_file(FULL_CONFIG);
        let config = Config::from_file(tmp.path()).expect("load config");

        assert_eq!(config.admin_listener.port, 9001);
        assert_eq!(config.publisher, "api-manager-1");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.upstreams.len(), 2);
        assert_eq!(config.upstreams[1].queue, QueueName::Tts);
        assert_eq!(
            config.upstreams[0].url.as_str(),
            "http://call-manager.bin-manager:8080/"
        );
        assert_eq!(
            config.accesskey_cache,
            AccesskeyCacheConfig {
                size: 500,
                ttl_secs: 30
            }
        );
        assert_eq!(config.metrics.as_ref().expect("metrics config").statsd_port, 8125);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let yaml = r#"
admin_listener:
    host: "0.0.0.0"
    port: 9001
upstreams: []
"#;
        let tmp = write_tmp_file(yaml);
        let config = Config::from_file(tmp.path()).expect("load config");

        assert_eq!(config.publisher, "api-manager");
        assert_eq!(config.request_timeout_ms, 30_000);
        assert_eq!(config.accesskey_cache, AccesskeyCacheConfig::default());
        assert!(config.logging.is_none());
        assert!(config.metrics.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let tmp = write_tmp_file(FULL_CONFIG);
        let base = Config::from_file(tmp.path()).expect("load config");

        let mut config = base.clone();
        config.admin_listener.port = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidPort));

        let mut config = base.clone();
        config.request_timeout_ms = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));

        let mut config = base.clone();
        config.publisher.clear();
        assert_eq!(config.validate(), Err(ValidationError::EmptyPublisher));

        let mut config = base;
        let dup = config.upstreams[0].clone();
        config.upstreams.push(dup);
        assert_eq!(
            config.validate(),
            Err(ValidationError::DuplicateUpstream(QueueName::Call))
        );
    }

    #[test]
    fn test_unknown_queue() {
        let yaml = r#"
admin_listener:
    host: "0.0.0.0"
    port: 9001
upstreams:
    - queue: fax
      url: "http://fax-manager:8080"
"#;
        let tmp = write_tmp_file(yaml);
        let err = Config::from_file(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/api-manager.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
