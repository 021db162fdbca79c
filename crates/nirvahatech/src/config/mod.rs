use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use reqwest::Url;

use crate::forms::submission::SUCCESS_DISPLAY;

/// Local development intake API used when `API_BASE_URL` is unset.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 6 * 1024 * 1024;
const DEFAULT_FORM_TTL_SECS: u64 = 30 * 60;
const DEFAULT_MAX_FORM_INSTANCES: usize = 10_000;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the site service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub intake: IntakeConfig,
    pub forms: FormsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let api_base = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let intake = IntakeConfig::new(&api_base)?;

        let upload_limit_bytes =
            numeric_var("APP_UPLOAD_LIMIT_BYTES", DEFAULT_UPLOAD_LIMIT_BYTES as u64)? as usize;
        let instance_ttl = Duration::from_secs(numeric_var(
            "APP_FORM_TTL_SECS",
            DEFAULT_FORM_TTL_SECS,
        )?);
        let max_instances =
            numeric_var("APP_FORM_MAX_INSTANCES", DEFAULT_MAX_FORM_INSTANCES as u64)? as usize;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                json: environment == AppEnvironment::Production,
            },
            intake,
            forms: FormsConfig {
                upload_limit_bytes,
                instance_ttl,
                max_instances,
                success_display: SUCCESS_DISPLAY,
            },
        })
    }
}

fn numeric_var(name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { var: name }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub json: bool,
}

/// Location of the external lead and application intake API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    api_base: String,
}

impl IntakeConfig {
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        let invalid = || ConfigError::InvalidApiBase {
            value: raw.to_string(),
        };

        let url = Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid());
        }

        Ok(Self {
            api_base: trimmed.to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn leads_url(&self) -> String {
        format!("{}/api/v1/leads", self.api_base)
    }

    pub fn applications_url(&self) -> String {
        format!("{}/api/v1/applications", self.api_base)
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Limits applied to form instances and uploads.
#[derive(Debug, Clone)]
pub struct FormsConfig {
    pub upload_limit_bytes: usize,
    pub instance_ttl: Duration,
    /// Live instances kept before the least recently used idle one is dropped.
    pub max_instances: usize,
    pub success_display: Duration,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            upload_limit_bytes: DEFAULT_UPLOAD_LIMIT_BYTES,
            instance_ttl: Duration::from_secs(DEFAULT_FORM_TTL_SECS),
            max_instances: DEFAULT_MAX_FORM_INSTANCES,
            success_display: SUCCESS_DISPLAY,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidApiBase { value: String },
    InvalidNumber { var: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidApiBase { value } => write!(
                f,
                "API_BASE_URL must be an http(s) URL (found '{}')",
                value
            ),
            ConfigError::InvalidNumber { var } => {
                write!(f, "{} must be a non-negative integer", var)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidApiBase { .. }
            | ConfigError::InvalidNumber { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for var in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "API_BASE_URL",
            "APP_UPLOAD_LIMIT_BYTES",
            "APP_FORM_TTL_SECS",
            "APP_FORM_MAX_INSTANCES",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.telemetry.json);
        assert_eq!(config.intake.api_base(), DEFAULT_API_BASE);
        assert_eq!(config.forms.success_display, Duration::from_secs(5));
        assert_eq!(config.forms.upload_limit_bytes, 6 * 1024 * 1024);
        assert_eq!(config.forms.max_instances, 10_000);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn api_base_from_env_drops_trailing_slash() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("API_BASE_URL", "https://api.nirvahatech.com/");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.intake.leads_url(),
            "https://api.nirvahatech.com/api/v1/leads"
        );
        assert_eq!(
            config.intake.applications_url(),
            "https://api.nirvahatech.com/api/v1/applications"
        );
        reset_env();
    }

    #[test]
    fn rejects_api_base_without_scheme() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("API_BASE_URL", "api.nirvahatech.com");
        let err = AppConfig::load().expect_err("scheme is required");
        assert!(matches!(err, ConfigError::InvalidApiBase { .. }));
        reset_env();
    }

    #[test]
    fn api_base_needs_a_host() {
        for raw in ["http://", "ftp://files.nirvahatech.com", "http//nirvahatech"] {
            let err = IntakeConfig::new(raw).expect_err("not a usable base url");
            assert!(matches!(err, ConfigError::InvalidApiBase { .. }), "{raw}");
        }
        let config = IntakeConfig::new(" http://127.0.0.1:8000/ ").expect("host and port");
        assert_eq!(config.api_base(), "http://127.0.0.1:8000");
    }

    #[test]
    fn reads_instance_cap_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_FORM_MAX_INSTANCES", "250");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.forms.max_instances, 250);
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_form_ttl() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_FORM_TTL_SECS", "soon");
        let err = AppConfig::load().expect_err("ttl must be numeric");
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                var: "APP_FORM_TTL_SECS"
            }
        ));
        reset_env();
    }

    #[test]
    fn production_switches_to_json_logs() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert!(config.telemetry.json);
        reset_env();
    }
}
