use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringPolicy,
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

        let scoring = ScoringPolicy {
            crs_invitation_threshold: threshold_var(
                "APP_CRS_THRESHOLD",
                ScoringPolicy::DEFAULT_CRS_INVITATION_THRESHOLD,
            )?,
            fsw_pass_mark: threshold_var("APP_FSW_PASS_MARK", ScoringPolicy::DEFAULT_FSW_PASS_MARK)?,
            bcpnp_competitive_threshold: threshold_var(
                "APP_BCPNP_THRESHOLD",
                ScoringPolicy::DEFAULT_BCPNP_COMPETITIVE_THRESHOLD,
            )?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring,
        })
    }
}

fn threshold_var(variable: &'static str, default: i32) -> Result<i32, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<i32>()
            .map_err(|_| ConfigError::InvalidThreshold { variable }),
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Draw-line thresholds the qualitative assessments key off.
///
/// These are policy constants, not scoring rules: IRCC and BC publish new
/// cut-offs with every draw, so they are configurable rather than baked into
/// the point tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    pub crs_invitation_threshold: i32,
    pub fsw_pass_mark: i32,
    pub bcpnp_competitive_threshold: i32,
}

impl ScoringPolicy {
    pub const DEFAULT_CRS_INVITATION_THRESHOLD: i32 = 470;
    pub const DEFAULT_FSW_PASS_MARK: i32 = 67;
    pub const DEFAULT_BCPNP_COMPETITIVE_THRESHOLD: i32 = 100;
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            crs_invitation_threshold: Self::DEFAULT_CRS_INVITATION_THRESHOLD,
            fsw_pass_mark: Self::DEFAULT_FSW_PASS_MARK,
            bcpnp_competitive_threshold: Self::DEFAULT_BCPNP_COMPETITIVE_THRESHOLD,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { variable } => {
                write!(f, "{variable} must be a valid integer score threshold")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidThreshold { .. } => None,
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
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_CRS_THRESHOLD");
        env::remove_var("APP_FSW_PASS_MARK");
        env::remove_var("APP_BCPNP_THRESHOLD");
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
        assert_eq!(config.scoring, ScoringPolicy::default());
    }

    #[test]
    fn scoring_thresholds_can_be_overridden() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_CRS_THRESHOLD", "500");
        env::set_var("APP_BCPNP_THRESHOLD", "118");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.scoring.crs_invitation_threshold, 500);
        assert_eq!(config.scoring.fsw_pass_mark, 67);
        assert_eq!(config.scoring.bcpnp_competitive_threshold, 118);
        reset_env();
    }

    #[test]
    fn malformed_threshold_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_FSW_PASS_MARK", "sixty-seven");
        let error = AppConfig::load().expect_err("threshold must fail");
        assert!(matches!(
            error,
            ConfigError::InvalidThreshold {
                variable: "APP_FSW_PASS_MARK"
            }
        ));
        reset_env();
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
}
