use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::scoring::TokenMapSource;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Log filter used when `APP_LOG_LEVEL` is unset.
    pub fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "disc_profile=debug,info",
            Self::Test => "warn",
            Self::Production => "info",
        }
    }

    /// Production refuses to start with a token map file it cannot see.
    pub fn requires_token_map_file(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or("APP_ENV", "development"));

        let server = ServerConfig {
            host: var_or("APP_HOST", "127.0.0.1"),
            port: var_or("APP_PORT", "3000")
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort)?,
        };

        let telemetry = TelemetryConfig {
            log_level: var_or("APP_LOG_LEVEL", environment.default_log_level()),
        };

        let scoring = ScoringConfig {
            token_map: env::var("DISC_TOKEN_MAP")
                .map(|value| TokenMapSource::parse(&value))
                .unwrap_or(TokenMapSource::TraitKeys),
        };
        scoring.validate(environment)?;

        Ok(Self {
            environment,
            server,
            telemetry,
            scoring,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
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

/// Scorer construction settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub token_map: TokenMapSource,
}

impl ScoringConfig {
    /// Checks the token map choice against what the environment demands.
    pub fn validate(&self, environment: AppEnvironment) -> Result<(), ConfigError> {
        match &self.token_map {
            TokenMapSource::File(path)
                if environment.requires_token_map_file() && !path.is_file() =>
            {
                Err(ConfigError::TokenMapMissing { path: path.clone() })
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    TokenMapMissing { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::TokenMapMissing { path } => {
                write!(f, "DISC_TOKEN_MAP file {} does not exist", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::TokenMapMissing { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
