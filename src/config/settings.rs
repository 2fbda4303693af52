//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::{ScooterValidator, DEFAULT_LATITUDE_LIMIT, DEFAULT_LONGITUDE_LIMIT};

/// Port the server listens on unless configured otherwise
pub const DEFAULT_PORT: u16 = 8080;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Basic authentication policy
    pub auth: AuthSettings,

    /// Coordinate bounds for scooter patches
    pub validation: ValidationSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// How Basic credentials are checked once the header parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Any non-empty username is accepted
    #[default]
    Any,

    /// Only the configured `user:password` pairs are accepted
    AllowList,

    /// The username must exist in the user directory
    Directory,
}

/// Authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Credential checking policy
    pub mode: AuthMode,

    /// `user:password` pairs for `allow_list` mode
    #[serde(default)]
    pub credentials: Vec<String>,
}

/// Patch validation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationSettings {
    /// Absolute latitude bound, inclusive
    pub latitude_limit: f64,

    /// Absolute longitude bound, inclusive
    pub longitude_limit: f64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".into(),
                port: DEFAULT_PORT,
            },
            auth: AuthSettings {
                mode: AuthMode::Any,
                credentials: Vec::new(),
            },
            validation: ValidationSettings::default(),
            cors: CorsSettings {
                allowed_origins: Vec::new(),
            },
            environment: "development".into(),
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            latitude_limit: DEFAULT_LATITUDE_LIMIT,
            longitude_limit: DEFAULT_LONGITUDE_LIMIT,
        }
    }
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the loaded values are inconsistent (see [`Settings::validate`]).
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let settings: Self = Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("auth.mode", "any")?
            .set_default("auth.credentials", Vec::<String>::new())?
            .set_default("validation.latitude_limit", DEFAULT_LATITUDE_LIMIT)?
            .set_default("validation.longitude_limit", DEFAULT_LONGITUDE_LIMIT)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("auth.credentials")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("auth.mode", std::env::var("AUTH_MODE").ok())?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject configurations the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, limit) in [
            ("validation.latitude_limit", self.validation.latitude_limit),
            ("validation.longitude_limit", self.validation.longitude_limit),
        ] {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(ConfigError::Message(format!(
                    "{} must be a positive number, got {}",
                    name, limit
                )));
            }
        }

        if self.auth.mode == AuthMode::AllowList {
            if self.auth.credentials.is_empty() {
                return Err(ConfigError::Message(
                    "auth.credentials must not be empty in allow_list mode".into(),
                ));
            }
            if let Some(bad) = self
                .auth
                .credentials
                .iter()
                .find(|c| !matches!(c.split_once(':'), Some((user, _)) if !user.is_empty()))
            {
                return Err(ConfigError::Message(format!(
                    "auth.credentials entry {:?} is not of the form user:password",
                    bad
                )));
            }
        }

        Ok(())
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the patch validator from the configured bounds.
    pub fn scooter_validator(&self) -> ScooterValidator {
        ScooterValidator::new(
            self.validation.latitude_limit,
            self.validation.longitude_limit,
        )
    }
}

impl ServerSettings {
    /// Get the socket address for binding.
    pub fn socket_addr(&self) -> Result<std::net::SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
