use std::net::SocketAddr;
use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_EMAIL: &str = "admin@parkwise.local";
const DEFAULT_EXPORT_DIR: &str = "./exports";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Account created on startup when no admin exists.
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: String,

    pub export_dir: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS);
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address,
            admin_username: optional("ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME),
            admin_email: optional("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
            admin_password: required("ADMIN_PASSWORD")?,
            export_dir: PathBuf::from(optional("EXPORT_DIR", DEFAULT_EXPORT_DIR)),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
