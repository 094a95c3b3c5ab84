mod auth_config;
mod config;
mod database_config;
mod error;
mod hashing_config;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use hashing_config::HashingConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_CONFIG_DIRECTORY: &str = ".authgate";
const CONFIG_DIR_ENV_VAR: &str = "AG_CONFIG_DIR";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "users.db";

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const MIN_TOKEN_TTL_SECS: u64 = 1;
const MAX_TOKEN_TTL_SECS: u64 = 24 * 3600;

const DEFAULT_HASHING_MEMORY_KIB: u32 = 19 * 1024;
const DEFAULT_HASHING_ITERATIONS: u32 = 2;
const DEFAULT_HASHING_PARALLELISM: u32 = 1;
const MAX_HASHING_MEMORY_KIB: u32 = 1024 * 1024;
const MIN_HASHING_ITERATIONS: u32 = 1;
const MAX_HASHING_ITERATIONS: u32 = 64;
const MIN_HASHING_PARALLELISM: u32 = 1;
const MAX_HASHING_PARALLELISM: u32 = 16;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
