use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ag_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] ag_auth::AuthError),

    #[error("Database error: {0}")]
    Database(#[from] ag_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
