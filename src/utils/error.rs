use thiserror::Error;

#[derive(Error, Debug)]
pub enum RobotError {
    #[error("Transmission failed: {0}")]
    Transmission(#[source] std::io::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
}

pub type Result<T> = std::result::Result<T, RobotError>;
