use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Serial port error: {0}")]
    SerialError(#[from] serialport::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid device setting `{field}` = {value:?}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Write worker failed: {0}")]
    WorkerError(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, SendError>;
