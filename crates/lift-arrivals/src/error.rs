use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("arrival configuration error: {0}")]
    Config(String),

    #[error("arrival record parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
