use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid parameters: {field} {reason}")]
    InvalidParameters { field: &'static str, reason: String },
}

pub type SimResult<T> = Result<T, SimError>;
