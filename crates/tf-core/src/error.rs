use thiserror::Error;

pub type TfResult<T> = Result<T, TfError>;

#[derive(Error, Debug)]
pub enum TfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Length mismatch: {what} (left={left}, right={right})")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("Not supported: {what}")]
    NotSupported { what: String },

    #[error("Resource error: {message}")]
    Resource { message: String },
}
