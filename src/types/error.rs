use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataTypeError {
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),
}
