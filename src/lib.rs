pub mod types;

pub use types::datatype::DataType;
pub use types::error::DataTypeError;

pub type DataTypeResult<T> = Result<T, DataTypeError>;
