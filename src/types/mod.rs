pub mod datatype;
pub mod error;

pub use self::datatype::DataType;
pub use self::error::DataTypeError;
