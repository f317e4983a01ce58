use std::fmt;
use std::str::FromStr;

use crate::types::error::DataTypeError;

/// Tag identifying the semantic category of a value exchanged between the
/// query layer and a plugin. Generic code dispatches on the tag without
/// inspecting the value itself.
///
/// The set is closed. Parsing a name outside it fails with
/// [`DataTypeError::UnknownDataType`]; the canonical names are the uppercase
/// spellings returned by [`DataType::as_str`] and they are the only
/// boundary-visible representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Date,
    Time,
    Ascii,
    Binary,
    // BINARY and BYTES are both carried upstream with no documented
    // distinction. Kept disjoint for wire compatibility.
    Bytes,
    String,
    Null,
    Array,
    JsonObject,
    Timestamp,
    Bson,
    BsonSpecialDataTypes,
    BigDecimal,
}

impl DataType {
    /// Every tag, in declaration order.
    pub const ALL: [DataType; 18] = [
        DataType::Integer,
        DataType::Long,
        DataType::Float,
        DataType::Double,
        DataType::Boolean,
        DataType::Date,
        DataType::Time,
        DataType::Ascii,
        DataType::Binary,
        DataType::Bytes,
        DataType::String,
        DataType::Null,
        DataType::Array,
        DataType::JsonObject,
        DataType::Timestamp,
        DataType::Bson,
        DataType::BsonSpecialDataTypes,
        DataType::BigDecimal,
    ];

    pub fn iter() -> impl Iterator<Item = DataType> {
        Self::ALL.iter().copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Long => "LONG",
            DataType::Float => "FLOAT",
            DataType::Double => "DOUBLE",
            DataType::Boolean => "BOOLEAN",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::Ascii => "ASCII",
            DataType::Binary => "BINARY",
            DataType::Bytes => "BYTES",
            DataType::String => "STRING",
            DataType::Null => "NULL",
            DataType::Array => "ARRAY",
            DataType::JsonObject => "JSON_OBJECT",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Bson => "BSON",
            DataType::BsonSpecialDataTypes => "BSON_SPECIAL_DATA_TYPES",
            DataType::BigDecimal => "BIGDECIMAL",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = DataTypeError;

    // Case sensitive. The canonical spellings are part of the wire contract.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INTEGER" => Ok(DataType::Integer),
            "LONG" => Ok(DataType::Long),
            "FLOAT" => Ok(DataType::Float),
            "DOUBLE" => Ok(DataType::Double),
            "BOOLEAN" => Ok(DataType::Boolean),
            "DATE" => Ok(DataType::Date),
            "TIME" => Ok(DataType::Time),
            "ASCII" => Ok(DataType::Ascii),
            "BINARY" => Ok(DataType::Binary),
            "BYTES" => Ok(DataType::Bytes),
            "STRING" => Ok(DataType::String),
            "NULL" => Ok(DataType::Null),
            "ARRAY" => Ok(DataType::Array),
            "JSON_OBJECT" => Ok(DataType::JsonObject),
            "TIMESTAMP" => Ok(DataType::Timestamp),
            "BSON" => Ok(DataType::Bson),
            "BSON_SPECIAL_DATA_TYPES" => Ok(DataType::BsonSpecialDataTypes),
            "BIGDECIMAL" => Ok(DataType::BigDecimal),
            _ => Err(DataTypeError::UnknownDataType(s.to_string())),
        }
    }
}
