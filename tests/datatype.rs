use connector_datatype::{DataType, DataTypeError, DataTypeResult};

#[test]
fn test_parse_and_render() {
    let tag: DataType = "BIGDECIMAL".parse().unwrap();
    assert_eq!(DataType::BigDecimal, tag);
    assert_eq!("BIGDECIMAL", tag.to_string());

    let tag: DataType = "BSON_SPECIAL_DATA_TYPES".parse().unwrap();
    assert_eq!(DataType::BsonSpecialDataTypes, tag);
    assert_eq!("BSON_SPECIAL_DATA_TYPES", tag.to_string());
}

#[test]
fn test_unknown_name() {
    let res: DataTypeResult<DataType> = "DECIMAL".parse();
    assert_eq!(
        Err(DataTypeError::UnknownDataType(String::from("DECIMAL"))),
        res
    );
    assert_eq!(
        "Unknown data type: DECIMAL",
        res.unwrap_err().to_string()
    );
}

#[test]
fn test_enumeration() {
    let all: Vec<DataType> = DataType::iter().collect();
    assert_eq!(18, all.len());
    assert!(all.contains(&DataType::Integer));
    assert!(all.contains(&DataType::Binary));
    assert!(all.contains(&DataType::Bytes));
    assert!(all.contains(&DataType::BigDecimal));
}
