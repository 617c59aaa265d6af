use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use crate::common::errors::Error;

pub type DynamoDbItem = HashMap<String, AttributeValue>;

/// Converts a stored item into a json object, keeping every attribute.
///
/// Numbers are emitted as plain json numbers and sets as arrays, the same
/// shape the javascript document client produces.
pub fn item_to_json(item: DynamoDbItem) -> Result<Map<String, Value>, Error> {
    item.into_iter()
        .map(|(key, value)| attribute_to_json(&key, value).map(|value| (key, value)))
        .collect()
}

fn attribute_to_json(name: &str, value: AttributeValue) -> Result<Value, Error> {
    let value = match value {
        AttributeValue::S(val) => Value::String(val),
        AttributeValue::N(val) => Value::Number(parse_number(name, &val)?),
        AttributeValue::Bool(val) => Value::Bool(val),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => Value::Array(
            values
                .into_iter()
                .map(|val| attribute_to_json(name, val))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => Value::Object(item_to_json(map)?),
        AttributeValue::Ss(values) => Value::Array(values.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|val| parse_number(name, val).map(Value::Number))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::B(blob) => bytes_to_json(blob.into_inner()),
        AttributeValue::Bs(blobs) => Value::Array(
            blobs
                .into_iter()
                .map(|blob| bytes_to_json(blob.into_inner()))
                .collect(),
        ),
        _ => return Err(Error::UnsupportedAttribute(name.to_string())),
    };

    Ok(value)
}

fn parse_number(name: &str, raw: &str) -> Result<Number, Error> {
    if let Ok(val) = raw.parse::<i64>() {
        return Ok(val.into());
    }
    if let Ok(val) = raw.parse::<u64>() {
        return Ok(val.into());
    }

    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| Error::InvalidNumber {
            attribute: name.to_string(),
            value: raw.to_string(),
        })
}

fn bytes_to_json(bytes: Vec<u8>) -> Value {
    Value::Array(bytes.into_iter().map(Value::from).collect())
}
