//! Proto3 JSON form of Firestore values and documents.
//!
//! This is the plain-object shape used by JSON transcoding and by JavaScript
//! clients: `{"integerValue": "3"}`, `{"mapValue": {"fields": {...}}}` and so
//! on. int64 travels as a decimal string, bytes as base64 and timestamps as
//! RFC 3339 text.

mod error;

pub use error::ObjectError;

use crate::proto::google::{
    firestore::v1::{value::ValueType, Document, Value},
    r#type::LatLng,
};
use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE},
    Engine as _,
};
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use prost_types::{NullValue, Timestamp};
use serde_json::{json, Map, Value as Json};
use std::{collections::HashMap, num::IntErrorKind};
use tracing::warn;

type Result<T> = std::result::Result<T, ObjectError>;

const VALUE_FIELDS: &[&str] = &[
    "nullValue",
    "booleanValue",
    "integerValue",
    "doubleValue",
    "timestampValue",
    "stringValue",
    "bytesValue",
    "referenceValue",
    "geoPointValue",
    "arrayValue",
    "mapValue",
];

const DOCUMENT_FIELDS: &[&str] = &["name", "fields", "createTime", "updateTime"];

/// Reads a `Value` from its proto3 JSON object. `{}` is a value with nothing set.
pub fn value_from_object(object: &Json) -> Result<Value> {
    value_at(object, "")
}

pub fn value_to_object(value: &Value) -> Json {
    let (name, inner) = match &value.value_type {
        None => return Json::Object(Map::new()),
        Some(ValueType::NullValue(_)) => ("nullValue", Json::Null),
        Some(ValueType::BooleanValue(b)) => ("booleanValue", Json::Bool(*b)),
        Some(ValueType::IntegerValue(i)) => ("integerValue", Json::String(i.to_string())),
        Some(ValueType::DoubleValue(d)) => ("doubleValue", double_to_json(*d)),
        Some(ValueType::TimestampValue(t)) => ("timestampValue", timestamp_to_json(t)),
        Some(ValueType::StringValue(s)) => ("stringValue", Json::String(s.clone())),
        Some(ValueType::BytesValue(b)) => ("bytesValue", Json::String(STANDARD.encode(b))),
        Some(ValueType::ReferenceValue(r)) => ("referenceValue", Json::String(r.clone())),
        Some(ValueType::GeoPointValue(p)) => (
            "geoPointValue",
            json!({
                "latitude": double_to_json(p.latitude),
                "longitude": double_to_json(p.longitude),
            }),
        ),
        Some(ValueType::ArrayValue(a)) => (
            "arrayValue",
            json!({ "values": a.values.iter().map(value_to_object).collect::<Vec<_>>() }),
        ),
        Some(ValueType::MapValue(m)) => ("mapValue", json!({ "fields": fields_to_object(&m.fields) })),
    };
    let mut object = Map::new();
    object.insert(name.into(), inner);
    Json::Object(object)
}

/// Reads a `Document` from `{name, fields, createTime, updateTime}`. Every
/// member is optional.
pub fn document_from_object(object: &Json) -> Result<Document> {
    let object = as_object(object, "")?;
    check_fields(object, "", DOCUMENT_FIELDS)?;
    let member = |name: &str| object.get(name).filter(|json| !json.is_null());

    let name = match member("name") {
        Some(json) => string_from(json, "name")?,
        None => String::new(),
    };
    let fields = match member("fields") {
        Some(json) => fields_from(json, "fields")?,
        None => HashMap::new(),
    };
    let create_time = member("createTime")
        .map(|json| timestamp_from(json, "createTime"))
        .transpose()?;
    let update_time = member("updateTime")
        .map(|json| timestamp_from(json, "updateTime"))
        .transpose()?;

    Ok(Document {
        name,
        fields,
        create_time,
        update_time,
    })
}

/// Writes the populated members of `document`.
pub fn document_to_object(document: &Document) -> Json {
    let mut object = Map::new();
    if !document.name.is_empty() {
        object.insert("name".into(), Json::String(document.name.clone()));
    }
    object.insert("fields".into(), fields_to_object(&document.fields));
    if let Some(time) = &document.create_time {
        object.insert("createTime".into(), timestamp_to_json(time));
    }
    if let Some(time) = &document.update_time {
        object.insert("updateTime".into(), timestamp_to_json(time));
    }
    Json::Object(object)
}

fn fields_to_object(fields: &HashMap<String, Value>) -> Json {
    Json::Object(
        fields
            .iter()
            .map(|(key, value)| (key.clone(), value_to_object(value)))
            .collect(),
    )
}

fn field_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn json_type(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

fn expected(path: &str, expected: &'static str, found: &Json) -> ObjectError {
    ObjectError::ExpectedType {
        path: path.to_string(),
        expected,
        found: json_type(found),
    }
}

fn as_object<'a>(json: &'a Json, path: &str) -> Result<&'a Map<String, Json>> {
    json.as_object()
        .ok_or_else(|| ObjectError::ExpectedObject(path.to_string()))
}

fn check_fields(object: &Map<String, Json>, path: &str, allowed: &[&str]) -> Result<()> {
    match object.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(ObjectError::UnknownField(path.to_string(), key.clone())),
        None => Ok(()),
    }
}

fn value_at(json: &Json, path: &str) -> Result<Value> {
    let object = as_object(json, path)?;
    check_fields(object, path, VALUE_FIELDS)?;

    let mut entries = object.iter();
    let (name, inner) = match (entries.next(), entries.next()) {
        (None, _) => return Ok(Value::default()),
        (Some(entry), None) => entry,
        (Some(_), Some(_)) => {
            return Err(ObjectError::MultipleVariants(
                path.to_string(),
                object.keys().cloned().collect(),
            ))
        }
    };

    let path = field_path(path, name);
    let value_type = match name.as_str() {
        "nullValue" => {
            null_from(inner, &path)?;
            ValueType::NullValue(NullValue::NullValue as i32)
        }
        "booleanValue" => match inner {
            Json::Bool(b) => ValueType::BooleanValue(*b),
            other => return Err(expected(&path, "a boolean", other)),
        },
        "integerValue" => ValueType::IntegerValue(integer_from(inner, &path)?),
        "doubleValue" => ValueType::DoubleValue(double_from(inner, &path)?),
        "timestampValue" => ValueType::TimestampValue(timestamp_from(inner, &path)?),
        "stringValue" => ValueType::StringValue(string_from(inner, &path)?),
        "bytesValue" => ValueType::BytesValue(bytes_from(inner, &path)?),
        "referenceValue" => ValueType::ReferenceValue(string_from(inner, &path)?),
        "geoPointValue" => ValueType::GeoPointValue(geo_point_from(inner, &path)?),
        "arrayValue" => {
            let object = as_object(inner, &path)?;
            check_fields(object, &path, &["values"])?;
            let values = match object.get("values") {
                None | Some(Json::Null) => Vec::new(),
                Some(Json::Array(values)) => values
                    .iter()
                    .enumerate()
                    .map(|(i, value)| value_at(value, &format!("{}.values[{}]", path, i)))
                    .collect::<Result<_>>()?,
                Some(other) => return Err(expected(&field_path(&path, "values"), "an array", other)),
            };
            return Ok(Value::array(values));
        }
        "mapValue" => {
            let object = as_object(inner, &path)?;
            check_fields(object, &path, &["fields"])?;
            let fields = match object.get("fields") {
                None | Some(Json::Null) => HashMap::new(),
                Some(fields) => fields_from(fields, &field_path(&path, "fields"))?,
            };
            return Ok(Value::map(fields));
        }
        // check_fields admits only VALUE_FIELDS
        _ => return Err(ObjectError::UnknownField(path, name.clone())),
    };
    Ok(Value::new(value_type))
}

fn fields_from(json: &Json, path: &str) -> Result<HashMap<String, Value>> {
    as_object(json, path)?
        .iter()
        .map(|(key, value)| Ok((key.clone(), value_at(value, &field_path(path, key))?)))
        .collect()
}

/// JSON null, the enum name or its number.
fn null_from(json: &Json, path: &str) -> Result<()> {
    match json {
        Json::Null => Ok(()),
        Json::String(name) if name == "NULL_VALUE" => Ok(()),
        Json::Number(n) if n.as_i64() == Some(0) => Ok(()),
        other => Err(expected(path, "null", other)),
    }
}

fn integer_from(json: &Json, path: &str) -> Result<i64> {
    match json {
        Json::String(text) => text.parse::<i64>().map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ObjectError::IntegerOutOfRange(path.to_string(), text.clone())
            }
            _ => expected(path, "an integer", json),
        }),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Ok(i),
            None if n.is_u64() => Err(ObjectError::IntegerOutOfRange(
                path.to_string(),
                n.to_string(),
            )),
            None => Err(ObjectError::ExpectedType {
                path: path.to_string(),
                expected: "an integer",
                found: "a fractional number",
            }),
        },
        other => Err(expected(path, "an integer", other)),
    }
}

fn double_from(json: &Json, path: &str) -> Result<f64> {
    match json {
        Json::Number(n) => n
            .as_f64()
            .ok_or_else(|| expected(path, "a double", json)),
        Json::String(text) => match text.as_str() {
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            text => text.parse().map_err(|_| expected(path, "a double", json)),
        },
        other => Err(expected(path, "a double", other)),
    }
}

fn string_from(json: &Json, path: &str) -> Result<String> {
    match json {
        Json::String(text) => Ok(text.clone()),
        other => Err(expected(path, "a string", other)),
    }
}

fn bytes_from(json: &Json, path: &str) -> Result<Vec<u8>> {
    let text = match json {
        Json::String(text) => text,
        other => return Err(expected(path, "a base64 string", other)),
    };
    STANDARD
        .decode(text)
        .or_else(|_| URL_SAFE.decode(text))
        .map_err(|_| ObjectError::InvalidBytes(path.to_string()))
}

/// RFC 3339 text, or `{seconds, nanos}`.
fn timestamp_from(json: &Json, path: &str) -> Result<Timestamp> {
    match json {
        Json::String(text) => DateTime::parse_from_rfc3339(text)
            .map(|time| Timestamp {
                seconds: time.timestamp(),
                nanos: time.timestamp_subsec_nanos() as i32,
            })
            .map_err(|_| ObjectError::InvalidTimestamp(path.to_string(), text.clone())),
        Json::Object(object) => {
            check_fields(object, path, &["seconds", "nanos"])?;
            let seconds = match object.get("seconds") {
                Some(json) => integer_from(json, &field_path(path, "seconds"))?,
                None => 0,
            };
            let nanos = match object.get("nanos") {
                Some(json) => {
                    let nanos_path = field_path(path, "nanos");
                    let nanos = integer_from(json, &nanos_path)?;
                    i32::try_from(nanos).map_err(|_| {
                        ObjectError::IntegerOutOfRange(nanos_path, nanos.to_string())
                    })?
                }
                None => 0,
            };
            Ok(Timestamp { seconds, nanos })
        }
        other => Err(expected(path, "an RFC 3339 string", other)),
    }
}

fn geo_point_from(json: &Json, path: &str) -> Result<LatLng> {
    let object = as_object(json, path)?;
    check_fields(object, path, &["latitude", "longitude"])?;
    let coordinate = |name: &str| match object.get(name) {
        Some(json) => double_from(json, &field_path(path, name)),
        None => Ok(0.0),
    };
    Ok(LatLng {
        latitude: coordinate("latitude")?,
        longitude: coordinate("longitude")?,
    })
}

fn double_to_json(d: f64) -> Json {
    if d.is_nan() {
        Json::String("NaN".into())
    } else if d.is_infinite() {
        Json::String(if d > 0.0 { "Infinity" } else { "-Infinity" }.into())
    } else {
        Json::from(d)
    }
}

fn timestamp_to_json(timestamp: &Timestamp) -> Json {
    let time = u32::try_from(timestamp.nanos)
        .ok()
        .and_then(|nanos| Utc.timestamp_opt(timestamp.seconds, nanos).single());
    match time {
        Some(time) => Json::String(time.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        None => {
            warn!(
                seconds = timestamp.seconds,
                nanos = timestamp.nanos,
                "timestamp has no RFC 3339 form, writing seconds and nanos"
            );
            json!({ "seconds": timestamp.seconds.to_string(), "nanos": timestamp.nanos })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        document_from_object, document_to_object, value_from_object, value_to_object,
        ObjectError,
    };
    use crate::proto::google::firestore::v1::{Document, Value};
    use maplit::hashmap;
    use prost_types::Timestamp;
    use serde_json::json;

    #[test]
    fn test_value_from_object() {
        assert_eq!(Value::default(), value_from_object(&json!({})).unwrap());
        assert_eq!(Value::null(), value_from_object(&json!({ "nullValue": null })).unwrap());
        assert_eq!(
            Value::null(),
            value_from_object(&json!({ "nullValue": "NULL_VALUE" })).unwrap()
        );
        assert_eq!(
            Value::integer(-42),
            value_from_object(&json!({ "integerValue": "-42" })).unwrap()
        );
        assert_eq!(
            Value::integer(7),
            value_from_object(&json!({ "integerValue": 7 })).unwrap()
        );
        assert_eq!(
            Value::double(f64::NEG_INFINITY),
            value_from_object(&json!({ "doubleValue": "-Infinity" })).unwrap()
        );
        assert_eq!(
            Value::bytes(vec![0, 1, 2, 255]),
            value_from_object(&json!({ "bytesValue": "AAEC/w==" })).unwrap()
        );
        assert_eq!(
            Value::timestamp(1609200000, 500_000_000),
            value_from_object(&json!({ "timestampValue": "2020-12-29T00:00:00.5Z" })).unwrap()
        );
        assert_eq!(
            Value::geo_point(35.5, 139.5),
            value_from_object(&json!({
                "geoPointValue": { "latitude": 35.5, "longitude": 139.5 }
            }))
            .unwrap()
        );
        assert_eq!(
            Value::map(hashmap! {
                "a".into() => Value::array(vec![Value::boolean(true), Value::string("x")]),
                "b".into() => Value::reference("projects/p/databases/(default)/documents/c/d"),
            }),
            value_from_object(&json!({
                "mapValue": { "fields": {
                    "a": { "arrayValue": { "values": [
                        { "booleanValue": true },
                        { "stringValue": "x" },
                    ] } },
                    "b": { "referenceValue": "projects/p/databases/(default)/documents/c/d" },
                } }
            }))
            .unwrap()
        );
        assert_eq!(
            Value::array(vec![]),
            value_from_object(&json!({ "arrayValue": {} })).unwrap()
        );
    }

    #[test]
    fn test_value_to_object() {
        assert_eq!(json!({}), value_to_object(&Value::default()));
        assert_eq!(json!({ "nullValue": null }), value_to_object(&Value::null()));
        assert_eq!(
            json!({ "integerValue": "9223372036854775807" }),
            value_to_object(&Value::integer(i64::MAX))
        );
        assert_eq!(
            json!({ "doubleValue": "NaN" }),
            value_to_object(&Value::double(f64::NAN))
        );
        assert_eq!(
            json!({ "doubleValue": 0.25 }),
            value_to_object(&Value::double(0.25))
        );
        assert_eq!(
            json!({ "bytesValue": "AAEC/w==" }),
            value_to_object(&Value::bytes(vec![0, 1, 2, 255]))
        );
        assert_eq!(
            json!({ "timestampValue": "2020-12-29T00:00:00Z" }),
            value_to_object(&Value::timestamp(1609200000, 0))
        );
        assert_eq!(
            json!({ "timestampValue": "2020-12-29T00:00:00.500Z" }),
            value_to_object(&Value::timestamp(1609200000, 500_000_000))
        );
        assert_eq!(
            json!({ "arrayValue": { "values": [{ "stringValue": "a" }, {}] } }),
            value_to_object(&Value::array(vec![Value::string("a"), Value::default()]))
        );
    }

    #[test]
    fn test_value_survives_object_form() {
        let value = Value::map(hashmap! {
            "n".into() => Value::integer(i64::MIN),
            "t".into() => Value::timestamp(-86400, 123_456_789),
            "g".into() => Value::geo_point(-33.9, 151.2),
            "m".into() => Value::map(hashmap! {
                "inner".into() => Value::array(vec![Value::null(), Value::bytes(vec![9])]),
            }),
        });
        assert_eq!(value, value_from_object(&value_to_object(&value)).unwrap());
    }

    #[test]
    fn test_value_errors() {
        assert_eq!(
            Err(ObjectError::ExpectedObject(String::new())),
            value_from_object(&json!("a"))
        );
        assert_eq!(
            Err(ObjectError::MultipleVariants(
                String::new(),
                vec!["booleanValue".into(), "stringValue".into()]
            )),
            value_from_object(&json!({ "booleanValue": true, "stringValue": "a" }))
        );
        assert_eq!(
            Err(ObjectError::UnknownField(String::new(), "intValue".into())),
            value_from_object(&json!({ "intValue": 1 }))
        );
        assert_eq!(
            Err(ObjectError::IntegerOutOfRange(
                "integerValue".into(),
                "9223372036854775808".into()
            )),
            value_from_object(&json!({ "integerValue": "9223372036854775808" }))
        );
        assert_eq!(
            Err(ObjectError::InvalidBytes("bytesValue".into())),
            value_from_object(&json!({ "bytesValue": "!!" }))
        );
        assert_eq!(
            Err(ObjectError::InvalidTimestamp(
                "timestampValue".into(),
                "yesterday".into()
            )),
            value_from_object(&json!({ "timestampValue": "yesterday" }))
        );
        assert_eq!(
            Err(ObjectError::ExpectedType {
                path: "arrayValue.values[1].booleanValue".into(),
                expected: "a boolean",
                found: "a string",
            }),
            value_from_object(&json!({ "arrayValue": { "values": [
                { "booleanValue": false },
                { "booleanValue": "false" },
            ] } }))
        );
    }

    #[test]
    fn test_document_object() {
        let object = json!({
            "name": "projects/p/databases/(default)/documents/users/malt",
            "fields": {
                "age": { "integerValue": "30" },
                "tags": { "arrayValue": { "values": [{ "stringValue": "a" }] } },
            },
            "createTime": "2020-12-29T00:00:00Z",
            "updateTime": "2020-12-29T00:00:01.000001Z",
        });
        let document = Document {
            name: "projects/p/databases/(default)/documents/users/malt".into(),
            fields: hashmap! {
                "age".into() => Value::integer(30),
                "tags".into() => Value::array(vec![Value::string("a")]),
            },
            create_time: Some(Timestamp {
                seconds: 1609200000,
                nanos: 0,
            }),
            update_time: Some(Timestamp {
                seconds: 1609200001,
                nanos: 1000,
            }),
        };
        assert_eq!(document, document_from_object(&object).unwrap());
        assert_eq!(object, document_to_object(&document));
    }

    #[test]
    fn test_document_errors() {
        assert_eq!(
            Err(ObjectError::UnknownField(String::new(), "id".into())),
            document_from_object(&json!({ "id": "x" }))
        );
        assert_eq!(
            Err(ObjectError::ExpectedType {
                path: "fields.a.mapValue.fields.b.integerValue".into(),
                expected: "an integer",
                found: "a boolean",
            }),
            document_from_object(&json!({
                "fields": { "a": { "mapValue": { "fields": {
                    "b": { "integerValue": true },
                } } } }
            }))
        );
    }
}
