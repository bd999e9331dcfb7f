use crate::proto::google::{
    firestore::v1::{value::ValueType, ArrayValue, MapValue, Value},
    r#type::LatLng,
};
use prost_types::{NullValue, Timestamp};
use std::{collections::HashMap, fmt::Display};

impl Value {
    pub fn new(value_type: ValueType) -> Self {
        Value {
            value_type: Some(value_type),
        }
    }

    pub fn null() -> Self {
        Value::new(ValueType::NullValue(NullValue::NullValue as i32))
    }

    pub fn boolean(value: bool) -> Self {
        Value::new(ValueType::BooleanValue(value))
    }

    pub fn integer(value: i64) -> Self {
        Value::new(ValueType::IntegerValue(value))
    }

    pub fn double(value: f64) -> Self {
        Value::new(ValueType::DoubleValue(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::new(ValueType::StringValue(value.into()))
    }

    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Value::new(ValueType::BytesValue(value.into()))
    }

    /// A reference to the document named `name`
    /// (`projects/{p}/databases/{d}/documents/{path}`).
    pub fn reference(name: impl Into<String>) -> Self {
        Value::new(ValueType::ReferenceValue(name.into()))
    }

    pub fn timestamp(seconds: i64, nanos: i32) -> Self {
        Value::new(ValueType::TimestampValue(Timestamp { seconds, nanos }))
    }

    pub fn geo_point(latitude: f64, longitude: f64) -> Self {
        Value::new(ValueType::GeoPointValue(LatLng {
            latitude,
            longitude,
        }))
    }

    pub fn array(values: Vec<Value>) -> Self {
        Value::new(ValueType::ArrayValue(ArrayValue { values }))
    }

    pub fn map(fields: HashMap<String, Value>) -> Self {
        Value::new(ValueType::MapValue(MapValue { fields }))
    }

    pub fn from_fields(input: HashMap<String, Value>) -> Self {
        Value::map(input)
    }

    /// Integers, and timestamps read as their seconds.
    pub fn integer_value(&self) -> Option<i64> {
        match self.value_type.as_ref()? {
            ValueType::IntegerValue(i) => Some(*i),
            ValueType::TimestampValue(t) => Some(t.seconds),
            _ => None,
        }
    }

    pub fn byte_value(self) -> Option<Vec<u8>> {
        match self.value_type? {
            ValueType::BytesValue(value) => Some(value),
            _ => None,
        }
    }

    pub fn array_value(self) -> Option<ArrayValue> {
        match self.value_type? {
            ValueType::ArrayValue(value) => Some(value),
            _ => None,
        }
    }

    /// Whether [`Value::map_value`] yields fields for this value.
    pub fn has_map_value(&self) -> bool {
        matches!(
            self.value_type,
            Some(ValueType::MapValue(_))
                | Some(ValueType::GeoPointValue(_))
                | Some(ValueType::TimestampValue(_))
        )
    }

    /// Map fields. Geo points read as `{latitude, longitude}` and timestamps as
    /// `{seconds, nanos}`.
    pub fn map_value(self) -> Option<HashMap<String, Value>> {
        match self.value_type? {
            ValueType::MapValue(value) => Some(value.fields),
            ValueType::GeoPointValue(value) => Some(HashMap::from([
                ("latitude".into(), Value::double(value.latitude)),
                ("longitude".into(), Value::double(value.longitude)),
            ])),
            ValueType::TimestampValue(value) => Some(HashMap::from([
                ("seconds".into(), Value::integer(value.seconds)),
                ("nanos".into(), Value::integer(value.nanos.into())),
            ])),
            _ => None,
        }
    }

    /// The proto3 JSON name of the populated variant, or `"unset"`.
    pub fn type_name(&self) -> &'static str {
        match self.value_type {
            None => "unset",
            Some(ValueType::NullValue(_)) => "nullValue",
            Some(ValueType::BooleanValue(_)) => "booleanValue",
            Some(ValueType::IntegerValue(_)) => "integerValue",
            Some(ValueType::DoubleValue(_)) => "doubleValue",
            Some(ValueType::TimestampValue(_)) => "timestampValue",
            Some(ValueType::StringValue(_)) => "stringValue",
            Some(ValueType::BytesValue(_)) => "bytesValue",
            Some(ValueType::ReferenceValue(_)) => "referenceValue",
            Some(ValueType::GeoPointValue(_)) => "geoPointValue",
            Some(ValueType::ArrayValue(_)) => "arrayValue",
            Some(ValueType::MapValue(_)) => "mapValue",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.value_type.as_ref() {
            None => write!(f, "Unset"),
            Some(ValueType::NullValue(value)) => write!(f, "Null {:?}", value),
            Some(ValueType::BooleanValue(value)) => write!(f, "Boolean {:?}", value),
            Some(ValueType::IntegerValue(value)) => write!(f, "Integer {:?}", value),
            Some(ValueType::DoubleValue(value)) => write!(f, "Double {:?}", value),
            Some(ValueType::TimestampValue(value)) => write!(f, "Timestamp {:?}", value),
            Some(ValueType::StringValue(value)) => write!(f, "String {:?}", value),
            Some(ValueType::BytesValue(value)) => write!(f, "Bytes {:?}", value),
            Some(ValueType::ReferenceValue(value)) => write!(f, "Reference {:?}", value),
            Some(ValueType::GeoPointValue(value)) => write!(f, "GeoPoint {:?}", value),
            Some(ValueType::ArrayValue(value)) => write!(f, "Array {:?}", value),
            Some(ValueType::MapValue(value)) => write!(f, "Map {:?}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::proto::google::firestore::v1::Value;
    use maplit::hashmap;

    #[test]
    fn test_display() {
        assert_eq!("Unset", Value::default().to_string());
        assert_eq!("String \"a\"", Value::string("a").to_string());
        assert_eq!("Integer -3", Value::integer(-3).to_string());
        assert_eq!("Null 0", Value::null().to_string());
    }

    #[test]
    fn test_integer_value() {
        assert_eq!(Some(7), Value::integer(7).integer_value());
        assert_eq!(Some(1609200000), Value::timestamp(1609200000, 5).integer_value());
        assert_eq!(None, Value::double(7.0).integer_value());
        assert_eq!(None, Value::default().integer_value());
    }

    #[test]
    fn test_map_value() {
        assert_eq!(
            Some(hashmap! {
                "latitude".to_string() => Value::double(35.6),
                "longitude".to_string() => Value::double(139.7),
            }),
            Value::geo_point(35.6, 139.7).map_value()
        );
        assert_eq!(
            Some(hashmap! {
                "seconds".to_string() => Value::integer(10),
                "nanos".to_string() => Value::integer(20),
            }),
            Value::timestamp(10, 20).map_value()
        );
        assert!(!Value::string("x").has_map_value());
        assert_eq!(None, Value::string("x").map_value());
    }

    #[test]
    fn test_type_name() {
        assert_eq!("unset", Value::default().type_name());
        assert_eq!("referenceValue", Value::reference("a/b").type_name());
        assert_eq!("arrayValue", Value::array(vec![]).type_name());
    }
}
