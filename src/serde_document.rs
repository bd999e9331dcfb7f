//! Conversion between serde types and Firestore document fields.
//!
//! Structs and maps become `mapValue`, sequences and tuples become
//! `arrayValue`, unit enum variants become their name as a string and other
//! variants become a single-entry map keyed by the variant name.

mod common;
mod deserializer;
mod error;
mod serializer;

pub use common::TraceKey;
pub use deserializer::{from_fields, Deserializer};
pub use error::{Error, Result};
pub use serializer::{to_fields, to_value, Serializer};

#[cfg(test)]
mod tests {
    use super::{from_fields, to_fields, to_value, Error, TraceKey};
    use crate::proto::google::firestore::v1::Value;
    use maplit::hashmap;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Child1 {
        value: i32,
    }

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Child2 {
        value: String,
    }

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    enum E {
        Unit,
        Struct(Child1),
        Tuple(String, Child1),
    }

    fn child1(value: i64) -> Value {
        Value::map(hashmap! {
            "value".into() => Value::integer(value),
        })
    }

    fn key(path: &[&str]) -> TraceKey {
        path.iter()
            .fold(TraceKey::Root, |parent, segment| parent.child(*segment))
    }

    #[test]
    fn test_fields() {
        #[derive(Deserialize, PartialEq, Debug)]
        struct Test {
            s: String,
            uint: u64,
            int: i64,
            b: bool,
            float: f32,
            c: char,
            #[serde(with = "serde_bytes")]
            bytes: Vec<u8>,
            option_some: Option<i64>,
            option_none: Option<i64>,
            option_empty: Option<i64>,
            unit: (),
            child: Child1,
            int_vec: Vec<i64>,
            child_array: [Child1; 3],
            child_tuple: (Child1, Child2),
            enum_unit: E,
            enum_struct: E,
            enum_tuple: E,
        }

        let fields: HashMap<String, Value> = hashmap! {
            "s".into() => Value::string("hoge"),
            "uint".into() => Value::integer(24),
            "int".into() => Value::integer(-24),
            "b".into() => Value::boolean(true),
            "float".into() => Value::double(0.1),
            "c".into() => Value::string("x"),
            "bytes".into() => Value::bytes(vec![0, 1, 2]),
            "option_some".into() => Value::integer(10),
            "option_none".into() => Value::null(),
            "unit".into() => Value::null(),
            "child".into() => child1(2),
            "int_vec".into() => Value::array((1..=3).map(Value::integer).collect()),
            "child_array".into() => Value::array((2..=4).map(child1).collect()),
            "child_tuple".into() => Value::array(vec![
                child1(5),
                Value::map(hashmap! { "value".into() => Value::string("piyo") }),
            ]),
            "enum_unit".into() => Value::string("Unit"),
            "enum_struct".into() => Value::map(hashmap! { "Struct".into() => child1(6) }),
            "enum_tuple".into() => Value::map(hashmap! {
                "Tuple".into() => Value::array(vec![Value::string("fuga"), child1(7)]),
            }),
        };

        let test: Test = from_fields(fields).unwrap();
        let expected = Test {
            s: "hoge".into(),
            uint: 24,
            int: -24,
            b: true,
            float: 0.1,
            c: 'x',
            bytes: vec![0, 1, 2],
            option_some: Some(10),
            option_none: None,
            option_empty: None,
            unit: (),
            child: Child1 { value: 2 },
            int_vec: vec![1, 2, 3],
            child_array: [
                Child1 { value: 2 },
                Child1 { value: 3 },
                Child1 { value: 4 },
            ],
            child_tuple: (
                Child1 { value: 5 },
                Child2 {
                    value: "piyo".into(),
                },
            ),
            enum_unit: E::Unit,
            enum_struct: E::Struct(Child1 { value: 6 }),
            enum_tuple: E::Tuple("fuga".into(), Child1 { value: 7 }),
        };
        assert_eq!(expected, test);
    }

    #[test]
    fn test_special_values() {
        #[derive(Deserialize, PartialEq, Debug)]
        struct Point {
            latitude: f64,
            longitude: f64,
        }

        #[derive(Deserialize, PartialEq, Debug)]
        struct Stamp {
            seconds: i64,
            nanos: i32,
        }

        #[derive(Deserialize, PartialEq, Debug)]
        struct Test {
            point: Point,
            stamp: Stamp,
            created_at: i64,
            parent: String,
            extra: HashMap<String, i64>,
        }

        let fields = hashmap! {
            "point".into() => Value::geo_point(35.5, 139.5),
            "stamp".into() => Value::timestamp(1609200000, 500),
            "created_at".into() => Value::timestamp(1609200000, 0),
            "parent".into() => Value::reference("projects/p/databases/(default)/documents/a/b"),
            "extra".into() => Value::map(hashmap! {
                "x".into() => Value::integer(1),
                "y".into() => Value::integer(2),
            }),
            "ignored".into() => Value::array(vec![Value::null(), child1(1)]),
        };

        let test: Test = from_fields(fields).unwrap();
        assert_eq!(
            Test {
                point: Point {
                    latitude: 35.5,
                    longitude: 139.5,
                },
                stamp: Stamp {
                    seconds: 1609200000,
                    nanos: 500,
                },
                created_at: 1609200000,
                parent: "projects/p/databases/(default)/documents/a/b".into(),
                extra: hashmap! { "x".into() => 1, "y".into() => 2 },
            },
            test
        );
    }

    #[test]
    fn test_nested_error() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Test {
            a: i32,
            b: B,
        }

        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct B {
            c: Child1,
        }

        let fields = hashmap! {
            "a".into() => Value::integer(1),
            "b".into() => Value::map(hashmap! {
                "c".into() => Value::map(hashmap! {
                    "value".into() => Value::string("a"),
                }),
            }),
        };
        let err = from_fields::<Test>(fields).unwrap_err();
        assert_eq!(
            Error::ExpectedInteger(key(&["b", "c", "value"]), Value::string("a")),
            err
        );
        assert_eq!(
            "A integer value was expected for /b/c/value, but it was String \"a\"",
            err.to_string()
        );
    }

    #[test]
    fn test_array_error() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Test {
            b: HashMap<String, Vec<i32>>,
        }

        let fields = hashmap! {
            "b".into() => Value::map(hashmap! {
                "v".into() => Value::array(vec![Value::integer(1), Value::boolean(true)]),
            }),
        };
        let err = from_fields::<Test>(fields).unwrap_err();
        assert_eq!(
            "A integer value was expected for /b/v[], but it was Boolean true",
            err.to_string()
        );
    }

    #[test]
    fn test_convert_errors() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Unsigned {
            v: u64,
        }

        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Byte {
            v: u8,
        }

        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Float {
            v: f32,
        }

        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Pair {
            v: (i32, i32),
        }

        let err = from_fields::<Unsigned>(hashmap! { "v".into() => Value::integer(-1) });
        assert_eq!(
            Err(Error::CouldNotConvertNumber(key(&["v"]), Value::integer(-1))),
            err.map(|_| ())
        );

        let err = from_fields::<Byte>(hashmap! { "v".into() => Value::integer(256) });
        assert_eq!(
            Err(Error::CouldNotConvertNumber(key(&["v"]), Value::integer(256))),
            err.map(|_| ())
        );

        let err = from_fields::<Float>(hashmap! { "v".into() => Value::double(-3.40282348E+38) });
        assert_eq!(
            Err(Error::CouldNotConvertNumber(
                key(&["v"]),
                Value::double(-3.40282348E+38)
            )),
            err.map(|_| ())
        );

        let three = Value::array((1..=3).map(Value::integer).collect());
        let err = from_fields::<Pair>(hashmap! { "v".into() => three });
        assert_eq!(Err(Error::ExpectedArrayEnd(key(&["v"]))), err.map(|_| ()));
    }

    #[test]
    fn test_enum_error() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Test {
            e: E,
        }

        let err = from_fields::<Test>(hashmap! { "e".into() => Value::integer(3) });
        assert_eq!(
            Err(Error::ExpectedEnum(key(&["e"]), Value::integer(3))),
            err.map(|_| ())
        );
    }

    #[test]
    fn test_name_only_rejects_payload_variants() {
        #[derive(Deserialize, PartialEq, Debug)]
        enum Shape {
            Circle(i64),
            Dot,
        }

        #[derive(Deserialize, PartialEq, Debug)]
        struct Test {
            shapes: Vec<Shape>,
        }

        let fields = hashmap! {
            "shapes".into() => Value::array(vec![Value::string("Circle"), Value::integer(5)]),
        };
        assert_eq!(
            Err(Error::ExpectedEnum(
                TraceKey::Root.child("shapes").element(),
                Value::string("Circle")
            )),
            from_fields::<Test>(fields)
        );

        let fields = hashmap! {
            "shapes".into() => Value::array(vec![
                Value::string("Dot"),
                Value::map(hashmap! { "Circle".into() => Value::integer(5) }),
            ]),
        };
        assert_eq!(
            Test {
                shapes: vec![Shape::Dot, Shape::Circle(5)],
            },
            from_fields::<Test>(fields).unwrap()
        );

        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Single {
            e: E,
        }
        for name in ["Struct", "Tuple"] {
            let fields = hashmap! { "e".into() => Value::string(name) };
            assert_eq!(
                Err(Error::ExpectedEnum(key(&["e"]), Value::string(name))),
                from_fields::<Single>(fields).map(|_| ())
            );
        }
    }

    #[test]
    fn test_f32_limits() {
        #[derive(Serialize, Deserialize, Debug)]
        struct Float {
            v: f32,
        }

        for v in [f32::MAX, f32::MIN, f32::INFINITY, f32::NEG_INFINITY, 0.0] {
            let fields = to_fields(&Float { v }).unwrap();
            assert_eq!(v, from_fields::<Float>(fields).unwrap().v);
        }

        let fields = to_fields(&Float { v: f32::NAN }).unwrap();
        assert!(from_fields::<Float>(fields).unwrap().v.is_nan());

        let err = from_fields::<Float>(hashmap! { "v".into() => Value::double(f64::MAX) });
        assert_eq!(
            Err(Error::CouldNotConvertNumber(key(&["v"]), Value::double(f64::MAX))),
            err.map(|_| ())
        );
    }

    #[test]
    fn test_to_fields() {
        #[derive(Serialize)]
        struct Test {
            s: String,
            uint: u8,
            float: f64,
            option_none: Option<i64>,
            #[serde(with = "serde_bytes")]
            bytes: Vec<u8>,
            child: Child1,
            tuple: (i32, String),
            enum_unit: E,
            enum_struct: E,
            enum_tuple: E,
        }

        let fields = to_fields(&Test {
            s: "hoge".into(),
            uint: 3,
            float: 0.5,
            option_none: None,
            bytes: vec![0, 1],
            child: Child1 { value: 2 },
            tuple: (1, "x".into()),
            enum_unit: E::Unit,
            enum_struct: E::Struct(Child1 { value: 6 }),
            enum_tuple: E::Tuple("fuga".into(), Child1 { value: 7 }),
        })
        .unwrap();

        let expected: HashMap<String, Value> = hashmap! {
            "s".into() => Value::string("hoge"),
            "uint".into() => Value::integer(3),
            "float".into() => Value::double(0.5),
            "option_none".into() => Value::null(),
            "bytes".into() => Value::bytes(vec![0, 1]),
            "child".into() => child1(2),
            "tuple".into() => Value::array(vec![Value::integer(1), Value::string("x")]),
            "enum_unit".into() => Value::string("Unit"),
            "enum_struct".into() => Value::map(hashmap! { "Struct".into() => child1(6) }),
            "enum_tuple".into() => Value::map(hashmap! {
                "Tuple".into() => Value::array(vec![Value::string("fuga"), child1(7)]),
            }),
        };
        assert_eq!(expected, fields);
    }

    #[test]
    fn test_fields_survive_serialization() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Test {
            name: String,
            children: Vec<Child1>,
            tags: HashMap<String, bool>,
            kind: E,
        }

        let source = Test {
            name: "malt".into(),
            children: vec![Child1 { value: 1 }, Child1 { value: -1 }],
            tags: hashmap! { "a".into() => true },
            kind: E::Tuple("t".into(), Child1 { value: 9 }),
        };
        let fields = to_fields(&source).unwrap();
        assert_eq!(source, from_fields::<Test>(fields).unwrap());
    }

    #[test]
    fn test_serialize_errors() {
        assert_eq!(
            Err(Error::ExpectedTopLevelMap(Value::integer(1))),
            to_fields(&1)
        );

        assert_eq!(
            Err(Error::CouldNotConvertNumber(
                TraceKey::Root,
                Value::string(u64::MAX.to_string())
            )),
            to_value(&u64::MAX)
        );

        #[derive(Serialize)]
        struct Keys {
            m: HashMap<i32, i32>,
        }
        assert_eq!(
            Err(Error::KeyMustBeString(key(&["m"]))),
            to_fields(&Keys {
                m: hashmap! { 1 => 2 },
            })
        );
    }
}
