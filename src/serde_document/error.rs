use super::common::TraceKey;
use crate::proto::google::firestore::v1::Value;
use serde::{de, ser};
use std::fmt::Display;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error("unexpected end of input")]
    Eof,

    #[error("A boolean value was expected for {0}, but it was {1}")]
    ExpectedBoolean(TraceKey, Value),
    #[error("A integer value was expected for {0}, but it was {1}")]
    ExpectedInteger(TraceKey, Value),
    #[error("A double value was expected for {0}, but it was {1}")]
    ExpectedDouble(TraceKey, Value),
    #[error("A string value was expected for {0}, but it was {1}")]
    ExpectedString(TraceKey, Value),
    #[error("A bytes value was expected for {0}, but it was {1}")]
    ExpectedBytes(TraceKey, Value),
    #[error("A null value was expected for {0}, but it was {1}")]
    ExpectedNull(TraceKey, Value),
    #[error("A array value was expected for {0}, but it was {1}")]
    ExpectedArray(TraceKey, Value),
    #[error("A map value was expected for {0}, but it was {1}")]
    ExpectedMap(TraceKey, Value),
    #[error("A enum value was expected for {0}, but it was {1}")]
    ExpectedEnum(TraceKey, Value),
    #[error("Could not convert {1}, the value of {0}, to the expected type.")]
    CouldNotConvertNumber(TraceKey, Value),
    #[error("The length of the array is invalid. key: {0}")]
    ExpectedArrayEnd(TraceKey),
    #[error("Map keys must be strings. key: {0}")]
    KeyMustBeString(TraceKey),
    #[error("A document must serialize to a map, but it was {0}")]
    ExpectedTopLevelMap(Value),
}

impl ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}
