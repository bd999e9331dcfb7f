use thiserror::Error;

/// Rejections of [`crate::object`] conversions. `path` is the location of the
/// offending input such as `fields.a.arrayValue.values[2]`, empty for the root.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectError {
    #[error("an object was expected at {}", display_path(.0))]
    ExpectedObject(String),
    #[error("{} must be {expected}, but it was {found}", display_path(.path))]
    ExpectedType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{} sets more than one value: {}", display_path(.0), .1.join(", "))]
    MultipleVariants(String, Vec<String>),
    #[error("unknown field {1:?} at {}", display_path(.0))]
    UnknownField(String, String),
    #[error("{} is not an RFC 3339 timestamp: {1:?}", display_path(.0))]
    InvalidTimestamp(String, String),
    #[error("{} is not base64", display_path(.0))]
    InvalidBytes(String),
    #[error("{} does not fit a 64-bit integer: {1}", display_path(.0))]
    IntegerOutOfRange(String, String),
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "the root"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::ObjectError;

    #[test]
    fn test_display() {
        assert_eq!(
            "an object was expected at the root",
            ObjectError::ExpectedObject(String::new()).to_string()
        );
        assert_eq!(
            "fields.a sets more than one value: booleanValue, stringValue",
            ObjectError::MultipleVariants(
                "fields.a".into(),
                vec!["booleanValue".into(), "stringValue".into()]
            )
            .to_string()
        );
    }
}
