use crate::proto::google::firestore::v1::{precondition::ConditionType, DocumentMask, Precondition};
use prost_types::Timestamp;

impl Precondition {
    /// The target document must exist (`true`) or must not exist (`false`).
    pub fn exists(exists: bool) -> Self {
        Precondition {
            condition_type: Some(ConditionType::Exists(exists)),
        }
    }

    /// The target document must exist and have been last updated at `update_time`.
    pub fn updated_at(update_time: Timestamp) -> Self {
        Precondition {
            condition_type: Some(ConditionType::UpdateTime(update_time)),
        }
    }
}

impl DocumentMask {
    pub fn new<I, S>(field_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DocumentMask {
            field_paths: field_paths.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::proto::google::firestore::v1::{
        precondition::ConditionType, DocumentMask, Precondition,
    };

    #[test]
    fn test_precondition() {
        assert_eq!(
            Some(ConditionType::Exists(false)),
            Precondition::exists(false).condition_type
        );
    }

    #[test]
    fn test_mask() {
        let mask = DocumentMask::new(["a", "b.c"]);
        assert_eq!(vec!["a".to_string(), "b.c".to_string()], mask.field_paths);
    }
}
