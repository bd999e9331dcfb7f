use crate::proto::google::firestore::v1::Document;

impl Document {
    /// The last segment of the resource name.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    /// The segment naming the collection that holds this document, if the
    /// resource name has one.
    pub fn collection_id(&self) -> Option<&str> {
        let mut segments = self.name.rsplit('/');
        segments.next()?;
        segments.next().filter(|segment| !segment.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use crate::proto::google::firestore::v1::Document;

    fn document(name: &str) -> Document {
        Document {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_id() {
        let doc = document("projects/p/databases/(default)/documents/rooms/a/messages/m1");
        assert_eq!("m1", doc.id());
        assert_eq!(Some("messages"), doc.collection_id());
    }

    #[test]
    fn test_unnamed() {
        let doc = document("");
        assert_eq!("", doc.id());
        assert_eq!(None, doc.collection_id());
    }
}
