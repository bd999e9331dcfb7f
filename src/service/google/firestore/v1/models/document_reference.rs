use super::collection_reference::CollectionReference;
use crate::{
    config,
    proto::google::firestore::v1::{
        DeleteDocumentRequest, Document, GetDocumentRequest, UpdateDocumentRequest,
    },
    serde_document::{from_fields, to_fields},
    service::Error,
};
use serde::{Deserialize, Serialize};
use tonic::Code;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReference {
    id: String,
    parent: Box<CollectionReference>,
}

impl DocumentReference {
    pub(crate) fn new(id: impl Into<String>, parent: &CollectionReference) -> Self {
        DocumentReference {
            id: id.into(),
            parent: Box::new(parent.clone()),
        }
    }

    pub fn collection(&self, id: impl Into<String>) -> CollectionReference {
        CollectionReference::new(id.into(), Some(self))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent(&self) -> &CollectionReference {
        &self.parent
    }

    pub fn path(&self) -> String {
        format!("{}/{}", self.parent.path(), self.id)
    }

    pub fn name(&self) -> Result<String, Error> {
        Ok(self.name_under(&config::get()?.documents_path()))
    }

    pub(crate) fn name_under(&self, documents_path: &str) -> String {
        format!("{}/{}", documents_path, self.path())
    }

    /// Reads the document and deserializes its fields.
    pub async fn get<'de, T>(&self) -> Result<T, Error>
    where
        T: Deserialize<'de>,
    {
        let request = GetDocumentRequest {
            name: self.name()?,
            ..Default::default()
        };
        let document = match super::super::get_document(request).await {
            Ok(document) => document,
            Err(Error::Status(status)) if status.code() == Code::NotFound => {
                return Err(Error::NotFound(self.path()))
            }
            Err(err) => return Err(err),
        };
        from_fields(document.fields).map_err(Error::Deserialize)
    }

    /// Replaces the whole document with the fields of `value`, creating it if
    /// needed.
    pub async fn set<T>(&self, value: &T) -> Result<Document, Error>
    where
        T: Serialize + ?Sized,
    {
        let fields = to_fields(value).map_err(Error::Serialize)?;
        let request = UpdateDocumentRequest {
            document: Some(Document {
                name: self.name()?,
                fields,
                ..Default::default()
            }),
            ..Default::default()
        };
        super::super::update_document(request).await
    }

    pub async fn delete(&self) -> Result<(), Error> {
        super::super::delete_document(DeleteDocumentRequest {
            name: self.name()?,
            ..Default::default()
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::collection;

    #[test]
    fn test_path() {
        let doc = collection("users").doc("malt");
        assert_eq!("malt", doc.id());
        assert_eq!("users", doc.parent().path());
        assert_eq!("users/malt", doc.path());

        let nested = doc.collection("posts").doc("first");
        assert_eq!("users/malt/posts/first", nested.path());
        assert_eq!(
            "projects/p/databases/(default)/documents/users/malt/posts/first",
            nested.name_under("projects/p/databases/(default)/documents")
        );
    }
}
