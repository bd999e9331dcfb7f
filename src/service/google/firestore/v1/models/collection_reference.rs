use super::document_reference::DocumentReference;
use crate::{
    config,
    proto::google::firestore::v1::{Document, ListDocumentsRequest},
    service::Error,
};
use tracing::debug;

/// A top-level collection of the configured database.
pub fn collection(id: impl Into<String>) -> CollectionReference {
    CollectionReference::new(id, None)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReference {
    id: String,
    parent: Option<Box<DocumentReference>>,
}

impl CollectionReference {
    pub(crate) fn new(id: impl Into<String>, parent: Option<&DocumentReference>) -> Self {
        CollectionReference {
            id: id.into(),
            parent: parent.map(|p| Box::new(p.clone())),
        }
    }

    pub fn doc(&self, id: impl Into<String>) -> DocumentReference {
        DocumentReference::new(id.into(), self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Path relative to the documents root, e.g. `users/malt/posts`.
    pub fn path(&self) -> String {
        match self.parent {
            Some(ref parent) => format!("{}/{}", parent.path(), self.id),
            None => self.id.clone(),
        }
    }

    /// Full resource name in the configured database.
    pub fn name(&self) -> Result<String, Error> {
        Ok(self.name_under(&config::get()?.documents_path()))
    }

    pub(crate) fn name_under(&self, documents_path: &str) -> String {
        format!("{}/{}", documents_path, self.path())
    }

    fn parent_name_under(&self, documents_path: &str) -> String {
        match self.parent {
            Some(ref parent) => parent.name_under(documents_path),
            None => documents_path.to_string(),
        }
    }

    /// Every document in the collection, following page tokens to the end.
    pub async fn list(&self) -> Result<Vec<Document>, Error> {
        let parent = self.parent_name_under(&config::get()?.documents_path());
        let mut documents = Vec::new();
        let mut page_token = String::new();
        loop {
            let response = super::super::list_documents(ListDocumentsRequest {
                parent: parent.clone(),
                collection_id: self.id.clone(),
                page_token,
                ..Default::default()
            })
            .await?;
            documents.extend(response.documents);
            if response.next_page_token.is_empty() {
                break;
            }
            debug!(collection = %self.path(), fetched = documents.len(), "fetching next page");
            page_token = response.next_page_token;
        }
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::collection;

    const DOCUMENTS: &str = "projects/p/databases/(default)/documents";

    #[test]
    fn test_path() {
        let users = collection("users");
        assert_eq!("users", users.path());
        assert_eq!(
            "projects/p/databases/(default)/documents/users",
            users.name_under(DOCUMENTS)
        );
        assert_eq!(DOCUMENTS, users.parent_name_under(DOCUMENTS));

        let posts = users.doc("malt").collection("posts");
        assert_eq!("posts", posts.id());
        assert_eq!("users/malt/posts", posts.path());
        assert_eq!(
            "projects/p/databases/(default)/documents/users/malt",
            posts.parent_name_under(DOCUMENTS)
        );
    }
}
