//! Firestore Admin v1 RPCs: databases, composite indexes, single-field
//! settings and bulk import/export.
//!
//! Calls that start long-running work return the [`Operation`]; follow it with
//! [`crate::longrunning`].

use crate::config;
use crate::proto::google::firestore::admin::v1::{
    firestore_admin_client::FirestoreAdminClient, CreateDatabaseRequest, CreateIndexRequest,
    Database, DeleteDatabaseRequest, DeleteIndexRequest, ExportDocumentsRequest, Field,
    GetDatabaseRequest, GetFieldRequest, GetIndexRequest, ImportDocumentsRequest, Index,
    ListDatabasesRequest, ListDatabasesResponse, ListFieldsRequest, ListFieldsResponse,
    ListIndexesRequest, ListIndexesResponse, UpdateDatabaseRequest, UpdateFieldRequest,
};
use crate::proto::google::longrunning::Operation;
use crate::service::Error;
use tracing::debug;

define_client!(FirestoreAdminClient);

/// Starts building a composite index under the collection group `collection_id`
/// of the configured database.
pub async fn create_collection_group_index(
    collection_id: &str,
    index: Index,
) -> Result<Operation, Error> {
    let parent = config::get()?.collection_group_path(collection_id);
    create_index(CreateIndexRequest {
        parent,
        index: Some(index),
    })
    .await
}

/// Every composite index of the collection group, across all pages.
pub async fn list_collection_group_indexes(collection_id: &str) -> Result<Vec<Index>, Error> {
    let parent = config::get()?.collection_group_path(collection_id);
    let mut indexes = Vec::new();
    let mut page_token = String::new();
    loop {
        let response = list_indexes(ListIndexesRequest {
            parent: parent.clone(),
            page_token,
            ..Default::default()
        })
        .await?;
        indexes.extend(response.indexes);
        if response.next_page_token.is_empty() {
            return Ok(indexes);
        }
        page_token = response.next_page_token;
    }
}

/// Exports the configured database to `output_uri_prefix`, e.g. `gs://bucket`.
pub async fn export_all_documents(output_uri_prefix: &str) -> Result<Operation, Error> {
    export_documents(ExportDocumentsRequest {
        name: config::get()?.database_path(),
        output_uri_prefix: output_uri_prefix.into(),
        ..Default::default()
    })
    .await
}

pub async fn create_index(request: CreateIndexRequest) -> Result<Operation, Error> {
    debug!(parent = %request.parent, "CreateIndex");
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.create_index(request).await?.into_inner())
}

pub async fn list_indexes(request: ListIndexesRequest) -> Result<ListIndexesResponse, Error> {
    debug!(parent = %request.parent, filter = %request.filter, "ListIndexes");
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.list_indexes(request).await?.into_inner())
}

pub async fn get_index(request: GetIndexRequest) -> Result<Index, Error> {
    debug!(name = %request.name, "GetIndex");
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.get_index(request).await?.into_inner())
}

pub async fn delete_index(request: DeleteIndexRequest) -> Result<(), Error> {
    debug!(name = %request.name, "DeleteIndex");
    let mut client = FirestoreAdminClient::get().await?;
    client.delete_index(request).await?;
    Ok(())
}

pub async fn get_field(request: GetFieldRequest) -> Result<Field, Error> {
    debug!(name = %request.name, "GetField");
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.get_field(request).await?.into_inner())
}

/// Changes single-field index or TTL settings. Without an `update_mask` every
/// setting of the field is replaced.
pub async fn update_field(request: UpdateFieldRequest) -> Result<Operation, Error> {
    debug!(
        name = request.field.as_ref().map_or("", |field| field.name.as_str()),
        "UpdateField"
    );
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.update_field(request).await?.into_inner())
}

pub async fn list_fields(request: ListFieldsRequest) -> Result<ListFieldsResponse, Error> {
    debug!(parent = %request.parent, filter = %request.filter, "ListFields");
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.list_fields(request).await?.into_inner())
}

pub async fn export_documents(request: ExportDocumentsRequest) -> Result<Operation, Error> {
    debug!(
        name = %request.name,
        output_uri_prefix = %request.output_uri_prefix,
        "ExportDocuments"
    );
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.export_documents(request).await?.into_inner())
}

pub async fn import_documents(request: ImportDocumentsRequest) -> Result<Operation, Error> {
    debug!(
        name = %request.name,
        input_uri_prefix = %request.input_uri_prefix,
        "ImportDocuments"
    );
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.import_documents(request).await?.into_inner())
}

pub async fn create_database(request: CreateDatabaseRequest) -> Result<Operation, Error> {
    debug!(parent = %request.parent, database_id = %request.database_id, "CreateDatabase");
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.create_database(request).await?.into_inner())
}

pub async fn get_database(request: GetDatabaseRequest) -> Result<Database, Error> {
    debug!(name = %request.name, "GetDatabase");
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.get_database(request).await?.into_inner())
}

pub async fn list_databases(request: ListDatabasesRequest) -> Result<ListDatabasesResponse, Error> {
    debug!(parent = %request.parent, "ListDatabases");
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.list_databases(request).await?.into_inner())
}

pub async fn update_database(request: UpdateDatabaseRequest) -> Result<Operation, Error> {
    debug!(
        name = request.database.as_ref().map_or("", |database| database.name.as_str()),
        "UpdateDatabase"
    );
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.update_database(request).await?.into_inner())
}

pub async fn delete_database(request: DeleteDatabaseRequest) -> Result<Operation, Error> {
    debug!(name = %request.name, "DeleteDatabase");
    let mut client = FirestoreAdminClient::get().await?;
    Ok(client.delete_database(request).await?.into_inner())
}

#[cfg(test)]
mod tests {
    use crate::proto::google::firestore::admin::v1::{
        index::{self, index_field::ValueMode, IndexField},
        Index, OperationState,
    };

    #[test]
    fn test_index_enums() {
        let index = Index {
            query_scope: index::QueryScope::Collection as i32,
            fields: vec![IndexField {
                field_path: "age".into(),
                value_mode: Some(ValueMode::Order(index::index_field::Order::Descending as i32)),
            }],
            ..Default::default()
        };
        assert_eq!(
            Some(index::QueryScope::Collection),
            index::QueryScope::from_i32(index.query_scope)
        );
        assert_eq!(index::State::Unspecified, index.state());
        assert_eq!(
            Some(OperationState::Successful),
            OperationState::from_str_name("SUCCESSFUL")
        );
        assert_eq!("NEEDS_REPAIR", index::State::NeedsRepair.as_str_name());
    }
}
