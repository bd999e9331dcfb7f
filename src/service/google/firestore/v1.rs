//! Firestore v1 RPCs over the shared channel.
//!
//! Each wrapper takes the full request message and returns the response
//! message, or the response stream for streaming RPCs.

mod models;

pub use models::{collection, CollectionReference, DocumentReference};

use crate::proto::google::firestore::v1::{
    firestore_client::FirestoreClient, BatchGetDocumentsRequest, BatchGetDocumentsResponse,
    BatchWriteRequest, BatchWriteResponse, BeginTransactionRequest, BeginTransactionResponse,
    CommitRequest, CommitResponse, CreateDocumentRequest, DeleteDocumentRequest, Document,
    GetDocumentRequest, ListCollectionIdsRequest, ListCollectionIdsResponse,
    ListDocumentsRequest, ListDocumentsResponse, ListenRequest, ListenResponse,
    PartitionQueryRequest, PartitionQueryResponse, RollbackRequest, RunAggregationQueryRequest,
    RunAggregationQueryResponse, RunQueryRequest, RunQueryResponse, UpdateDocumentRequest,
    WriteRequest, WriteResponse,
};
use crate::service::Error;
use futures::Stream;
use tonic::Streaming;
use tracing::debug;

define_client!(FirestoreClient);

pub async fn get_document(request: GetDocumentRequest) -> Result<Document, Error> {
    debug!(name = %request.name, "GetDocument");
    let mut client = FirestoreClient::get().await?;
    let response = client.get_document(request).await?;
    Ok(response.into_inner())
}

pub async fn list_documents(request: ListDocumentsRequest) -> Result<ListDocumentsResponse, Error> {
    debug!(parent = %request.parent, collection_id = %request.collection_id, "ListDocuments");
    let mut client = FirestoreClient::get().await?;
    let response = client.list_documents(request).await?;
    Ok(response.into_inner())
}

pub async fn create_document(request: CreateDocumentRequest) -> Result<Document, Error> {
    debug!(parent = %request.parent, collection_id = %request.collection_id, "CreateDocument");
    let mut client = FirestoreClient::get().await?;
    let response = client.create_document(request).await?;
    Ok(response.into_inner())
}

pub async fn update_document(request: UpdateDocumentRequest) -> Result<Document, Error> {
    debug!(
        name = request.document.as_ref().map_or("", |document| document.name.as_str()),
        "UpdateDocument"
    );
    let mut client = FirestoreClient::get().await?;
    let response = client.update_document(request).await?;
    Ok(response.into_inner())
}

pub async fn delete_document(request: DeleteDocumentRequest) -> Result<(), Error> {
    debug!(name = %request.name, "DeleteDocument");
    let mut client = FirestoreClient::get().await?;
    client.delete_document(request).await?;
    Ok(())
}

pub async fn batch_get_documents(
    request: BatchGetDocumentsRequest,
) -> Result<Streaming<BatchGetDocumentsResponse>, Error> {
    debug!(documents = request.documents.len(), "BatchGetDocuments");
    let mut client = FirestoreClient::get().await?;
    let response = client.batch_get_documents(request).await?;
    Ok(response.into_inner())
}

pub async fn begin_transaction(
    request: BeginTransactionRequest,
) -> Result<BeginTransactionResponse, Error> {
    debug!("BeginTransaction");
    let mut client = FirestoreClient::get().await?;
    let response = client.begin_transaction(request).await?;
    Ok(response.into_inner())
}

pub async fn commit(request: CommitRequest) -> Result<CommitResponse, Error> {
    debug!(writes = request.writes.len(), "Commit");
    let mut client = FirestoreClient::get().await?;
    let response = client.commit(request).await?;
    Ok(response.into_inner())
}

pub async fn rollback(request: RollbackRequest) -> Result<(), Error> {
    debug!("Rollback");
    let mut client = FirestoreClient::get().await?;
    client.rollback(request).await?;
    Ok(())
}

pub async fn run_query(request: RunQueryRequest) -> Result<Streaming<RunQueryResponse>, Error> {
    debug!(parent = %request.parent, "RunQuery");
    let mut client = FirestoreClient::get().await?;
    let response = client.run_query(request).await?;
    Ok(response.into_inner())
}

pub async fn run_aggregation_query(
    request: RunAggregationQueryRequest,
) -> Result<Streaming<RunAggregationQueryResponse>, Error> {
    debug!(parent = %request.parent, "RunAggregationQuery");
    let mut client = FirestoreClient::get().await?;
    let response = client.run_aggregation_query(request).await?;
    Ok(response.into_inner())
}

pub async fn partition_query(
    request: PartitionQueryRequest,
) -> Result<PartitionQueryResponse, Error> {
    debug!(parent = %request.parent, "PartitionQuery");
    let mut client = FirestoreClient::get().await?;
    let response = client.partition_query(request).await?;
    Ok(response.into_inner())
}

/// Opens a write stream. The first request must carry the database name.
pub async fn write<S>(requests: S) -> Result<Streaming<WriteResponse>, Error>
where
    S: Stream<Item = WriteRequest> + Send + 'static,
{
    debug!("Write");
    let mut client = FirestoreClient::get().await?;
    let response = client.write(requests).await?;
    Ok(response.into_inner())
}

pub async fn listen<S>(requests: S) -> Result<Streaming<ListenResponse>, Error>
where
    S: Stream<Item = ListenRequest> + Send + 'static,
{
    debug!("Listen");
    let mut client = FirestoreClient::get().await?;
    let response = client.listen(requests).await?;
    Ok(response.into_inner())
}

pub async fn list_collection_ids(
    request: ListCollectionIdsRequest,
) -> Result<ListCollectionIdsResponse, Error> {
    debug!(parent = %request.parent, "ListCollectionIds");
    let mut client = FirestoreClient::get().await?;
    let response = client.list_collection_ids(request).await?;
    Ok(response.into_inner())
}

pub async fn batch_write(request: BatchWriteRequest) -> Result<BatchWriteResponse, Error> {
    debug!(writes = request.writes.len(), "BatchWrite");
    let mut client = FirestoreClient::get().await?;
    let response = client.batch_write(request).await?;
    Ok(response.into_inner())
}
