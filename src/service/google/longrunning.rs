//! `google.longrunning.Operations` on the Firestore endpoint, used to follow
//! admin operations such as index builds and exports.

use crate::proto::google::longrunning::{
    operations_client::OperationsClient, CancelOperationRequest, DeleteOperationRequest,
    GetOperationRequest, ListOperationsRequest, ListOperationsResponse, Operation,
    WaitOperationRequest,
};
use crate::service::Error;
use tracing::debug;

define_client!(OperationsClient);

pub async fn get_operation(request: GetOperationRequest) -> Result<Operation, Error> {
    debug!(name = %request.name, "GetOperation");
    let mut client = OperationsClient::get().await?;
    Ok(client.get_operation(request).await?.into_inner())
}

pub async fn list_operations(
    request: ListOperationsRequest,
) -> Result<ListOperationsResponse, Error> {
    debug!(name = %request.name, filter = %request.filter, "ListOperations");
    let mut client = OperationsClient::get().await?;
    Ok(client.list_operations(request).await?.into_inner())
}

pub async fn cancel_operation(request: CancelOperationRequest) -> Result<(), Error> {
    debug!(name = %request.name, "CancelOperation");
    let mut client = OperationsClient::get().await?;
    client.cancel_operation(request).await?;
    Ok(())
}

pub async fn delete_operation(request: DeleteOperationRequest) -> Result<(), Error> {
    debug!(name = %request.name, "DeleteOperation");
    let mut client = OperationsClient::get().await?;
    client.delete_operation(request).await?;
    Ok(())
}

/// Blocks server-side until the operation is done or the timeout passes.
pub async fn wait_operation(request: WaitOperationRequest) -> Result<Operation, Error> {
    debug!(name = %request.name, "WaitOperation");
    let mut client = OperationsClient::get().await?;
    Ok(client.wait_operation(request).await?.into_inner())
}
