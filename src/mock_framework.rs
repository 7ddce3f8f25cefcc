//! # Mock Framework
//!
//! Utilities for testing the store against a hand-driven service channel.
//!
//! [`create_mock_client`] returns a real [`ProductServiceClient`] plus the
//! receiving end of its channel. A test pulls the next request with an
//! `expect_*` helper and decides the outcome itself: send `Ok` or `Err`
//! through the responder, hold it to observe the in-flight state, or drop it
//! to simulate the service going away. No live actor, fully deterministic.

use tokio::sync::mpsc;

use crate::clients::ProductServiceClient;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::messages::{ApiResponse, ProductRequest, ServiceResponse, ServiceResult};

pub fn create_mock_client(
    buffer_size: usize,
) -> (ProductServiceClient, mpsc::Receiver<ProductRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ProductServiceClient::new(sender), receiver)
}

/// Wraps a payload the way the live service does.
pub fn ok_reply<T>(data: T) -> ServiceResult<ApiResponse<T>> {
    Ok(ApiResponse {
        data,
        message: "ok".to_string(),
    })
}

pub async fn expect_list(
    receiver: &mut mpsc::Receiver<ProductRequest>,
) -> Option<ServiceResponse<ApiResponse<Vec<Product>>>> {
    match receiver.recv().await {
        Some(ProductRequest::ListProducts { respond_to }) => Some(respond_to),
        _ => None,
    }
}

pub async fn expect_get(
    receiver: &mut mpsc::Receiver<ProductRequest>,
) -> Option<(String, ServiceResponse<ApiResponse<Product>>)> {
    match receiver.recv().await {
        Some(ProductRequest::GetProduct { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_create(
    receiver: &mut mpsc::Receiver<ProductRequest>,
) -> Option<(ProductCreate, ServiceResponse<ApiResponse<Product>>)> {
    match receiver.recv().await {
        Some(ProductRequest::CreateProduct { data, respond_to }) => Some((data, respond_to)),
        _ => None,
    }
}

pub async fn expect_update(
    receiver: &mut mpsc::Receiver<ProductRequest>,
) -> Option<(String, ProductPatch, ServiceResponse<ApiResponse<Product>>)> {
    match receiver.recv().await {
        Some(ProductRequest::UpdateProduct {
            id,
            patch,
            respond_to,
        }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

pub async fn expect_delete(
    receiver: &mut mpsc::Receiver<ProductRequest>,
) -> Option<(String, ServiceResponse<ApiResponse<()>>)> {
    match receiver.recv().await {
        Some(ProductRequest::DeleteProduct { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn mock_client_round_trip() {
        let (client, mut receiver) = create_mock_client(8);

        let get_task = tokio::spawn(async move { client.get_product("1".to_string()).await });

        let (id, respond_to) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "1");
        respond_to
            .send(Err(crate::service::ServiceError::NotFound(id)))
            .unwrap();

        let err = get_task.await.unwrap().unwrap_err();
        assert_eq!(err.to_string(), "Product with id 1 not found");
    }
}
