use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::service::ServiceError;

/// Generic type aliases for service communication
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
pub type ServiceResponse<T> = oneshot::Sender<ServiceResult<T>>;

/// Response envelope the backend wraps every successful payload in,
/// mirroring a REST API body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

/// Typed messages for the product service actor. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum ProductRequest {
    ListProducts {
        respond_to: ServiceResponse<ApiResponse<Vec<Product>>>,
    },
    GetProduct {
        id: String,
        respond_to: ServiceResponse<ApiResponse<Product>>,
    },
    CreateProduct {
        data: ProductCreate,
        respond_to: ServiceResponse<ApiResponse<Product>>,
    },
    UpdateProduct {
        id: String,
        patch: ProductPatch,
        respond_to: ServiceResponse<ApiResponse<Product>>,
    },
    DeleteProduct {
        id: String,
        respond_to: ServiceResponse<ApiResponse<()>>,
    },
}
