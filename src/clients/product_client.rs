use std::time::Duration;

use tokio::sync::mpsc;

use crate::client_method;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::messages::{ApiResponse, ProductRequest};

/// Modeled round-trip latencies. Creation is the slowest operation and a
/// lookup by id the fastest; exact values are cosmetic, the ordering is not.
pub const LIST_LATENCY: Duration = Duration::from_millis(800);
pub const GET_LATENCY: Duration = Duration::from_millis(500);
pub const CREATE_LATENCY: Duration = Duration::from_millis(1000);
pub const UPDATE_LATENCY: Duration = Duration::from_millis(800);
pub const DELETE_LATENCY: Duration = Duration::from_millis(600);

/// Client handle for the product service.
///
/// Each method suspends its caller for the operation's latency before
/// delivering the request, so overlapping calls from different tasks run
/// concurrently rather than queueing behind one another.
#[derive(Clone)]
pub struct ProductServiceClient {
    sender: mpsc::Sender<ProductRequest>,
}

impl ProductServiceClient {
    pub fn new(sender: mpsc::Sender<ProductRequest>) -> Self {
        Self { sender }
    }
}

client_method!(ProductServiceClient => fn list_products() -> ApiResponse<Vec<Product>> as ProductRequest::ListProducts, latency = LIST_LATENCY);
client_method!(ProductServiceClient => fn get_product(id: String) -> ApiResponse<Product> as ProductRequest::GetProduct, latency = GET_LATENCY);
client_method!(ProductServiceClient => fn create_product(data: ProductCreate) -> ApiResponse<Product> as ProductRequest::CreateProduct, latency = CREATE_LATENCY);
client_method!(ProductServiceClient => fn update_product(id: String, patch: ProductPatch) -> ApiResponse<Product> as ProductRequest::UpdateProduct, latency = UPDATE_LATENCY);
client_method!(ProductServiceClient => fn delete_product(id: String) -> ApiResponse<()> as ProductRequest::DeleteProduct, latency = DELETE_LATENCY);
