use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::clients::ProductServiceClient;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::messages::{ApiResponse, ProductRequest, ServiceResult};
use crate::service::catalog;
use crate::service::error::ServiceError;

/// Random failure rates for the simulated backend.
///
/// Reads (list) trip `Network` errors, writes (create/update/delete) trip
/// `Server` errors. Lookups by id never fail randomly.
#[derive(Debug, Clone, Copy)]
pub struct FaultProfile {
    pub read_failure_rate: f64,
    pub write_failure_rate: f64,
}

impl Default for FaultProfile {
    fn default() -> Self {
        Self {
            read_failure_rate: 0.10,
            write_failure_rate: 0.05,
        }
    }
}

impl FaultProfile {
    /// A profile that never injects failures. Deterministic; meant for tests
    /// and demos that exercise the success paths.
    #[allow(dead_code)]
    pub fn reliable() -> Self {
        Self {
            read_failure_rate: 0.0,
            write_failure_rate: 0.0,
        }
    }

    /// A profile that always injects failures on the randomized paths.
    #[allow(dead_code)]
    pub fn faulty() -> Self {
        Self {
            read_failure_rate: 1.0,
            write_failure_rate: 1.0,
        }
    }
}

/// The simulated product backend.
///
/// Owns a private, ordered product collection; two service instances never
/// share state. Requests arrive over the message channel and are handled
/// in-memory. The network latency in front of each operation lives in
/// [`ProductServiceClient`], so one caller's delay never stalls another's.
pub struct ProductService {
    receiver: mpsc::Receiver<ProductRequest>,
    products: Vec<Product>,
    faults: FaultProfile,
    rng: StdRng,
}

impl ProductService {
    /// Creates a service seeded with the sample catalog and the default
    /// fault profile, plus the client handle for talking to it.
    pub fn new(buffer_size: usize) -> (Self, ProductServiceClient) {
        Self::with_catalog(buffer_size, catalog::sample_products(), FaultProfile::default())
    }

    /// Creates a service over an explicit starting collection.
    pub fn with_catalog(
        buffer_size: usize,
        products: Vec<Product>,
        faults: FaultProfile,
    ) -> (Self, ProductServiceClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            products,
            faults,
            rng: StdRng::from_entropy(),
        };
        (service, ProductServiceClient::new(sender))
    }

    /// Runs the service until every client handle has been dropped.
    #[instrument(name = "product_service", skip(self))]
    pub async fn run(mut self) {
        info!("ProductService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ProductRequest::ListProducts { respond_to } => {
                    let _ = respond_to.send(self.handle_list());
                }
                ProductRequest::GetProduct { id, respond_to } => {
                    let _ = respond_to.send(self.handle_get(id));
                }
                ProductRequest::CreateProduct { data, respond_to } => {
                    let _ = respond_to.send(self.handle_create(data));
                }
                ProductRequest::UpdateProduct {
                    id,
                    patch,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ProductRequest::DeleteProduct { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
            }
        }
        info!("ProductService stopped");
    }

    fn roll(&mut self, rate: f64) -> bool {
        self.rng.gen::<f64>() < rate
    }

    #[instrument(skip(self))]
    fn handle_list(&mut self) -> ServiceResult<ApiResponse<Vec<Product>>> {
        debug!("Processing list_products request");
        if self.roll(self.faults.read_failure_rate) {
            error!("Simulated network failure");
            return Err(ServiceError::Network("Failed to fetch products".to_string()));
        }
        Ok(ApiResponse {
            data: self.products.clone(),
            message: "Products fetched successfully".to_string(),
        })
    }

    #[instrument(fields(product_id = %id), skip(self, id))]
    fn handle_get(&mut self, id: String) -> ServiceResult<ApiResponse<Product>> {
        debug!("Processing get_product request");
        match self.products.iter().find(|p| p.id == id) {
            Some(product) => {
                info!(product_name = %product.name, "Product found");
                Ok(ApiResponse {
                    data: product.clone(),
                    message: "Product fetched successfully".to_string(),
                })
            }
            None => {
                debug!("Product not found");
                Err(ServiceError::NotFound(id))
            }
        }
    }

    #[instrument(fields(product_name = %data.name), skip(self, data))]
    fn handle_create(&mut self, data: ProductCreate) -> ServiceResult<ApiResponse<Product>> {
        debug!("Processing create_product request");
        if data.name.trim().is_empty() {
            error!("Rejected product without a name");
            return Err(ServiceError::NameRequired);
        }
        if self.roll(self.faults.write_failure_rate) {
            error!("Simulated server failure");
            return Err(ServiceError::Server("Failed to create product".to_string()));
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            description: data.description,
            price: data.price,
            category: data.category,
            in_stock: data.in_stock,
            created_at: now,
            updated_at: now,
        };
        self.products.push(product.clone());

        info!(product_id = %product.id, "Product created");
        Ok(ApiResponse {
            data: product,
            message: "Product created successfully".to_string(),
        })
    }

    #[instrument(fields(product_id = %id), skip(self, id, patch))]
    fn handle_update(
        &mut self,
        id: String,
        patch: ProductPatch,
    ) -> ServiceResult<ApiResponse<Product>> {
        debug!("Processing update_product request");
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            debug!("Product not found");
            return Err(ServiceError::NotFound(id));
        };
        if self.roll(self.faults.write_failure_rate) {
            error!("Simulated server failure");
            return Err(ServiceError::Server("Failed to update product".to_string()));
        }

        let product = &mut self.products[index];
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(in_stock) = patch.in_stock {
            product.in_stock = in_stock;
        }
        product.updated_at = Utc::now();

        info!("Product updated");
        Ok(ApiResponse {
            data: product.clone(),
            message: "Product updated successfully".to_string(),
        })
    }

    #[instrument(fields(product_id = %id), skip(self, id))]
    fn handle_delete(&mut self, id: String) -> ServiceResult<ApiResponse<()>> {
        debug!("Processing delete_product request");
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            debug!("Product not found");
            return Err(ServiceError::NotFound(id));
        };
        if self.roll(self.faults.write_failure_rate) {
            error!("Simulated server failure");
            return Err(ServiceError::Server("Failed to delete product".to_string()));
        }

        self.products.remove(index);
        info!("Product deleted");
        Ok(ApiResponse {
            data: (),
            message: "Product deleted successfully".to_string(),
        })
    }
}
