use std::future::Future;

use tokio::sync::watch;
use tracing::{debug, error, instrument};

use crate::clients::ProductServiceClient;
use crate::domain::{Product, ProductCreate, ProductPatch, ProductsState};
use crate::messages::ApiResponse;
use crate::service::ServiceError;

/// The canonical in-memory state for products and UI status flags.
///
/// Every async operation runs the same three-phase lifecycle: on dispatch
/// the error is cleared and `loading` raised, on resolution `loading` drops
/// and either the result is reconciled into the state or the failure message
/// recorded. Each transition is applied atomically through the watch channel,
/// so observers never see a half-applied mutation.
///
/// `loading` is one shared flag across operation kinds; when operations
/// overlap, the last resolution wins the flag. There is no cancellation:
/// a dispatched operation always applies its transition when it resolves.
pub struct ProductStore {
    service: ProductServiceClient,
    state: watch::Sender<ProductsState>,
}

impl ProductStore {
    pub fn new(service: ProductServiceClient) -> Self {
        let (state, _) = watch::channel(ProductsState::default());
        Self { service, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ProductsState {
        self.state.borrow().clone()
    }

    /// Observer handle; receives a notification after every transition.
    pub fn subscribe(&self) -> watch::Receiver<ProductsState> {
        self.state.subscribe()
    }

    /// Replaces the product list with whatever the backend returns.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ServiceError> {
        self.dispatch(
            "Failed to fetch products",
            self.service.list_products(),
            |state, products| {
                state.products = products.clone();
            },
        )
        .await
    }

    /// Loads one product into the selected slot; the list is untouched.
    #[instrument(skip(self))]
    pub async fn fetch_product(&self, id: String) -> Result<Product, ServiceError> {
        self.dispatch(
            "Failed to fetch product",
            self.service.get_product(id),
            |state, product| {
                state.selected_product = Some(product.clone());
            },
        )
        .await
    }

    /// Creates a product and appends it to the end of the list.
    #[instrument(skip(self, data))]
    pub async fn create_product(&self, data: ProductCreate) -> Result<Product, ServiceError> {
        self.dispatch(
            "Failed to create product",
            self.service.create_product(data),
            |state, product| {
                state.products.push(product.clone());
            },
        )
        .await
    }

    /// Updates a product and reconciles both views of it.
    ///
    /// The list entry is replaced in place when present; a miss leaves the
    /// list alone (no insert-on-update). The selected product is checked
    /// independently, so a detail view not yet merged into the list still
    /// picks up the update.
    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: String,
        patch: ProductPatch,
    ) -> Result<Product, ServiceError> {
        self.dispatch(
            "Failed to update product",
            self.service.update_product(id, patch),
            |state, updated| {
                if let Some(existing) = state.products.iter_mut().find(|p| p.id == updated.id) {
                    *existing = updated.clone();
                }
                if state
                    .selected_product
                    .as_ref()
                    .is_some_and(|p| p.id == updated.id)
                {
                    state.selected_product = Some(updated.clone());
                }
            },
        )
        .await
    }

    /// Deletes a product, dropping it from the list and clearing the
    /// selected slot when it pointed at the same id.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: String) -> Result<(), ServiceError> {
        let target = id.clone();
        self.dispatch(
            "Failed to delete product",
            self.service.delete_product(id),
            move |state, _| {
                state.products.retain(|p| p.id != target);
                if state
                    .selected_product
                    .as_ref()
                    .is_some_and(|p| p.id == target)
                {
                    state.selected_product = None;
                }
            },
        )
        .await
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|state| state.error = None);
    }

    pub fn clear_selected_product(&self) {
        self.state.send_modify(|state| state.selected_product = None);
    }

    /// The pending → fulfilled | rejected lifecycle shared by every
    /// operation. Failures are recorded in state and handed back to the
    /// caller; they never propagate further.
    async fn dispatch<T, Fut, Apply>(
        &self,
        fallback: &str,
        call: Fut,
        on_fulfilled: Apply,
    ) -> Result<T, ServiceError>
    where
        Fut: Future<Output = Result<ApiResponse<T>, ServiceError>>,
        Apply: FnOnce(&mut ProductsState, &T),
    {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        match call.await {
            Ok(reply) => {
                debug!(message = %reply.message, "Operation fulfilled");
                let value = reply.data;
                self.state.send_modify(|state| {
                    state.loading = false;
                    on_fulfilled(state, &value);
                });
                Ok(value)
            }
            Err(err) => {
                let message = failure_message(&err, fallback);
                error!(error = %message, "Operation rejected");
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.error = Some(message);
                });
                Err(err)
            }
        }
    }
}

/// Backend-provided messages are surfaced verbatim; a transport failure has
/// none, so the operation's fallback stands in.
fn failure_message(err: &ServiceError, fallback: &str) -> String {
    match err {
        ServiceError::Disconnected => fallback.to_string(),
        err => err.to_string(),
    }
}
