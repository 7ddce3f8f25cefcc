mod domain;
mod clients;

mod app_system;
mod messages;
mod service;
mod store;

#[cfg(test)]
mod mock_framework;

use tracing::{debug, error, info, Instrument};

use crate::app_system::{setup_tracing, InventorySystem};
use crate::domain::{ProductCreate, ProductPatch};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting product inventory demo");

    // Runs against the default fault profile, so individual steps can hit
    // the simulated network/server failures just like the real UI does.
    let system = InventorySystem::new();
    let store = &system.store;

    // Stand-in for the UI: re-render on every store transition.
    let mut observer = store.subscribe();
    tokio::spawn(async move {
        while observer.changed().await.is_ok() {
            let state = observer.borrow_and_update();
            debug!(
                products = state.products.len(),
                loading = state.loading,
                has_error = state.error.is_some(),
                "Store transition"
            );
        }
    });

    let span = tracing::info_span!("catalog_fetch");
    async {
        info!("Fetching the catalog");
        match store.fetch_products().await {
            Ok(products) => info!(count = products.len(), "Catalog loaded"),
            Err(e) => error!(error = %e, "Catalog fetch failed"),
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("product_creation");
    let created_id = async {
        info!("Creating a product");
        let data = ProductCreate {
            name: "Mechanical Keyboard".to_string(),
            description: "Tenkeyless keyboard with hot-swappable switches".to_string(),
            price: 149.99,
            category: "Electronics".to_string(),
            in_stock: true,
        };
        match store.create_product(data).await {
            Ok(product) => {
                info!(product_id = %product.id, "Product created");
                Some(product.id)
            }
            Err(e) => {
                error!(error = %e, "Product creation failed");
                None
            }
        }
    }
    .instrument(span)
    .await;

    if let Some(id) = created_id {
        let span = tracing::info_span!("product_update");
        async {
            info!("Marking the new product down");
            let patch = ProductPatch {
                price: Some(129.99),
                ..ProductPatch::default()
            };
            match store.update_product(id, patch).await {
                Ok(product) => info!(price = product.price, "Product updated"),
                Err(e) => error!(error = %e, "Product update failed"),
            }
        }
        .instrument(span)
        .await;
    }

    let span = tracing::info_span!("detail_view");
    async {
        info!("Opening a product detail");
        match store.fetch_product("2".to_string()).await {
            Ok(product) => info!(product_name = %product.name, "Detail loaded"),
            Err(e) => error!(error = %e, "Detail fetch failed"),
        }

        info!("Deleting the viewed product");
        match store.delete_product("2".to_string()).await {
            Ok(()) => info!("Product deleted"),
            Err(e) => error!(error = %e, "Product deletion failed"),
        }
    }
    .instrument(span)
    .await;

    let state = store.state();
    info!(
        products = state.products.len(),
        selected = state.selected_product.is_some(),
        last_error = state.error.as_deref().unwrap_or("none"),
        "Final store state"
    );

    // Reset transient UI state the way a navigation away would.
    store.clear_error();
    store.clear_selected_product();

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
