use tracing::{error, info};

use crate::clients::ProductServiceClient;
use crate::service::{catalog, FaultProfile, ProductService};
use crate::store::ProductStore;

/// The assembled application core.
///
/// Responsible for starting the backend service, wiring the store to it,
/// and handling shutdown.
pub struct InventorySystem {
    pub store: ProductStore,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Starts the backend seeded with the sample catalog and the default
    /// fault profile.
    pub fn new() -> Self {
        let (service, client) = ProductService::new(32);
        Self::assemble(service, client)
    }

    #[allow(dead_code)]
    pub fn with_profile(faults: FaultProfile) -> Self {
        let (service, client) =
            ProductService::with_catalog(32, catalog::sample_products(), faults);
        Self::assemble(service, client)
    }

    fn assemble(service: ProductService, client: ProductServiceClient) -> Self {
        let handle = tokio::spawn(service.run());

        Self {
            store: ProductStore::new(client),
            handles: vec![handle],
        }
    }

    /// Graceful shutdown: dropping the store closes the service channel,
    /// which ends the service loop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.store);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Service task failed: {:?}", e);
                return Err(format!("Service task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
