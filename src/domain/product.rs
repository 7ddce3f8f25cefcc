use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the inventory.
///
/// `id` and the timestamps are assigned by the backend; `id` is never
/// reassigned once issued. Serializes in the REST wire shape (camelCase,
/// ISO-8601 timestamps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a product. All fields required; the backend
/// assigns the id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Partial update for a product. `None` fields are left unchanged.
/// The target id travels alongside the patch, not inside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// UI-facing state held by the product store.
///
/// Invariants: `products` never holds two entries with the same id and keeps
/// the backend's return order; `selected_product` may hold a product that is
/// not in `products` (a detail fetch not yet merged into the list).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub selected_product: Option<Product>,
    pub loading: bool,
    pub error: Option<String>,
}
