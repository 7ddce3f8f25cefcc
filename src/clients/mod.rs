//! Typed client handles over the service message channel.

pub mod macros;
mod product_client;

pub use product_client::*;
