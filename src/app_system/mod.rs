//! System orchestration, startup, and shutdown logic.

pub mod inventory_system;
pub mod telemetry;

pub use inventory_system::*;
pub use telemetry::*;
