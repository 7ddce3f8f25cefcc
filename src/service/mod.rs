//! The simulated product backend: a message-driven service owning the
//! product collection, with randomized fault injection and a seed catalog.

mod actor;
pub mod catalog;
pub mod error;

pub use actor::*;
pub use error::*;
