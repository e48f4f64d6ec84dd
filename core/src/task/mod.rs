//! Task module
//!
//! This module contains task-related types and the authoritative store.

mod model;
mod store;

pub use model::*;
pub use store::TaskStore;
