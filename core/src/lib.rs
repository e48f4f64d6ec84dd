//! Core library for TaskFlow
//!
//! This crate contains the core business logic, including:
//! - Task state management (the authoritative collection and its mutations)
//! - Derived-view computation (filtering, sorting, aggregate counters)
//! - Pluggable persistence and id/clock capabilities

pub mod env;
pub mod error;
pub mod session;
pub mod storage;
pub mod task;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
