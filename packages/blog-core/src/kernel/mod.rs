//! Kernel module - the in-memory store and its sample data.

pub mod seed;
pub mod store;

pub use store::BlogStore;
