//! samawarun - Content store for the Samawa Run community site
//!
//! Keeps the site's events and gallery photos, seeds them with default
//! content on first run, and mirrors every change to durable key-value
//! storage. The `samawarun` binary is the operator console over it.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{ContentStore, SharedContentStore};
pub use error::SamawarunError;
