//! CODI-IT Core - Shared types library.
//!
//! This crate provides common types used across the CODI-IT client crates:
//! - `client` - Account, order, and review flows against the CODI-IT REST API
//! - `integration-tests` - End-to-end flow tests over in-memory collaborators
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
