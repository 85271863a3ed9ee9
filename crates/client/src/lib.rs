//! CODI-IT client library.
//!
//! Implements the customer-facing account and order flows of the CODI-IT
//! storefront as plain Rust controllers over a REST backend:
//!
//! - profile editing with backend error normalization ([`services::profile`])
//! - irreversible account withdrawal ([`services::withdrawal`])
//! - all-or-nothing order cancellation with a grouped preview
//!   ([`services::orders`])
//! - review deletion ([`services::reviews`])
//!
//! All real business rules (password verification, inventory restoration,
//! point refunds) live in the backend. The controllers here validate input
//! before it reaches the network, issue one mutation at a time, and treat
//! server responses as the sole source of truth: caches are invalidated and
//! re-fetched, never locally merged.
//!
//! External collaborators (session store, toast presenter, confirm prompt,
//! navigation, query cache) are injected as traits so the flows can be
//! exercised without a UI or a live backend.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod normalize;
pub mod services;
pub mod session;
pub mod ui;
