//! Flow controllers.
//!
//! One controller per user-facing flow. Each controller owns its form or
//! dialog state, guards against duplicate in-flight mutations, and
//! converts every network failure into a notification at the mutation
//! boundary.

pub mod orders;
pub mod profile;
pub mod reviews;
pub mod withdrawal;
