//! Newtype wrappers for domain primitives.

pub mod id;
pub mod price;

pub use id::{OrderId, OrderItemId, ReviewId, UserId};
pub use price::Price;
