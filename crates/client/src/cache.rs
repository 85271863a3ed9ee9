//! Query-result cache with explicit invalidation.
//!
//! Fetched result sets are cached under stable keys; mutation success
//! handlers emit invalidations and never write values directly. The next
//! read of an invalidated key re-requests from the server, which stays the
//! sole source of truth.

use std::sync::Arc;

use crate::api::types::{OrderLineItem, StoreSummary, UserProfile};

/// Stable keys for independently cached views over server state.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    /// The authenticated user (`GET /users/me`).
    User,
    /// The general order list.
    Orders,
    /// The my-page order list. Cached separately from [`CacheKey::Orders`]
    /// even though both are views over the same server state, so both must
    /// be invalidated after a cancellation.
    MypageOrders,
    /// Favorite stores (`GET /users/me/likes`).
    FavoriteStores,
}

impl CacheKey {
    /// The query-key string used for logging and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Orders => "orders",
            Self::MypageOrders => "mypage-orders",
            Self::FavoriteStores => "favorite-stores",
        }
    }
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    User(Box<UserProfile>),
    Orders(Arc<Vec<OrderLineItem>>),
    Stores(Arc<Vec<StoreSummary>>),
}

/// Invalidation surface consumed by mutation success handlers.
pub trait QueryCache {
    /// Mark `key` stale so the next read refetches it.
    fn invalidate(&self, key: CacheKey);
}

/// Query cache backed by `moka`.
#[derive(Clone)]
pub struct MemoryQueryCache {
    cache: moka::sync::Cache<CacheKey, CacheValue>,
}

impl MemoryQueryCache {
    /// Create a cache sized for the handful of result sets these flows use.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: moka::sync::Cache::new(16),
        }
    }

    /// Read a cached value.
    #[must_use]
    pub fn get(&self, key: CacheKey) -> Option<CacheValue> {
        self.cache.get(&key)
    }

    /// Store a freshly fetched value.
    pub fn insert(&self, key: CacheKey, value: CacheValue) {
        self.cache.insert(key, value);
    }
}

impl Default for MemoryQueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache for MemoryQueryCache {
    fn invalidate(&self, key: CacheKey) {
        tracing::debug!(key = key.as_str(), "cache invalidated");
        self.cache.invalidate(&key);
    }
}
