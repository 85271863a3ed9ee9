//! Review deletion flow.
//!
//! Independent of order cancellation; the two may be in flight
//! concurrently. Deleting a review invalidates both order-list caches so
//! the "리뷰 보기/리뷰 쓰기" button state is re-fetched.

use codiit_core::ReviewId;

use crate::api::OrdersApi;
use crate::cache::{CacheKey, QueryCache};
use crate::error::ApiError;
use crate::ui::{Level, Notifier};

/// Toast shown after a successful deletion.
const REVIEW_DELETED: &str = "리뷰가 삭제됐습니다.";

/// Toast shown when the deletion request fails.
const REVIEW_DELETE_FAILED: &str = "리뷰 삭제에 실패했습니다.";

/// Controller for deleting the buyer's own reviews.
pub struct ReviewController<A, C, N> {
    api: A,
    cache: C,
    notifier: N,
    pending: bool,
}

impl<A, C, N> ReviewController<A, C, N>
where
    A: OrdersApi,
    C: QueryCache,
    N: Notifier,
{
    pub const fn new(api: A, cache: C, notifier: N) -> Self {
        Self {
            api,
            cache,
            notifier,
            pending: false,
        }
    }

    /// Whether a deletion request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Delete a review and refresh both order-list views.
    ///
    /// # Errors
    ///
    /// Propagates the deletion error after showing a warning toast.
    pub async fn delete_review(&mut self, review_id: ReviewId) -> Result<(), ApiError> {
        self.pending = true;
        let result = self.api.delete_review(review_id).await;
        self.pending = false;

        match result {
            Ok(()) => {
                self.cache.invalidate(CacheKey::MypageOrders);
                self.cache.invalidate(CacheKey::Orders);
                self.notifier.notify(Level::Info, REVIEW_DELETED);
                Ok(())
            }
            Err(err) => {
                tracing::error!(review_id = %review_id, error = %err, "review deletion failed");
                self.notifier.notify(Level::Warn, REVIEW_DELETE_FAILED);
                Err(err)
            }
        }
    }
}
