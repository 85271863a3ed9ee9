//! Order cancellation flow.
//!
//! Cancellation is all-or-nothing at order granularity: cancelling one
//! line item cancels every item purchased in the same order. Before the
//! request is issued the user is shown the full set of items that will be
//! cancelled together and the total refund amount.

use codiit_core::Price;

use crate::api::{OrderLineItem, OrdersApi};
use crate::cache::{CacheKey, QueryCache};
use crate::error::ApiError;
use crate::ui::{Level, Notifier};

/// Toast shown after a successful cancellation.
const ORDER_CANCELLED: &str = "주문이 취소되었습니다.";

/// Toast shown when the cancellation request fails.
const ORDER_CANCEL_FAILED: &str = "주문 취소에 실패했습니다.";

/// Everything the confirmation dialog needs to show.
///
/// Derived, never stored: recomputed fresh each time a cancellation is
/// initiated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CancellationPreview {
    /// All line items sharing the selected item's order, in the input's
    /// insertion order.
    pub related_items: Vec<OrderLineItem>,
    /// Total refund: sum of unit price times quantity over the related
    /// items.
    pub total_amount: Price,
}

/// Compute the cancellation preview for a selected line item.
///
/// With no selection, returns an empty preview rather than failing; the
/// preview may be computed before a selection exists.
#[must_use]
pub fn cancellation_preview(
    selected: Option<&OrderLineItem>,
    all_items: &[OrderLineItem],
) -> CancellationPreview {
    let Some(selected) = selected else {
        return CancellationPreview::default();
    };

    let related_items: Vec<OrderLineItem> = all_items
        .iter()
        .filter(|item| item.order_id == selected.order_id)
        .cloned()
        .collect();
    let total_amount = related_items.iter().map(OrderLineItem::line_total).sum();

    CancellationPreview {
        related_items,
        total_amount,
    }
}

/// The cancellation dialog and its in-flight request.
#[derive(Debug, Clone, PartialEq)]
enum CancelDialog {
    Closed,
    Open(CancelTarget),
    Cancelling(CancelTarget),
}

/// The selected item and its grouped preview.
#[derive(Debug, Clone, PartialEq)]
pub struct CancelTarget {
    /// The line item the user picked.
    pub item: OrderLineItem,
    /// All items that will be cancelled with it.
    pub preview: CancellationPreview,
}

/// Controller for the order cancellation flow.
pub struct OrderCancellationController<A, C, N> {
    api: A,
    cache: C,
    notifier: N,
    dialog: CancelDialog,
}

impl<A, C, N> OrderCancellationController<A, C, N>
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
            dialog: CancelDialog::Closed,
        }
    }

    /// Open the confirmation dialog for `selected`, computing the grouped
    /// preview over `all_items`. Ignored while a request is in flight.
    pub fn open(&mut self, selected: OrderLineItem, all_items: &[OrderLineItem]) {
        if matches!(self.dialog, CancelDialog::Cancelling(_)) {
            return;
        }

        let preview = cancellation_preview(Some(&selected), all_items);
        self.dialog = CancelDialog::Open(CancelTarget {
            item: selected,
            preview,
        });
    }

    /// Close the dialog without cancelling. Disabled while a request is
    /// in flight.
    pub fn dismiss(&mut self) {
        if matches!(self.dialog, CancelDialog::Cancelling(_)) {
            return;
        }
        self.dialog = CancelDialog::Closed;
    }

    /// The current dialog target, when the dialog is showing.
    #[must_use]
    pub const fn target(&self) -> Option<&CancelTarget> {
        match &self.dialog {
            CancelDialog::Closed => None,
            CancelDialog::Open(target) | CancelDialog::Cancelling(target) => Some(target),
        }
    }

    /// Whether the cancellation request is in flight (confirm and dismiss
    /// controls are disabled).
    #[must_use]
    pub const fn is_cancelling(&self) -> bool {
        matches!(self.dialog, CancelDialog::Cancelling(_))
    }

    /// Issue one deletion request for the entire order.
    ///
    /// On success both order-list caches are invalidated (they are
    /// independently cached views over the same server state), an info
    /// toast is shown, and the dialog closes. On failure the dialog stays
    /// open so the user can retry or abandon. A no-op unless the dialog
    /// is open.
    ///
    /// # Errors
    ///
    /// Propagates the deletion error after showing a warning toast.
    pub async fn confirm(&mut self) -> Result<(), ApiError> {
        let target = match std::mem::replace(&mut self.dialog, CancelDialog::Closed) {
            CancelDialog::Open(target) => target,
            other => {
                self.dialog = other;
                return Ok(());
            }
        };

        let order_id = target.item.order_id.clone();
        self.dialog = CancelDialog::Cancelling(target);

        match self.api.cancel_order(&order_id).await {
            Ok(()) => {
                self.cache.invalidate(CacheKey::Orders);
                self.cache.invalidate(CacheKey::MypageOrders);
                self.notifier.notify(Level::Info, ORDER_CANCELLED);
                self.dialog = CancelDialog::Closed;
                Ok(())
            }
            Err(err) => {
                tracing::error!(order_id = %order_id, error = %err, "order cancellation failed");
                self.notifier.notify(Level::Warn, ORDER_CANCEL_FAILED);
                if let CancelDialog::Cancelling(target) =
                    std::mem::replace(&mut self.dialog, CancelDialog::Closed)
                {
                    self.dialog = CancelDialog::Open(target);
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codiit_core::{OrderItemId, Price};

    fn item(id: i64, order_id: &str, unit_price: i64, quantity: u32) -> OrderLineItem {
        OrderLineItem {
            id: OrderItemId::new(id),
            order_id: order_id.into(),
            product_name: format!("상품 {id}"),
            product_image: None,
            size_label: "L".to_string(),
            unit_price: Price::won(unit_price),
            quantity,
            is_reviewed: false,
            review: None,
        }
    }

    #[test]
    fn test_preview_groups_by_order_and_sums_refund() {
        let items = vec![
            item(1, "A", 1000, 2),
            item(2, "A", 500, 1),
            item(3, "B", 100, 1),
        ];

        let preview = cancellation_preview(items.first(), &items);

        let ids: Vec<i64> = preview.related_items.iter().map(|i| i.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(preview.total_amount, Price::won(2500));
    }

    #[test]
    fn test_preview_preserves_insertion_order() {
        let items = vec![
            item(3, "B", 100, 1),
            item(1, "A", 1000, 2),
            item(2, "A", 500, 1),
        ];

        let preview = cancellation_preview(items.get(2), &items);

        let ids: Vec<i64> = preview.related_items.iter().map(|i| i.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_preview_without_selection_is_empty() {
        let items = vec![item(1, "A", 1000, 2)];
        let preview = cancellation_preview(None, &items);
        assert!(preview.related_items.is_empty());
        assert_eq!(preview.total_amount, Price::ZERO);
    }
}
