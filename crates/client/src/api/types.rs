//! Wire types for the CODI-IT REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use codiit_core::{OrderId, OrderItemId, Price, ReviewId, UserId};

// ─────────────────────────────────────────────────────────────────────────────
// User Types
// ─────────────────────────────────────────────────────────────────────────────

/// The authenticated user's profile.
///
/// Server-authoritative; a successful profile update replaces the cached
/// copy wholesale (re-fetched, never partially merged).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user ID.
    pub id: UserId,
    /// Email address (immutable display field).
    pub email: String,
    /// Display name (nickname).
    pub name: String,
    /// Avatar image URL.
    #[serde(rename = "image")]
    pub image_url: Option<String>,
}

/// A profile update submission.
///
/// Transient value object; exists only for the duration of one PATCH.
#[derive(Debug, Clone)]
pub struct ProfileUpdateRequest {
    /// Current password (required by the backend on every edit).
    pub current_password: String,
    /// New display name, already resolved to a non-blank value.
    pub name: String,
    /// New password, trimmed.
    pub new_password: String,
    /// Optional replacement avatar.
    pub image: Option<AvatarUpload>,
}

/// An avatar file attached to a profile update.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    /// Original file name, forwarded in the multipart part.
    pub file_name: String,
    /// MIME type (e.g., "image/png").
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// A favorite store summary from `GET /users/me/likes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSummary {
    /// Store ID.
    pub id: i64,
    /// Store display name.
    pub name: String,
    /// Store image URL.
    pub image: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Order Types
// ─────────────────────────────────────────────────────────────────────────────

/// One purchased product/size/quantity combination within an order.
///
/// Read-only projection of server state; collections of line items are
/// invalidated after a successful cancellation or review action, never
/// locally mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Unique line item ID.
    pub id: OrderItemId,
    /// Parent order; all line items sharing this ID cancel together.
    #[serde(rename = "orderId")]
    pub order_id: OrderId,
    /// Product display name.
    #[serde(rename = "productName")]
    pub product_name: String,
    /// Product image URL.
    #[serde(rename = "productImage")]
    pub product_image: Option<String>,
    /// Localized size label (e.g., "엑스라지").
    #[serde(rename = "sizeLabel")]
    pub size_label: String,
    /// Price per unit in whole won.
    #[serde(rename = "unitPrice")]
    pub unit_price: Price,
    /// Purchased quantity.
    pub quantity: u32,
    /// Whether the buyer has already reviewed this item.
    #[serde(rename = "isReviewed")]
    pub is_reviewed: bool,
    /// The buyer's review, when one exists.
    #[serde(default)]
    pub review: Option<Review>,
}

impl OrderLineItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// A product review written by the buyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique review ID.
    pub id: ReviewId,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Review body.
    pub content: String,
    /// When the review was written.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Error Payload
// ─────────────────────────────────────────────────────────────────────────────

/// Error body returned by the backend on non-2xx responses.
///
/// The backend answers either with a structured envelope
/// `{ success: false, error: { code, message } }`, a flat `{ message }`,
/// or a raw string body. All three shapes are preserved here so the
/// normalizer can pick the best available message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    /// Always `false` on error responses.
    #[serde(default)]
    pub success: Option<bool>,
    /// Structured error detail.
    #[serde(default)]
    pub error: Option<ErrorDetail>,
    /// Flat message field, used by some endpoints.
    #[serde(default)]
    pub message: Option<String>,
    /// The body verbatim, when it was not a JSON envelope.
    #[serde(skip)]
    pub raw: Option<String>,
}

/// Structured error detail inside the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    /// Backend error code (mirrors the HTTP status in practice).
    pub code: i64,
    /// Human-readable message, possibly a multi-field validation summary.
    pub message: String,
}

impl ErrorPayload {
    /// Parse a response body into an error payload.
    ///
    /// Falls back to carrying the body verbatim when it is not a JSON
    /// envelope; an empty body yields an empty payload.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        if let Ok(payload) = serde_json::from_str::<Self>(body) {
            return payload;
        }

        let trimmed = body.trim();
        Self {
            raw: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
            ..Self::default()
        }
    }

    /// The best available raw message: `error.message`, else `message`,
    /// else the verbatim body.
    #[must_use]
    pub fn raw_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .map(|e| e.message.as_str())
            .or(self.message.as_deref())
            .or(self.raw.as_deref())
    }
}
