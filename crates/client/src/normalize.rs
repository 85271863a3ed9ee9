//! Backend error normalization.
//!
//! The backend validates request bodies with a schema validator and, on
//! rejection, returns one string of the form
//! `"<context> 유효성 검사 실패: field: msg1, field2: msg2"`. This module
//! turns that into clean, line-broken text for end users: the marker and
//! everything before it are discarded, fragments are split on commas, and
//! known field-name prefixes are stripped.
//!
//! The transformation is pure and deterministic. It depends on the exact
//! backend phrasing, which is why it lives behind a single function; if the
//! backend ever grows structured error codes this is the only place that
//! changes.

use crate::api::types::ErrorPayload;

/// Marker emitted by the backend validator ("validation failed:").
const VALIDATION_MARKER: &str = "유효성 검사 실패:";

/// Which flow produced the error. Each flow has its own field-prefix set
/// and fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeContext {
    /// Profile edit (`PATCH /users/me`).
    ProfileEdit,
    /// Signup (`POST /auth/signup`).
    Signup,
}

impl NormalizeContext {
    /// Field-name prefixes stripped from individual fragments.
    const fn field_prefixes(self) -> &'static [&'static str] {
        match self {
            Self::ProfileEdit => &["name:", "currentPassword:", "newPassword:", "image:"],
            Self::Signup => &["name:", "email:", "password:", "type:"],
        }
    }

    /// Fixed fallback shown when the response carries no usable message.
    #[must_use]
    pub const fn fallback(self) -> &'static str {
        match self {
            Self::ProfileEdit => "수정에 실패했습니다.",
            Self::Signup => "회원가입 중 오류가 발생했습니다.",
        }
    }
}

/// Normalize a backend error payload into a display string.
///
/// Picks the best raw message from the payload (`error.message`, else
/// `message`, else the verbatim body, else the flow's fallback) and runs it
/// through [`normalize_message`].
#[must_use]
pub fn normalize(payload: &ErrorPayload, context: NormalizeContext) -> String {
    let raw = payload.raw_message().unwrap_or(context.fallback());
    normalize_message(raw, context)
}

/// Normalize a raw backend message into a display string.
///
/// 1. If the validation marker is present, keep only the text after it
///    (trimmed); when nothing follows the marker, keep the original.
/// 2. Split on `,` into fragments and trim each.
/// 3. Strip a recognized field-name prefix from each fragment.
/// 4. Join the cleaned fragments with newlines.
#[must_use]
pub fn normalize_message(raw: &str, context: NormalizeContext) -> String {
    let message = match raw.split_once(VALIDATION_MARKER) {
        Some((_, rest)) if !rest.trim().is_empty() => rest.trim(),
        _ => raw,
    };

    message
        .split(',')
        .map(str::trim)
        .map(|fragment| strip_field_prefix(fragment, context))
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_field_prefix(fragment: &str, context: NormalizeContext) -> &str {
    for prefix in context.field_prefixes() {
        if let Some(rest) = fragment.strip_prefix(prefix) {
            return rest.trim();
        }
    }
    fragment
}
