//! Shared test doubles for the flow tests.
//!
//! Every collaborator the controllers inject (API, session, toaster,
//! confirm prompt, navigator, query cache) has a recording in-memory
//! double here. The doubles are cheaply cloneable handles over shared
//! state so a test can hand one clone to a controller and keep another
//! for assertions.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::{Arc, Mutex};

use codiit_client::api::{
    AccountApi, OrdersApi, ProfileUpdateRequest, UserProfile,
};
use codiit_client::cache::{CacheKey, QueryCache};
use codiit_client::error::ApiError;
use codiit_client::session::{MemorySession, PersistedSession, SessionStore};
use codiit_client::ui::{ConfirmPrompt, Level, Navigator, Notifier};
use codiit_core::{OrderId, ReviewId, UserId};

/// A sample logged-in user.
#[must_use]
pub fn sample_user() -> UserProfile {
    UserProfile {
        id: UserId::new(1),
        email: "buyer@codiit.example".to_string(),
        name: "구매자".to_string(),
        image_url: Some("https://cdn.codiit.example/avatar.png".to_string()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fake API
// ─────────────────────────────────────────────────────────────────────────────

/// Recording fake for [`AccountApi`] and [`OrdersApi`].
///
/// Responses default to success; queue an error with the `fail_*` methods
/// to exercise failure paths. Every request is recorded as
/// `"METHOD /path"`.
#[derive(Clone)]
pub struct FakeApi {
    inner: Arc<FakeApiInner>,
}

struct FakeApiInner {
    profile: Mutex<UserProfile>,
    me_error: Mutex<Option<ApiError>>,
    update_error: Mutex<Option<ApiError>>,
    withdraw_error: Mutex<Option<ApiError>>,
    cancel_error: Mutex<Option<ApiError>>,
    delete_review_error: Mutex<Option<ApiError>>,
    last_update: Mutex<Option<ProfileUpdateRequest>>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    /// Create a fake whose `GET /users/me` answers with `profile`.
    #[must_use]
    pub fn new(profile: UserProfile) -> Self {
        Self {
            inner: Arc::new(FakeApiInner {
                profile: Mutex::new(profile),
                me_error: Mutex::new(None),
                update_error: Mutex::new(None),
                withdraw_error: Mutex::new(None),
                cancel_error: Mutex::new(None),
                delete_review_error: Mutex::new(None),
                last_update: Mutex::new(None),
                calls: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Replace the profile the next `GET /users/me` returns.
    pub fn set_profile(&self, profile: UserProfile) {
        *self.inner.profile.lock().expect("lock") = profile;
    }

    /// Fail the next profile update with a backend error body.
    pub fn fail_update(&self, status: u16, body: &str) {
        *self.inner.update_error.lock().expect("lock") = Some(backend_error(status, body));
    }

    /// Fail the next withdrawal.
    pub fn fail_withdraw(&self, status: u16, body: &str) {
        *self.inner.withdraw_error.lock().expect("lock") = Some(backend_error(status, body));
    }

    /// Fail the next order cancellation.
    pub fn fail_cancel(&self, status: u16, body: &str) {
        *self.inner.cancel_error.lock().expect("lock") = Some(backend_error(status, body));
    }

    /// Fail the next review deletion.
    pub fn fail_delete_review(&self, status: u16, body: &str) {
        *self.inner.delete_review_error.lock().expect("lock") = Some(backend_error(status, body));
    }

    /// All requests issued so far, as `"METHOD /path"`.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().expect("lock").clone()
    }

    /// The most recent profile update request body.
    #[must_use]
    pub fn last_update(&self) -> Option<ProfileUpdateRequest> {
        self.inner.last_update.lock().expect("lock").clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.inner.calls.lock().expect("lock").push(call.into());
    }

    fn take(&self, slot: &Mutex<Option<ApiError>>) -> Result<(), ApiError> {
        match slot.lock().expect("lock").take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn backend_error(status: u16, body: &str) -> ApiError {
    ApiError::Backend {
        status,
        payload: codiit_client::api::ErrorPayload::from_body(body),
    }
}

impl AccountApi for FakeApi {
    async fn me(&self) -> Result<UserProfile, ApiError> {
        self.record("GET /users/me");
        self.take(&self.inner.me_error)?;
        Ok(self.inner.profile.lock().expect("lock").clone())
    }

    async fn update_profile(&self, request: ProfileUpdateRequest) -> Result<(), ApiError> {
        self.record("PATCH /users/me");
        *self.inner.last_update.lock().expect("lock") = Some(request);
        self.take(&self.inner.update_error)
    }

    async fn withdraw(&self) -> Result<(), ApiError> {
        self.record("DELETE /users/delete");
        self.take(&self.inner.withdraw_error)
    }
}

impl OrdersApi for FakeApi {
    async fn cancel_order(&self, order_id: &OrderId) -> Result<(), ApiError> {
        self.record(format!("DELETE /orders/{order_id}"));
        self.take(&self.inner.cancel_error)
    }

    async fn delete_review(&self, review_id: ReviewId) -> Result<(), ApiError> {
        self.record(format!("DELETE /review/{review_id}"));
        self.take(&self.inner.delete_review_error)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording collaborators
// ─────────────────────────────────────────────────────────────────────────────

/// Cloneable handle over a shared [`MemorySession`].
#[derive(Clone, Default)]
pub struct SharedSession(Arc<MemorySession>);

impl SharedSession {
    #[must_use]
    pub fn logged_in(user: UserProfile) -> Self {
        Self(Arc::new(MemorySession::logged_in(user)))
    }

    #[must_use]
    pub fn store(&self) -> &MemorySession {
        &self.0
    }
}

impl SessionStore for SharedSession {
    fn current_user(&self) -> Option<UserProfile> {
        self.0.current_user()
    }

    fn replace_user(&self, user: UserProfile) {
        self.0.replace_user(user);
    }

    fn logout(&self) {
        self.0.logout();
    }
}

impl PersistedSession for SharedSession {
    fn remove(&self, key: &str) {
        self.0.remove(key);
    }
}

/// Toaster double that records every notification.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().expect("lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: Level, message: &str) {
        self.events
            .lock()
            .expect("lock")
            .push((level, message.to_owned()));
    }
}

/// Query-cache double that records invalidations.
#[derive(Clone, Default)]
pub struct RecordingCache {
    invalidated: Arc<Mutex<Vec<CacheKey>>>,
}

impl RecordingCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn invalidated(&self) -> Vec<CacheKey> {
        self.invalidated.lock().expect("lock").clone()
    }
}

impl QueryCache for RecordingCache {
    fn invalidate(&self, key: CacheKey) {
        self.invalidated.lock().expect("lock").push(key);
    }
}

/// Confirm prompt that always answers the same way.
#[derive(Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Navigator double that records replaced locations.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().expect("lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &str) {
        self.paths.lock().expect("lock").push(path.to_owned());
    }
}
