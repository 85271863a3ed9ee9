//! Profile edit flow.
//!
//! Collects nickname/password/avatar changes, validates the password pair
//! before anything reaches the network, and submits one atomic multipart
//! update. On success the authoritative profile is re-fetched and replaces
//! the shared cached copy wholesale; on failure the backend message is
//! normalized and the form is left untouched for correction.

use crate::api::{AccountApi, AvatarUpload, ProfileUpdateRequest, UserProfile};
use crate::error::ApiError;
use crate::normalize::{NormalizeContext, normalize};
use crate::session::SessionStore;
use crate::ui::{Level, Notifier};

/// Standing error shown while the two new-password fields disagree.
pub const PASSWORD_MISMATCH: &str = "비밀번호가 일치하지 않습니다.";

/// Blocking message for a submit attempted with mismatched passwords.
pub const PASSWORD_MISMATCH_ALERT: &str = "새 비밀번호가 일치하지 않습니다.";

/// Toast shown after a successful update.
const PROFILE_UPDATED: &str = "프로필 수정 성공";

/// Editable form state for the profile edit screen.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    /// New nickname; blank falls back to the current display name.
    pub nickname: String,
    /// Current password (required).
    pub current_password: String,
    /// New password (required).
    pub new_password: String,
    /// Confirmation of the new password.
    pub confirm_password: String,
    /// Replacement avatar, when one was selected.
    pub avatar: Option<AvatarUpload>,
}

/// Controller for the profile edit flow.
pub struct ProfileUpdateController<A, S, N> {
    api: A,
    session: S,
    notifier: N,
    form: ProfileForm,
    password_error: Option<&'static str>,
    pending: bool,
}

impl<A, S, N> ProfileUpdateController<A, S, N>
where
    A: AccountApi,
    S: SessionStore,
    N: Notifier,
{
    /// Create a controller with an empty form.
    pub const fn new(api: A, session: S, notifier: N) -> Self {
        Self {
            api,
            session,
            notifier,
            form: ProfileForm {
                nickname: String::new(),
                current_password: String::new(),
                new_password: String::new(),
                confirm_password: String::new(),
                avatar: None,
            },
            password_error: None,
            pending: false,
        }
    }

    /// Current form state.
    #[must_use]
    pub const fn form(&self) -> &ProfileForm {
        &self.form
    }

    /// The standing mismatch error, when set.
    #[must_use]
    pub fn password_error(&self) -> Option<&str> {
        self.password_error
    }

    pub fn set_nickname(&mut self, value: impl Into<String>) {
        self.form.nickname = value.into();
    }

    pub fn set_current_password(&mut self, value: impl Into<String>) {
        self.form.current_password = value.into();
    }

    /// Update the new-password field and re-evaluate the live mismatch
    /// check.
    pub fn set_new_password(&mut self, value: impl Into<String>) {
        self.form.new_password = value.into();
        self.refresh_password_error();
    }

    /// Update the confirmation field and re-evaluate the live mismatch
    /// check.
    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.form.confirm_password = value.into();
        self.refresh_password_error();
    }

    /// Attach a replacement avatar file.
    pub fn attach_avatar(&mut self, avatar: AvatarUpload) {
        self.form.avatar = Some(avatar);
    }

    // The flag is set iff both fields are non-empty and unequal, and
    // cleared the instant they become equal or either becomes empty.
    fn refresh_password_error(&mut self) {
        let mismatch = !self.form.new_password.is_empty()
            && !self.form.confirm_password.is_empty()
            && self.form.new_password != self.form.confirm_password;
        self.password_error = mismatch.then_some(PASSWORD_MISMATCH);
    }

    /// Whether the form passes submit-time validation: current and new
    /// password are both non-blank and the confirmation matches.
    ///
    /// The new password is required on every edit, even for a pure
    /// nickname change; the backend enforces the same rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.form.current_password.trim().is_empty()
            && !self.form.new_password.trim().is_empty()
            && self.form.new_password == self.form.confirm_password
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_valid() && self.password_error.is_none() && !self.pending
    }

    /// Submit the profile update.
    ///
    /// On success: re-fetches the authoritative profile, replaces the
    /// shared cached copy, shows an info toast, and resets the form. On
    /// backend failure: shows a warning toast with the normalized message
    /// and leaves the form untouched so the user can correct and resubmit.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` without touching the network when
    /// the new password and its confirmation differ, and propagates
    /// backend/transport errors after notifying.
    pub async fn submit(&mut self) -> Result<UserProfile, ApiError> {
        if !self.form.new_password.is_empty()
            && self.form.new_password != self.form.confirm_password
        {
            return Err(ApiError::Validation(PASSWORD_MISMATCH_ALERT.to_string()));
        }

        let nickname = self.form.nickname.trim();
        let name = if nickname.is_empty() {
            self.session
                .current_user()
                .map(|user| user.name)
                .unwrap_or_default()
        } else {
            nickname.to_owned()
        };

        let request = ProfileUpdateRequest {
            current_password: self.form.current_password.clone(),
            name,
            new_password: self.form.new_password.trim().to_owned(),
            image: self.form.avatar.clone(),
        };

        self.pending = true;
        let result = self.api.update_profile(request).await;
        self.pending = false;

        match result {
            Ok(()) => {
                let latest = self.api.me().await?;
                self.session.replace_user(latest.clone());
                self.notifier.notify(Level::Info, PROFILE_UPDATED);
                self.reset_form();
                Ok(latest)
            }
            Err(err) => {
                if let Some(payload) = err.payload() {
                    let message = normalize(payload, NormalizeContext::ProfileEdit);
                    self.notifier.notify(Level::Warn, &message);
                } else {
                    self.notifier
                        .notify(Level::Warn, NormalizeContext::ProfileEdit.fallback());
                }
                Err(err)
            }
        }
    }

    fn reset_form(&mut self) {
        self.form = ProfileForm::default();
        self.password_error = None;
    }
}
