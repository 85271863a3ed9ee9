//! Account withdrawal flow.
//!
//! Withdrawal is irreversible: the user must confirm before the delete
//! call is issued, and on success every trace of the session is torn down
//! and the client navigates home, discarding all client state (the
//! account no longer exists). On failure the session is left intact so
//! the user can retry.

use crate::api::AccountApi;
use crate::error::ApiError;
use crate::session::{PersistedSession, SESSION_STORAGE_KEY, SessionStore};
use crate::ui::{ConfirmPrompt, Level, Navigator, Notifier};

/// Irreversibility warning shown before the delete call.
pub const WITHDRAW_CONFIRM: &str =
    "정말로 탈퇴하시겠습니까? 모든 정보가 삭제되며 복구할 수 없습니다.";

/// Toast shown after a successful withdrawal.
const WITHDRAW_DONE: &str = "회원탈퇴가 완료되었습니다.";

/// Toast shown when the delete call fails.
const WITHDRAW_FAILED: &str = "회원탈퇴에 실패했습니다.";

/// Where the flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WithdrawalState {
    #[default]
    Idle,
    /// The confirmation prompt is up.
    ConfirmPending,
    /// The delete call is in flight.
    Requesting,
}

/// How a withdrawal attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalOutcome {
    /// Account deleted; session torn down and navigation issued.
    Completed,
    /// The user declined the confirmation prompt.
    Cancelled,
}

/// Controller for the account withdrawal flow.
pub struct AccountWithdrawalController<A, S, N, P, V> {
    api: A,
    session: S,
    notifier: N,
    prompt: P,
    navigator: V,
    state: WithdrawalState,
}

impl<A, S, N, P, V> AccountWithdrawalController<A, S, N, P, V>
where
    A: AccountApi,
    S: SessionStore + PersistedSession,
    N: Notifier,
    P: ConfirmPrompt,
    V: Navigator,
{
    pub const fn new(api: A, session: S, notifier: N, prompt: P, navigator: V) -> Self {
        Self {
            api,
            session,
            notifier,
            prompt,
            navigator,
            state: WithdrawalState::Idle,
        }
    }

    /// Current flow state.
    #[must_use]
    pub const fn state(&self) -> WithdrawalState {
        self.state
    }

    /// Run the withdrawal flow: confirm, delete, tear down the session,
    /// navigate home.
    ///
    /// # Errors
    ///
    /// Propagates the delete-call error after showing a warning toast;
    /// the session is left intact so the user can retry.
    pub async fn request_withdrawal(&mut self) -> Result<WithdrawalOutcome, ApiError> {
        self.state = WithdrawalState::ConfirmPending;
        if !self.prompt.confirm(WITHDRAW_CONFIRM) {
            self.state = WithdrawalState::Idle;
            return Ok(WithdrawalOutcome::Cancelled);
        }

        self.state = WithdrawalState::Requesting;
        match self.api.withdraw().await {
            Ok(()) => {
                self.session.logout();
                self.session.remove(SESSION_STORAGE_KEY);
                self.notifier.notify(Level::Info, WITHDRAW_DONE);
                // Full navigation, not a client-side route change: the
                // account is gone and all client state must go with it.
                self.navigator.replace("/");
                self.state = WithdrawalState::Idle;
                Ok(WithdrawalOutcome::Completed)
            }
            Err(err) => {
                tracing::error!(error = %err, "account withdrawal failed");
                self.notifier.notify(Level::Warn, WITHDRAW_FAILED);
                self.state = WithdrawalState::Idle;
                Err(err)
            }
        }
    }
}
