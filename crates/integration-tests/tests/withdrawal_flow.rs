//! Account withdrawal flow, end to end over in-memory collaborators.

use codiit_client::services::withdrawal::{
    AccountWithdrawalController, WithdrawalOutcome, WithdrawalState,
};
use codiit_client::session::{SESSION_STORAGE_KEY, SessionStore};
use codiit_client::ui::Level;
use codiit_integration_tests::{
    AutoConfirm, FakeApi, RecordingNavigator, RecordingNotifier, SharedSession, sample_user,
};

type Controller =
    AccountWithdrawalController<FakeApi, SharedSession, RecordingNotifier, AutoConfirm, RecordingNavigator>;

fn controller(
    api: &FakeApi,
    session: &SharedSession,
    notifier: &RecordingNotifier,
    navigator: &RecordingNavigator,
    confirm: bool,
) -> Controller {
    AccountWithdrawalController::new(
        api.clone(),
        session.clone(),
        notifier.clone(),
        AutoConfirm(confirm),
        navigator.clone(),
    )
}

#[tokio::test]
async fn successful_withdrawal_tears_down_session_and_navigates_home() {
    let api = FakeApi::new(sample_user());
    let session = SharedSession::logged_in(sample_user());
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();
    let mut c = controller(&api, &session, &notifier, &navigator, true);

    let outcome = c.request_withdrawal().await.expect("withdrawal succeeds");

    assert_eq!(outcome, WithdrawalOutcome::Completed);
    assert!(session.current_user().is_none());
    assert!(!session.store().has_record(SESSION_STORAGE_KEY));
    assert_eq!(navigator.paths(), vec!["/".to_string()]);
    assert_eq!(
        notifier.events(),
        vec![(Level::Info, "회원탈퇴가 완료되었습니다.".to_string())]
    );
    // Exactly one API call from this flow.
    assert_eq!(api.calls(), vec!["DELETE /users/delete".to_string()]);
    assert_eq!(c.state(), WithdrawalState::Idle);
}

#[tokio::test]
async fn declined_confirmation_issues_no_request() {
    let api = FakeApi::new(sample_user());
    let session = SharedSession::logged_in(sample_user());
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();
    let mut c = controller(&api, &session, &notifier, &navigator, false);

    let outcome = c.request_withdrawal().await.expect("cancel is not an error");

    assert_eq!(outcome, WithdrawalOutcome::Cancelled);
    assert!(api.calls().is_empty());
    assert!(notifier.events().is_empty());
    assert!(session.current_user().is_some());
}

#[tokio::test]
async fn failed_withdrawal_keeps_session_for_retry() {
    let api = FakeApi::new(sample_user());
    let session = SharedSession::logged_in(sample_user());
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();
    let mut c = controller(&api, &session, &notifier, &navigator, true);

    api.fail_withdraw(500, "");

    c.request_withdrawal().await.expect_err("withdrawal fails");

    // User remains logged in and may retry.
    assert!(session.current_user().is_some());
    assert!(session.store().has_record(SESSION_STORAGE_KEY));
    assert!(navigator.paths().is_empty());
    assert_eq!(
        notifier.events(),
        vec![(Level::Warn, "회원탈퇴에 실패했습니다.".to_string())]
    );
    assert_eq!(c.state(), WithdrawalState::Idle);
}
