//! Profile edit flow, end to end over in-memory collaborators.

use codiit_client::services::profile::ProfileUpdateController;
use codiit_client::session::SessionStore;
use codiit_client::ui::Level;
use codiit_core::UserId;
use codiit_integration_tests::{FakeApi, RecordingNotifier, SharedSession, sample_user};

fn filled_controller(
    api: &FakeApi,
    session: &SharedSession,
    notifier: &RecordingNotifier,
) -> ProfileUpdateController<FakeApi, SharedSession, RecordingNotifier> {
    let mut controller =
        ProfileUpdateController::new(api.clone(), session.clone(), notifier.clone());
    controller.set_current_password("pw1");
    controller.set_new_password("pw2");
    controller.set_confirm_password("pw2");
    controller
}

#[tokio::test]
async fn successful_update_refetches_and_replaces_cached_user() {
    let api = FakeApi::new(sample_user());
    let session = SharedSession::logged_in(sample_user());
    let notifier = RecordingNotifier::new();
    let mut controller = filled_controller(&api, &session, &notifier);
    controller.set_nickname("새닉네임");

    // The backend applies the update; the refetch returns the new state.
    let mut updated = sample_user();
    updated.name = "새닉네임".to_string();
    api.set_profile(updated.clone());

    let latest = controller.submit().await.expect("update succeeds");

    assert_eq!(latest, updated);
    assert_eq!(session.current_user(), Some(updated));
    assert_eq!(
        api.calls(),
        vec!["PATCH /users/me".to_string(), "GET /users/me".to_string()]
    );
    assert_eq!(
        notifier.events(),
        vec![(Level::Info, "프로필 수정 성공".to_string())]
    );

    // Form fields and the mismatch error reset only on success.
    assert!(controller.form().nickname.is_empty());
    assert!(controller.form().current_password.is_empty());
    assert!(controller.form().new_password.is_empty());
    assert!(controller.form().confirm_password.is_empty());
    assert!(controller.password_error().is_none());
}

#[tokio::test]
async fn blank_nickname_falls_back_to_current_display_name() {
    let api = FakeApi::new(sample_user());
    let session = SharedSession::logged_in(sample_user());
    let notifier = RecordingNotifier::new();
    let mut controller = filled_controller(&api, &session, &notifier);
    controller.set_nickname("   ");

    controller.submit().await.expect("update succeeds");

    let request = api.last_update().expect("request sent");
    assert_eq!(request.name, "구매자");
    assert_eq!(request.current_password, "pw1");
    assert_eq!(request.new_password, "pw2");
    assert!(request.image.is_none());
}

#[tokio::test]
async fn backend_validation_error_is_normalized_and_form_kept() {
    let api = FakeApi::new(sample_user());
    let session = SharedSession::logged_in(sample_user());
    let notifier = RecordingNotifier::new();
    let mut controller = filled_controller(&api, &session, &notifier);

    api.fail_update(
        400,
        r#"{"success":false,"error":{"code":400,"message":"유효성 검사 실패: currentPassword: 비밀번호가 일치하지 않습니다"}}"#,
    );

    controller.submit().await.expect_err("update fails");

    assert_eq!(
        notifier.events(),
        vec![(Level::Warn, "비밀번호가 일치하지 않습니다".to_string())]
    );
    // Form state preserved for correction; no refetch happened.
    assert_eq!(controller.form().current_password, "pw1");
    assert_eq!(controller.form().new_password, "pw2");
    assert_eq!(api.calls(), vec!["PATCH /users/me".to_string()]);
    // The cached user is untouched on failure.
    assert_eq!(session.current_user().map(|u| u.id), Some(UserId::new(1)));
}

#[tokio::test]
async fn unstructured_failure_uses_fixed_fallback_message() {
    let api = FakeApi::new(sample_user());
    let session = SharedSession::logged_in(sample_user());
    let notifier = RecordingNotifier::new();
    let mut controller = filled_controller(&api, &session, &notifier);

    api.fail_update(502, "");

    controller.submit().await.expect_err("update fails");

    assert_eq!(
        notifier.events(),
        vec![(Level::Warn, "수정에 실패했습니다.".to_string())]
    );
}

#[tokio::test]
async fn multi_field_validation_errors_join_with_newlines() {
    let api = FakeApi::new(sample_user());
    let session = SharedSession::logged_in(sample_user());
    let notifier = RecordingNotifier::new();
    let mut controller = filled_controller(&api, &session, &notifier);

    api.fail_update(
        400,
        r#"{"success":false,"error":{"code":400,"message":"프로필 유효성 검사 실패: name: 닉네임은 2자 이상이어야 합니다, newPassword: 비밀번호는 8자 이상이어야 합니다"}}"#,
    );

    controller.submit().await.expect_err("update fails");

    assert_eq!(
        notifier.events(),
        vec![(
            Level::Warn,
            "닉네임은 2자 이상이어야 합니다\n비밀번호는 8자 이상이어야 합니다".to_string()
        )]
    );
}
