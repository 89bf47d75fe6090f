// SPDX-License-Identifier: MPL-2.0
use iced_notify::config::Config;
use iced_notify::dialog::{DialogAction, DialogHost, DialogKind, PromptResponse};
use iced_notify::i18n::{self, I18n};
use iced_notify::scheduler::ManualClock;

fn host(lang: &str) -> (DialogHost, ManualClock) {
    let i18n = I18n::new(Some(lang.to_string()), &Config::default());
    let clock = ManualClock::new();
    (DialogHost::new(clock.clone(), i18n::dialog_labels(&i18n)), clock)
}

#[tokio::test]
async fn confirm_outcomes() {
    let (mut host, clock) = host("en-US");

    let yes = host.confirm("Continue?", None, Some("No"), Some("Yes"));
    host.handle(DialogAction::Confirm);
    assert!(yes.await);

    let no = host.confirm("Continue?", None, None, None);
    host.handle(DialogAction::Cancel);
    assert!(!no.await);

    let backdrop = host.confirm("Continue?", None, None, None);
    host.handle(DialogAction::Backdrop);
    assert!(!backdrop.await);

    let timed = host.confirm("Continue?", Some(2000), None, None);
    clock.advance_ms(2000);
    host.tick();
    assert!(!timed.await);
}

#[tokio::test]
async fn prompt_reports_value_and_response() {
    let (mut host, _) = host("en-US");
    let cancelled = host.prompt("", None, None, None);
    assert_eq!(host.top().and_then(|d| d.text()), Some("Please confirm"));
    host.handle(DialogAction::Input("draft".into()));
    host.handle(DialogAction::Backdrop);

    let result = cancelled.await;
    assert_eq!(result.value, "draft");
    assert_eq!(result.response, PromptResponse::Cancelled);
}

#[tokio::test]
async fn menu_rules() {
    let (mut host, clock) = host("fr");

    let empty = host.menu(Vec::new(), None, None, true);
    assert!(host.is_empty());
    assert_eq!(empty.await, None);

    let direct = host.menu(vec!["a".into(), "b".into(), "c".into()], None, None, false);
    host.handle(DialogAction::Select(2));
    assert_eq!(direct.await, Some(2));

    let confirmed = host.menu(vec!["a".into(), "b".into()], Some("Choix"), Some(1000), true);
    match host.top().map(|d| d.kind()) {
        Some(DialogKind::Menu { needs_confirm, .. }) => assert!(*needs_confirm),
        other => panic!("expected menu, got {other:?}"),
    }
    assert_eq!(host.top().map(|d| d.confirm_label()), Some("Confirmer"));
    host.handle(DialogAction::Select(1));
    clock.advance_ms(1000);
    host.tick();
    assert_eq!(confirmed.await, None);
}
