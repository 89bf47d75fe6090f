// SPDX-License-Identifier: MPL-2.0
//! Owner of the open dialogs.

use super::state::{Close, Dialog, DialogAction, DialogId, DialogKind, DialogOutcome};
use super::{PromptResponse, PromptResult};
use crate::config::defaults::DIALOG_NO_TIMEOUT_MS;
use crate::scheduler::{Clock, SystemClock, TimerId, TimerQueue};
use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tracing::debug;

/// Localized strings used when a caller leaves them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLabels {
    pub default_text: String,
    pub cancel: String,
    pub confirm: String,
}

impl Default for DialogLabels {
    fn default() -> Self {
        Self {
            default_text: "Please confirm".to_string(),
            cancel: "Cancel".to_string(),
            confirm: "Confirm".to_string(),
        }
    }
}

struct Active {
    dialog: Dialog,
    reply: oneshot::Sender<DialogOutcome>,
    timer: Option<TimerId>,
}

/// Stack of open dialogs, newest on top.
///
/// Each opening method returns a future that resolves once the dialog is
/// answered, dismissed or timed out. Futures left pending when the host is
/// dropped resolve with the cancel outcome.
pub struct DialogHost {
    clock: Box<dyn Clock>,
    labels: DialogLabels,
    stack: Vec<Active>,
    timers: TimerQueue<DialogId>,
    next_id: u64,
}

impl fmt::Debug for DialogHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogHost")
            .field("open", &self.stack.len())
            .field("labels", &self.labels)
            .finish()
    }
}

impl Default for DialogHost {
    fn default() -> Self {
        Self::new(SystemClock, DialogLabels::default())
    }
}

impl DialogHost {
    pub fn new(clock: impl Clock + 'static, labels: DialogLabels) -> Self {
        Self {
            clock: Box::new(clock),
            labels,
            stack: Vec::new(),
            timers: TimerQueue::new(),
            next_id: 0,
        }
    }

    /// Replaces the fallback strings used by dialogs opened from now on.
    pub fn set_labels(&mut self, labels: DialogLabels) {
        self.labels = labels;
    }

    /// Asks a yes/no question. Resolves to `true` only on the right button.
    pub fn confirm(
        &mut self,
        text: &str,
        timeout_ms: Option<u64>,
        left: Option<&str>,
        right: Option<&str>,
    ) -> impl Future<Output = bool> + Send + 'static {
        let text = self.text_or_default(text);
        let reply = self.open(Some(text), timeout_ms, left, right, DialogKind::Confirm);
        async move {
            match reply.await {
                Ok(DialogOutcome::Confirm(answer)) => answer,
                _ => false,
            }
        }
    }

    /// Asks for a line of text.
    pub fn prompt(
        &mut self,
        text: &str,
        timeout_ms: Option<u64>,
        left: Option<&str>,
        right: Option<&str>,
    ) -> impl Future<Output = PromptResult> + Send + 'static {
        let text = self.text_or_default(text);
        let kind = DialogKind::Prompt {
            value: String::new(),
        };
        let reply = self.open(Some(text), timeout_ms, left, right, kind);
        async move {
            match reply.await {
                Ok(DialogOutcome::Prompt(result)) => result,
                _ => PromptResult {
                    value: String::new(),
                    response: PromptResponse::Cancelled,
                },
            }
        }
    }

    /// Offers a list of choices and resolves to the chosen index.
    ///
    /// An empty list resolves to `None` without opening anything.
    pub fn menu(
        &mut self,
        items: Vec<String>,
        title: Option<&str>,
        timeout_ms: Option<u64>,
        needs_confirm: bool,
    ) -> impl Future<Output = Option<usize>> + Send + 'static {
        let reply = if items.is_empty() {
            debug!("empty menu resolved without opening");
            None
        } else {
            let kind = DialogKind::Menu {
                items,
                selected: None,
                needs_confirm,
            };
            Some(self.open(title.map(str::to_string), timeout_ms, None, None, kind))
        };
        async move {
            match reply?.await {
                Ok(DialogOutcome::Menu(choice)) => choice,
                _ => None,
            }
        }
    }

    /// Routes `action` to the top dialog. Returns `true` if it closed.
    pub fn handle(&mut self, action: DialogAction) -> bool {
        let Some(active) = self.stack.last_mut() else {
            return false;
        };
        let Some(outcome) = active.dialog.apply(action) else {
            return false;
        };
        if let Some(active) = self.stack.pop() {
            self.resolve(active, outcome);
        }
        true
    }

    /// Closes every dialog whose timeout has elapsed.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        while let Some((_, _, id)) = self.timers.pop_due(now) {
            let Some(position) = self.stack.iter().position(|a| a.dialog.id() == id) else {
                continue;
            };
            let mut active = self.stack.remove(position);
            active.timer = None;
            let outcome = active.dialog.close(Close::TimedOut);
            debug!(dialog = %id, "dialog timed out");
            self.resolve(active, outcome);
        }
    }

    /// Returns the interactive dialog.
    #[must_use]
    pub fn top(&self) -> Option<&Dialog> {
        self.stack.last().map(|active| &active.dialog)
    }

    /// Returns the open dialogs, oldest first.
    pub fn dialogs(&self) -> impl Iterator<Item = &Dialog> {
        self.stack.iter().map(|active| &active.dialog)
    }

    #[must_use]
    pub fn has_dialogs(&self) -> bool {
        !self.stack.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns when the next dialog times out.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn text_or_default(&self, text: &str) -> String {
        if text.trim().is_empty() {
            self.labels.default_text.clone()
        } else {
            text.to_string()
        }
    }

    fn open(
        &mut self,
        text: Option<String>,
        timeout_ms: Option<u64>,
        left: Option<&str>,
        right: Option<&str>,
        kind: DialogKind,
    ) -> oneshot::Receiver<DialogOutcome> {
        let id = DialogId(self.next_id);
        self.next_id += 1;

        let timeout = timeout_ms
            .filter(|ms| *ms != DIALOG_NO_TIMEOUT_MS)
            .map(Duration::from_millis);
        let timer = timeout.map(|timeout| self.timers.schedule(self.clock.now() + timeout, id));

        let dialog = Dialog::new(
            id,
            text,
            label_or(left, &self.labels.cancel),
            label_or(right, &self.labels.confirm),
            timeout,
            kind,
        );
        debug!(dialog = %id, kind = ?dialog.kind(), ?timeout, "dialog opened");

        let (reply, receiver) = oneshot::channel();
        self.stack.push(Active {
            dialog,
            reply,
            timer,
        });
        receiver
    }

    fn resolve(&mut self, active: Active, outcome: DialogOutcome) {
        if let Some(timer) = active.timer {
            self.timers.cancel(timer);
        }
        debug!(dialog = %active.dialog.id(), ?outcome, "dialog resolved");
        // The caller may have dropped its future.
        let _ = active.reply.send(outcome);
    }
}

fn label_or(label: Option<&str>, fallback: &str) -> String {
    match label {
        Some(label) if !label.trim().is_empty() => label.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualClock;

    fn host() -> (DialogHost, ManualClock) {
        let clock = ManualClock::new();
        (
            DialogHost::new(clock.clone(), DialogLabels::default()),
            clock,
        )
    }

    #[tokio::test]
    async fn confirm_resolves_true_on_right_button() {
        let (mut host, _) = host();
        let answer = host.confirm("Delete file?", None, None, None);
        assert!(host.handle(DialogAction::Confirm));
        assert!(answer.await);
        assert!(!host.has_dialogs());
    }

    #[tokio::test]
    async fn confirm_resolves_false_on_backdrop() {
        let (mut host, _) = host();
        let answer = host.confirm("Delete file?", None, None, None);
        host.handle(DialogAction::Backdrop);
        assert!(!answer.await);
    }

    #[tokio::test]
    async fn confirm_times_out_to_false() {
        let (mut host, clock) = host();
        let answer = host.confirm("Still there?", Some(3000), None, None);

        clock.advance_ms(2999);
        host.tick();
        assert!(host.has_dialogs());

        clock.advance_ms(1);
        host.tick();
        assert!(!host.has_dialogs());
        assert!(!answer.await);
    }

    #[tokio::test]
    async fn zero_timeout_waits_forever() {
        let (mut host, clock) = host();
        let _answer = host.confirm("Wait", Some(0), None, None);
        assert!(host.top().and_then(Dialog::timeout).is_none());

        clock.advance_ms(1_000_000);
        host.tick();
        assert!(host.has_dialogs());
        assert!(host.next_deadline().is_none());
    }

    #[test]
    fn blank_text_and_labels_use_fallbacks() {
        let labels = DialogLabels {
            default_text: "Veuillez confirmer".into(),
            cancel: "Annuler".into(),
            confirm: "Valider".into(),
        };
        let mut host = DialogHost::new(ManualClock::new(), labels);
        let _answer = host.confirm("  ", None, Some(""), None);

        let dialog = host.top().expect("dialog open");
        assert_eq!(dialog.text(), Some("Veuillez confirmer"));
        assert_eq!(dialog.cancel_label(), "Annuler");
        assert_eq!(dialog.confirm_label(), "Valider");
    }

    #[tokio::test]
    async fn prompt_returns_typed_value() {
        let (mut host, _) = host();
        let result = host.prompt("Name?", None, Some("No"), Some("Yes"));
        host.handle(DialogAction::Input("Ada".into()));
        host.handle(DialogAction::Confirm);

        let result = result.await;
        assert_eq!(result.value, "Ada");
        assert_eq!(result.response, PromptResponse::Confirmed);
    }

    #[tokio::test]
    async fn prompt_timeout_is_reported() {
        let (mut host, clock) = host();
        let result = host.prompt("Name?", Some(500), None, None);
        host.handle(DialogAction::Input("A".into()));
        clock.advance_ms(500);
        host.tick();

        let result = result.await;
        assert_eq!(result.value, "A");
        assert_eq!(result.response, PromptResponse::TimedOut);
    }

    #[tokio::test]
    async fn empty_menu_resolves_immediately() {
        let (mut host, _) = host();
        let choice = host.menu(Vec::new(), Some("Pick"), None, false);
        assert!(!host.has_dialogs());
        assert_eq!(choice.await, None);
    }

    #[tokio::test]
    async fn menu_click_resolves_index() {
        let (mut host, _) = host();
        let choice = host.menu(vec!["a".into(), "b".into()], None, None, false);
        assert!(host.top().and_then(Dialog::text).is_none());
        host.handle(DialogAction::Select(1));
        assert_eq!(choice.await, Some(1));
    }

    #[test]
    fn menu_keeps_empty_title() {
        let (mut host, _) = host();
        let _choice = host.menu(vec!["a".into()], Some(""), None, false);
        assert_eq!(host.top().and_then(Dialog::text), Some(""));
    }

    #[tokio::test]
    async fn menu_with_confirm_waits_for_right_button() {
        let (mut host, _) = host();
        let choice = host.menu(vec!["a".into(), "b".into()], Some("Pick"), None, true);
        assert!(!host.handle(DialogAction::Select(0)));
        assert!(host.has_dialogs());
        host.handle(DialogAction::Confirm);
        assert_eq!(choice.await, Some(0));
    }

    #[tokio::test]
    async fn only_top_dialog_receives_actions() {
        let (mut host, _) = host();
        let first = host.confirm("first", None, None, None);
        let second = host.confirm("second", None, None, None);
        assert_eq!(host.len(), 2);
        assert_eq!(host.top().and_then(Dialog::text), Some("second"));

        host.handle(DialogAction::Confirm);
        assert_eq!(host.top().and_then(Dialog::text), Some("first"));
        host.handle(DialogAction::Cancel);

        assert!(second.await);
        assert!(!first.await);
    }

    #[tokio::test]
    async fn lower_dialog_can_time_out_first() {
        let (mut host, clock) = host();
        let lower = host.confirm("lower", Some(100), None, None);
        let _upper = host.confirm("upper", None, None, None);

        clock.advance_ms(100);
        host.tick();
        assert_eq!(host.len(), 1);
        assert_eq!(host.top().and_then(Dialog::text), Some("upper"));
        assert!(!lower.await);
    }

    #[tokio::test]
    async fn dropping_host_cancels_pending_dialogs() {
        let (mut host, _) = host();
        let answer = host.confirm("?", None, None, None);
        let result = host.prompt("?", None, None, None);
        let choice = host.menu(vec!["x".into()], None, None, false);
        drop(host);

        assert!(!answer.await);
        assert_eq!(result.await.response, PromptResponse::Cancelled);
        assert_eq!(choice.await, None);
    }

    #[test]
    fn handle_without_dialog_is_noop() {
        let (mut host, _) = host();
        assert!(!host.handle(DialogAction::Confirm));
    }
}
