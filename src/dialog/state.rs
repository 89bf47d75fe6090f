// SPDX-License-Identifier: MPL-2.0
//! Per-dialog state machine.

use std::fmt;
use std::time::Duration;

/// Identity of an open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialogId(pub(crate) u64);

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dialog-{}", self.0)
    }
}

/// User input routed to the top dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Left button.
    Cancel,
    /// Right button.
    Confirm,
    /// Click on the backdrop around the dialog.
    Backdrop,
    /// Click on a menu item.
    Select(usize),
    /// New content of the prompt input.
    Input(String),
}

/// How a prompt was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResponse {
    Cancelled,
    Confirmed,
    TimedOut,
}

/// Value typed into a prompt and how the prompt was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResult {
    pub value: String,
    pub response: PromptResponse,
}

/// Final value of a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirm(bool),
    Prompt(PromptResult),
    Menu(Option<usize>),
}

/// Body of a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    Confirm,
    Prompt {
        value: String,
    },
    Menu {
        items: Vec<String>,
        selected: Option<usize>,
        needs_confirm: bool,
    },
}

/// Why a dialog is being closed without a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Close {
    Dismissed,
    TimedOut,
}

/// One open dialog.
#[derive(Debug, Clone)]
pub struct Dialog {
    id: DialogId,
    text: Option<String>,
    cancel_label: String,
    confirm_label: String,
    timeout: Option<Duration>,
    kind: DialogKind,
}

impl Dialog {
    pub(crate) fn new(
        id: DialogId,
        text: Option<String>,
        cancel_label: String,
        confirm_label: String,
        timeout: Option<Duration>,
        kind: DialogKind,
    ) -> Self {
        Self {
            id,
            text,
            cancel_label,
            confirm_label,
            timeout,
            kind,
        }
    }

    #[must_use]
    pub fn id(&self) -> DialogId {
        self.id
    }

    /// Message of a confirm or prompt, or the title of a menu.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn cancel_label(&self) -> &str {
        &self.cancel_label
    }

    #[must_use]
    pub fn confirm_label(&self) -> &str {
        &self.confirm_label
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[must_use]
    pub fn kind(&self) -> &DialogKind {
        &self.kind
    }

    /// Returns whether the dialog shows the two buttons.
    ///
    /// A menu that resolves on click has no buttons.
    #[must_use]
    pub fn has_buttons(&self) -> bool {
        !matches!(
            self.kind,
            DialogKind::Menu {
                needs_confirm: false,
                ..
            }
        )
    }

    /// Applies `action`. Returns the outcome when the dialog is resolved.
    pub(crate) fn apply(&mut self, action: DialogAction) -> Option<DialogOutcome> {
        if matches!(action, DialogAction::Cancel | DialogAction::Backdrop) {
            return Some(self.close(Close::Dismissed));
        }

        match (action, &mut self.kind) {
            (DialogAction::Confirm, DialogKind::Confirm) => Some(DialogOutcome::Confirm(true)),
            (DialogAction::Confirm, DialogKind::Prompt { value }) => {
                Some(DialogOutcome::Prompt(PromptResult {
                    value: value.clone(),
                    response: PromptResponse::Confirmed,
                }))
            }
            (
                DialogAction::Confirm,
                DialogKind::Menu {
                    selected,
                    needs_confirm: true,
                    ..
                },
            ) => Some(DialogOutcome::Menu(*selected)),
            (DialogAction::Input(input), DialogKind::Prompt { value }) => {
                *value = input;
                None
            }
            (
                DialogAction::Select(index),
                DialogKind::Menu {
                    items,
                    selected,
                    needs_confirm,
                },
            ) if index < items.len() => {
                if *needs_confirm {
                    *selected = Some(index);
                    None
                } else {
                    Some(DialogOutcome::Menu(Some(index)))
                }
            }
            _ => None,
        }
    }

    /// Outcome of closing the dialog without a confirming press.
    pub(crate) fn close(&self, reason: Close) -> DialogOutcome {
        match &self.kind {
            DialogKind::Confirm => DialogOutcome::Confirm(false),
            DialogKind::Prompt { value } => DialogOutcome::Prompt(PromptResult {
                value: value.clone(),
                response: match reason {
                    Close::Dismissed => PromptResponse::Cancelled,
                    Close::TimedOut => PromptResponse::TimedOut,
                },
            }),
            DialogKind::Menu { .. } => DialogOutcome::Menu(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog(kind: DialogKind) -> Dialog {
        Dialog::new(
            DialogId(0),
            Some("Proceed?".into()),
            "Cancel".into(),
            "Confirm".into(),
            None,
            kind,
        )
    }

    fn menu(needs_confirm: bool) -> Dialog {
        dialog(DialogKind::Menu {
            items: vec!["one".into(), "two".into()],
            selected: None,
            needs_confirm,
        })
    }

    #[test]
    fn confirm_buttons_map_to_bool() {
        assert_eq!(
            dialog(DialogKind::Confirm).apply(DialogAction::Confirm),
            Some(DialogOutcome::Confirm(true))
        );
        assert_eq!(
            dialog(DialogKind::Confirm).apply(DialogAction::Cancel),
            Some(DialogOutcome::Confirm(false))
        );
        assert_eq!(
            dialog(DialogKind::Confirm).apply(DialogAction::Backdrop),
            Some(DialogOutcome::Confirm(false))
        );
    }

    #[test]
    fn prompt_keeps_latest_input() {
        let mut prompt = dialog(DialogKind::Prompt {
            value: String::new(),
        });
        assert!(prompt.apply(DialogAction::Input("ali".into())).is_none());
        assert!(prompt.apply(DialogAction::Input("alice".into())).is_none());

        assert_eq!(
            prompt.apply(DialogAction::Confirm),
            Some(DialogOutcome::Prompt(PromptResult {
                value: "alice".into(),
                response: PromptResponse::Confirmed,
            }))
        );
    }

    #[test]
    fn prompt_timeout_reports_value() {
        let mut prompt = dialog(DialogKind::Prompt {
            value: String::new(),
        });
        prompt.apply(DialogAction::Input("half".into()));
        assert_eq!(
            prompt.close(Close::TimedOut),
            DialogOutcome::Prompt(PromptResult {
                value: "half".into(),
                response: PromptResponse::TimedOut,
            })
        );
    }

    #[test]
    fn menu_without_confirm_resolves_on_click() {
        let mut menu = menu(false);
        assert!(!menu.has_buttons());
        assert_eq!(
            menu.apply(DialogAction::Select(1)),
            Some(DialogOutcome::Menu(Some(1)))
        );
    }

    #[test]
    fn menu_with_confirm_selects_then_resolves() {
        let mut menu = menu(true);
        assert!(menu.has_buttons());
        assert!(menu.apply(DialogAction::Select(0)).is_none());
        assert!(menu.apply(DialogAction::Select(1)).is_none());
        assert_eq!(
            menu.apply(DialogAction::Confirm),
            Some(DialogOutcome::Menu(Some(1)))
        );
    }

    #[test]
    fn menu_confirm_without_selection_is_none() {
        assert_eq!(
            menu(true).apply(DialogAction::Confirm),
            Some(DialogOutcome::Menu(None))
        );
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut menu = menu(false);
        assert!(menu.apply(DialogAction::Select(7)).is_none());
    }

    #[test]
    fn unrelated_actions_are_ignored() {
        let mut confirm = dialog(DialogKind::Confirm);
        assert!(confirm.apply(DialogAction::Select(0)).is_none());
        assert!(confirm.apply(DialogAction::Input("x".into())).is_none());
    }
}
