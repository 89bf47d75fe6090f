// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::dialog::PromptResult;
use crate::domain::notify::Severity;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Message text typed in the playground form.
    TextChanged(String),
    /// Duration typed in the playground form, in milliseconds.
    DurationChanged(String),
    BlockingToggled(bool),
    /// Show the form's message with the given severity.
    Notify(Severity),
    OpenConfirm,
    OpenPrompt,
    OpenMenu {
        needs_confirm: bool,
    },
    ConfirmAnswered(bool),
    PromptAnswered(PromptResult),
    MenuAnswered(Option<usize>),
    /// Input captured by the toast and dialog layers.
    Overlay(notifications::Event),
    CycleLanguage,
    CycleTheme,
    Tick(Instant), // Drives toast and dialog timers
}

/// Runtime flags passed from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. "fr").
    pub lang: Option<String>,
    /// Optional config directory override (used instead of the platform default).
    pub config_dir: Option<PathBuf>,
}
