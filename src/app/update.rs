// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message};
use crate::dialog::PromptResponse;
use crate::i18n;
use crate::ui::notifications::Event;
use crate::ui::theming::ThemeMode;
use iced::Task;

const MENU_ITEMS: [&str; 3] = [
    "demo-menu-item-apple",
    "demo-menu-item-pear",
    "demo-menu-item-plum",
];

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TextChanged(text) => {
                self.form.text = text;
                Task::none()
            }
            Message::DurationChanged(duration) => {
                self.form.duration = duration;
                Task::none()
            }
            Message::BlockingToggled(blocking) => {
                self.form.blocking = blocking;
                Task::none()
            }
            Message::Notify(severity) => {
                let duration_ms = self.form.duration_ms();
                self.notifications
                    .notify(severity, &self.form.text, duration_ms, self.form.blocking);
                Task::none()
            }
            Message::OpenConfirm => {
                let answer = self.dialogs.confirm(
                    &self.i18n.tr("demo-confirm-text"),
                    None,
                    None,
                    None,
                );
                Task::perform(answer, Message::ConfirmAnswered)
            }
            Message::OpenPrompt => {
                let result = self.dialogs.prompt(
                    &self.i18n.tr("demo-prompt-text"),
                    self.form.duration_ms(),
                    None,
                    None,
                );
                Task::perform(result, Message::PromptAnswered)
            }
            Message::OpenMenu { needs_confirm } => {
                let items = MENU_ITEMS.iter().map(|key| self.i18n.tr(key)).collect();
                let choice = self.dialogs.menu(
                    items,
                    Some(self.i18n.tr("demo-menu-title").as_str()),
                    self.form.duration_ms(),
                    needs_confirm,
                );
                Task::perform(choice, Message::MenuAnswered)
            }
            Message::ConfirmAnswered(answer) => {
                let value = self.i18n.tr(if answer { "demo-yes" } else { "demo-no" });
                self.last_result = Some(
                    self.i18n
                        .tr_with_args("demo-confirm-result", &[("value", value.as_str())]),
                );
                Task::none()
            }
            Message::PromptAnswered(result) => {
                self.last_result = Some(match result.response {
                    PromptResponse::Confirmed => self
                        .i18n
                        .tr_with_args("demo-prompt-result", &[("value", result.value.as_str())]),
                    PromptResponse::Cancelled => self.i18n.tr("demo-prompt-cancelled"),
                    PromptResponse::TimedOut => self.i18n.tr("demo-prompt-timed-out"),
                });
                Task::none()
            }
            Message::MenuAnswered(choice) => {
                self.last_result = Some(match choice.and_then(|i| MENU_ITEMS.get(i)) {
                    Some(key) => {
                        let value = self.i18n.tr(key);
                        self.i18n
                            .tr_with_args("demo-menu-result", &[("value", value.as_str())])
                    }
                    None => self.i18n.tr("demo-menu-none"),
                });
                Task::none()
            }
            Message::Overlay(Event::DismissBlocking) => {
                self.notifications.dismiss_blocking();
                Task::none()
            }
            Message::Overlay(Event::Dialog(action)) => {
                self.dialogs.handle(action);
                Task::none()
            }
            Message::CycleLanguage => {
                self.cycle_language();
                Task::none()
            }
            Message::CycleTheme => {
                self.theme_mode = match self.theme_mode {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::System,
                    ThemeMode::System => ThemeMode::Light,
                };
                self.config.general.theme_mode = self.theme_mode;
                self.persist_config();
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                self.dialogs.tick();
                Task::none()
            }
        }
    }

    fn cycle_language(&mut self) {
        let available = &self.i18n.available_locales;
        if available.is_empty() {
            return;
        }
        let current = available
            .iter()
            .position(|locale| locale == self.i18n.current_locale())
            .unwrap_or(0);
        let next = available[(current + 1) % available.len()].clone();

        self.i18n.set_locale(next.clone());
        self.dialogs.set_labels(i18n::dialog_labels(&self.i18n));
        self.config.general.language = Some(next.to_string());
        self.persist_config();

        let locale = next.to_string();
        self.notifications.notice(
            self.i18n
                .tr_with_args("notification-language-changed", &[("locale", locale.as_str())]),
            None,
            false,
        );
    }
}
