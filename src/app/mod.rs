// SPDX-License-Identifier: MPL-2.0
//! Application root for the notification playground.
//!
//! The [`App`] owns a [`NotificationManager`] and a [`DialogHost`] by value,
//! feeds them user input from a small form and renders their state as
//! overlay layers on top of that form.
//!
//! # Module Structure
//!
//! - [`message`] - Message types and runtime flags
//! - [`subscription`] - Timer subscription, active only while something is live
//! - `update` - Message handling
//! - `view` - Rendering of the form and the overlay layers

pub mod message;
pub mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::dialog::DialogHost;
use crate::i18n::{self, I18n};
use crate::notify::{ManagerSettings, NotificationManager};
use crate::scheduler::SystemClock;
use crate::ui::theming::ThemeMode;
use iced::{Element, Subscription, Task, Theme};
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    notifications: NotificationManager,
    dialogs: DialogHost,
    form: FormState,
    /// Outcome of the last dialog, already localized.
    last_result: Option<String>,
}

/// Inputs of the playground form.
#[derive(Debug, Default, Clone)]
struct FormState {
    text: String,
    duration: String,
    blocking: bool,
}

impl FormState {
    /// Parses the duration field; anything that is not a number means "default".
    fn duration_ms(&self) -> Option<u64> {
        self.duration.trim().parse().ok()
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("theme_mode", &self.theme_mode)
            .field("notifications", &self.notifications)
            .field("dialogs", &self.dialogs)
            .finish()
    }
}

/// Builds the Iced application, wires update/view/subscription handlers, and
/// launches it with the provided flags.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, resolves the locale and shows any startup warning.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);
        let settings = ManagerSettings {
            capacity: config.notifications.stack_capacity(),
            ..ManagerSettings::default()
        };
        tracing::info!(
            locale = %i18n.current_locale(),
            capacity = settings.capacity.value(),
            "starting notification playground"
        );

        let mut app = Self {
            dialogs: DialogHost::new(SystemClock, i18n::dialog_labels(&i18n)),
            notifications: NotificationManager::new(settings, SystemClock),
            theme_mode: config.general.theme_mode,
            config,
            config_dir: flags.config_dir,
            i18n,
            form: FormState::default(),
            last_result: None,
        };

        if let Some(key) = config_warning {
            app.notifications.warn(app.i18n.tr(&key), None, false);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.dialogs.next_deadline().is_some(),
        )
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            notifications: &self.notifications,
            dialogs: &self.dialogs,
            text: &self.form.text,
            duration: &self.form.duration,
            blocking: self.form.blocking,
            theme_mode: self.theme_mode,
            last_result: self.last_result.as_deref(),
        })
    }

    /// Writes the current preferences, reporting failures as a toast.
    fn persist_config(&mut self) {
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(error = %err, "failed to save settings");
            self.notifications
                .error(self.i18n.tr("notification-config-save-error"), None, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_duration_means_default() {
        let form = FormState::default();
        assert_eq!(form.duration_ms(), None);
    }

    #[test]
    fn numeric_duration_is_parsed() {
        let form = FormState {
            duration: " 2500 ".into(),
            ..FormState::default()
        };
        assert_eq!(form.duration_ms(), Some(2500));
    }

    #[test]
    fn garbage_duration_means_default() {
        let form = FormState {
            duration: "soon".into(),
            ..FormState::default()
        };
        assert_eq!(form.duration_ms(), None);
    }
}
