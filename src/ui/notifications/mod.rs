// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of notifications and dialogs.
//!
//! The renderers only read state: toasts come from
//! [`NotificationManager::toasts`](crate::notify::NotificationManager::toasts),
//! dialogs from [`DialogHost::dialogs`](crate::dialog::DialogHost::dialogs).
//! User input is reported back as an [`Event`] for the host to apply.
//!
//! # Layers
//!
//! From bottom to top: the host content, the toast stack, the blocking
//! message with its backdrop, then open dialogs.

mod dialog;
mod toast;

pub use dialog::DialogLayer;
pub use toast::{severity_color, ToastLayer};

use crate::dialog::DialogAction;

/// Input captured by the notification layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The backdrop of the blocking message was clicked.
    DismissBlocking,
    /// Input for the top dialog.
    Dialog(DialogAction),
}
