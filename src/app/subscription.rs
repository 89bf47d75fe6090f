// SPDX-License-Identifier: MPL-2.0
//! Timer subscription for the application.

use super::Message;
use crate::config::defaults::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks while toasts are on screen or queued, or a dialog has a timeout.
///
/// An idle application does not wake up at all.
pub fn create_tick_subscription(has_notifications: bool, has_timed_dialogs: bool) -> Subscription<Message> {
    if has_notifications || has_timed_dialogs {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
