// SPDX-License-Identifier: MPL-2.0
//! Headless toast and modal message manager.
//!
//! The [`NotificationManager`] owns every piece of notification state: the
//! per-key cache of active instances, the stack of non-blocking toasts, the
//! queue of requests waiting for a free slot, and the single blocking
//! message. Presentation layers read it through [`ToastView`] and never
//! mutate it.
//!
//! # Usage
//!
//! ```
//! use iced_notify::notify::{ManagerSettings, NotificationManager};
//! use iced_notify::scheduler::ManualClock;
//!
//! let clock = ManualClock::new();
//! let mut manager = NotificationManager::new(ManagerSettings::default(), clock.clone());
//!
//! manager.error("Upload failed", None, false);
//! manager.error("Upload failed", None, false);
//! assert_eq!(manager.visible_count(), 1);
//! assert_eq!(manager.toasts().next().and_then(|t| t.badge()), Some(2));
//!
//! clock.advance_ms(1_200);
//! manager.tick();
//! assert!(!manager.has_notifications());
//! ```
//!
//! # Lifecycle
//!
//! Non-blocking: absent → visible → (repeat: visible, timer reset) → exiting → absent.
//! Blocking: absent → visible → (preempted: absent) | (timer or backdrop: exiting → absent).

mod layout;
mod manager;

pub use layout::StackLayout;
pub use manager::{ManagerSettings, Mode, NotificationManager, Phase, ToastHandle, ToastView};
