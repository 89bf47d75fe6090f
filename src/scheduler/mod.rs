// SPDX-License-Identifier: MPL-2.0
//! Time source and cancellable delayed tasks.
//!
//! Nothing in the notification core reads wall-clock time directly. It asks a
//! [`Clock`] for "now" and parks follow-up work in a [`TimerQueue`], which the
//! host drains on every tick. Swapping [`SystemClock`] for [`ManualClock`]
//! makes every timing rule testable without sleeping.

mod clock;
mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timers::{TimerId, TimerQueue};
