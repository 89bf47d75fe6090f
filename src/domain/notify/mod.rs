// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! This module contains the request and key types shared by the headless
//! notification manager and any presentation layer built on top of it.

pub mod newtypes;
mod request;

// Re-export commonly used types
pub use newtypes::{DisplayDuration, StackCapacity};
pub use request::{DedupKey, MessageRequest, Severity, FALLBACK_TEXT};
