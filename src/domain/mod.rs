// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core notification rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`notify`]: Notification value objects ([`Severity`](notify::Severity),
//!   [`MessageRequest`](notify::MessageRequest), [`DedupKey`](notify::DedupKey),
//!   [`DisplayDuration`](notify::DisplayDuration), [`StackCapacity`](notify::StackCapacity))

pub mod notify;
