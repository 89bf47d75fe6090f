// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` is a toast and modal notification manager rendered with the
//! Iced GUI framework.
//!
//! The core ([`notify`], [`dialog`], [`scheduler`]) is headless and driven by an
//! explicit clock, so every timing rule can be tested without a window. The
//! [`ui`] and [`app`] modules render that state and ship a small playground.

#![doc(html_root_url = "https://docs.rs/iced_notify/0.1.0")]

pub mod app;
pub mod config;
pub mod dialog;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod notify;
pub mod scheduler;
pub mod ui;
