// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - Fallback to default locale when translations are missing

pub mod fluent;

pub use fluent::I18n;

use crate::dialog::DialogLabels;

/// Builds the dialog fallback strings for the current locale.
#[must_use]
pub fn dialog_labels(i18n: &I18n) -> DialogLabels {
    DialogLabels {
        default_text: i18n.tr("dialog-default-text"),
        cancel: i18n.tr("dialog-cancel"),
        confirm: i18n.tr("dialog-confirm"),
    }
}
