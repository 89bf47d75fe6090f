// SPDX-License-Identifier: MPL-2.0
//! Message requests and their de-duplication key.

use super::newtypes::DisplayDuration;
use std::fmt;

/// Text shown when a caller asks for a message without any content.
pub const FALLBACK_TEXT: &str = "No message";

/// Severity level determines visual styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Neutral information.
    Notice,
    /// Something needs the user's attention.
    Warn,
    /// Something failed.
    Error,
}

impl Severity {
    /// All severities, in display order.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Notice,
        Severity::Warn,
        Severity::Error,
    ];

    /// Returns the glyph shown in front of the message text.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Severity::Success => '✓',
            Severity::Notice => 'i',
            Severity::Warn => '!',
            Severity::Error => '×',
        }
    }

    /// Returns a stable lowercase name, used in logs and i18n keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Notice => "notice",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies "the same message" for de-duplication.
///
/// Two requests share a key when severity and (defaulted) text are equal,
/// whatever their duration or blocking flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    severity: Severity,
    text: String,
}

impl DedupKey {
    /// Builds the key for a severity and raw text.
    pub fn new(severity: Severity, text: &str) -> Self {
        Self {
            severity,
            text: normalize_text(text),
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.severity, self.text)
    }
}

/// A request to show a transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRequest {
    key: DedupKey,
    duration: DisplayDuration,
    blocking: bool,
}

impl MessageRequest {
    /// Creates a non-blocking request with the floor duration.
    ///
    /// Empty text is replaced by [`FALLBACK_TEXT`]; whitespace is kept as given.
    pub fn new(severity: Severity, text: impl AsRef<str>) -> Self {
        Self {
            key: DedupKey::new(severity, text.as_ref()),
            duration: DisplayDuration::default(),
            blocking: false,
        }
    }

    /// Creates a success request.
    pub fn success(text: impl AsRef<str>) -> Self {
        Self::new(Severity::Success, text)
    }

    /// Creates a notice request.
    pub fn notice(text: impl AsRef<str>) -> Self {
        Self::new(Severity::Notice, text)
    }

    /// Creates a warning request.
    pub fn warn(text: impl AsRef<str>) -> Self {
        Self::new(Severity::Warn, text)
    }

    /// Creates an error request.
    pub fn error(text: impl AsRef<str>) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Sets the requested duration in milliseconds (clamped to the floor).
    #[must_use]
    pub fn duration_ms(mut self, duration_ms: Option<u64>) -> Self {
        self.duration = DisplayDuration::from_millis(duration_ms);
        self
    }

    /// Selects the blocking (modal) lifecycle.
    #[must_use]
    pub fn blocking(mut self, blocking: bool) -> Self {
        self.blocking = blocking;
        self
    }

    #[must_use]
    pub fn key(&self) -> &DedupKey {
        &self.key
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.key.severity
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.key.text
    }

    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.blocking
    }
}

fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        FALLBACK_TEXT.to_string()
    } else {
        text.to_string()
    }
}
