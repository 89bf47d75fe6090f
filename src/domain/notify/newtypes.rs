// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! This module provides type-safe wrappers for notification values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Duration Bounds
// =============================================================================

/// Display duration bounds.
pub mod duration_bounds {
    /// Shortest time a message stays on screen, in milliseconds.
    pub const MIN_MS: u64 = 1000;
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a message stays visible, never shorter than the floor.
///
/// Requests below the floor (or without a duration at all) are silently
/// raised to [`duration_bounds::MIN_MS`]; there is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayDuration(Duration);

impl DisplayDuration {
    /// The floor value.
    pub const MIN: Self = Self(Duration::from_millis(duration_bounds::MIN_MS));

    /// Creates a display duration from an optional millisecond request.
    #[must_use]
    pub fn from_millis(requested: Option<u64>) -> Self {
        match requested {
            Some(ms) if ms > duration_bounds::MIN_MS => Self(Duration::from_millis(ms)),
            _ => Self::MIN,
        }
    }

    /// Creates a display duration from a [`Duration`], clamping to the floor.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration.max(Self::MIN.0))
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }

    /// Returns true if this is the floor value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self == Self::MIN
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self::MIN
    }
}

// =============================================================================
// Capacity Bounds
// =============================================================================

/// Non-blocking stack capacity bounds (1 to 50 toasts).
pub mod capacity_bounds {
    /// Minimum number of simultaneously visible toasts.
    pub const MIN: usize = 1;
    /// Maximum number of simultaneously visible toasts.
    pub const MAX: usize = 50;
    /// Default number of simultaneously visible toasts.
    pub const DEFAULT: usize = 10;
}

// =============================================================================
// StackCapacity
// =============================================================================

/// Maximum number of non-blocking toasts visible at once.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–50).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackCapacity(usize);

impl StackCapacity {
    /// Creates a new capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(capacity_bounds::MIN, capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for StackCapacity {
    fn default() -> Self {
        Self(capacity_bounds::DEFAULT)
    }
}
