// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toasts**: Stack capacity, display duration floor, exit animation
//! - **Stacking**: Vertical placement of non-blocking toasts
//! - **Dialogs**: Dialog timeouts
//! - **Host**: Tick rate of the host event loop

use crate::domain::notify::newtypes::{capacity_bounds, duration_bounds};

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default number of non-blocking toasts visible at once.
pub const DEFAULT_TOAST_CAPACITY: usize = capacity_bounds::DEFAULT;

/// Minimum configurable toast capacity.
pub const MIN_TOAST_CAPACITY: usize = capacity_bounds::MIN;

/// Maximum configurable toast capacity.
pub const MAX_TOAST_CAPACITY: usize = capacity_bounds::MAX;

/// Shortest visible duration of any message (in milliseconds).
pub const MIN_DISPLAY_DURATION_MS: u64 = duration_bounds::MIN_MS;

/// Length of the fade/slide-out played before a message is removed (in milliseconds).
pub const FADE_OUT_MS: u64 = 200;

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Distance from the top of the window to the first toast slot (in pixels).
pub const STACK_BASE_PX: f32 = 20.0;

/// Vertical distance between two consecutive toast slots (in pixels).
pub const STACK_GAP_PX: f32 = 52.0;

// ==========================================================================
// Dialog Defaults
// ==========================================================================

/// Dialog timeout meaning "wait for the user indefinitely".
pub const DIALOG_NO_TIMEOUT_MS: u64 = 0;

// ==========================================================================
// Host Defaults
// ==========================================================================

/// Interval at which the host drives pending timers (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Toast validation
    assert!(MIN_TOAST_CAPACITY > 0);
    assert!(MAX_TOAST_CAPACITY >= MIN_TOAST_CAPACITY);
    assert!(DEFAULT_TOAST_CAPACITY >= MIN_TOAST_CAPACITY);
    assert!(DEFAULT_TOAST_CAPACITY <= MAX_TOAST_CAPACITY);
    assert!(FADE_OUT_MS < MIN_DISPLAY_DURATION_MS);

    // Stacking validation
    assert!(STACK_BASE_PX >= 0.0);
    assert!(STACK_GAP_PX > 0.0);

    // The host must tick faster than the shortest animation it drives
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < FADE_OUT_MS);
};
