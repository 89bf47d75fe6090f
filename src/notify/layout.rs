// SPDX-License-Identifier: MPL-2.0
//! Vertical placement of stacked toasts.

use crate::config::defaults::{STACK_BASE_PX, STACK_GAP_PX};

/// Maps a stack slot to its vertical offset: `base + slot * gap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    pub base: f32,
    pub gap: f32,
}

impl StackLayout {
    #[must_use]
    pub fn new(base: f32, gap: f32) -> Self {
        Self { base, gap }
    }

    /// Returns the offset of the toast in `slot` (0 is the top of the stack).
    #[must_use]
    pub fn offset(&self, slot: usize) -> f32 {
        self.base + slot as f32 * self.gap
    }
}

impl Default for StackLayout {
    fn default() -> Self {
        Self::new(STACK_BASE_PX, STACK_GAP_PX)
    }
}
