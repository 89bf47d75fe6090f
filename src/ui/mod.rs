// SPDX-License-Identifier: MPL-2.0
//! User interface rendering.
//!
//! - [`notifications`] - Toast stack, blocking overlay and dialog layers
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod theming;
