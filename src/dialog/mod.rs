// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs awaited as futures.
//!
//! [`DialogHost`] opens confirm, prompt and menu dialogs on top of each other.
//! Only the newest dialog receives [`DialogAction`]s; every dialog may carry
//! its own timeout, driven by [`DialogHost::tick`].
//!
//! ```
//! use iced_notify::dialog::{DialogAction, DialogHost, DialogLabels};
//! use iced_notify::scheduler::ManualClock;
//!
//! let mut host = DialogHost::new(ManualClock::new(), DialogLabels::default());
//! let answer = host.confirm("Discard changes?", None, None, None);
//! host.handle(DialogAction::Confirm);
//!
//! let answer = tokio::runtime::Builder::new_current_thread()
//!     .build()
//!     .unwrap()
//!     .block_on(answer);
//! assert!(answer);
//! ```

mod host;
mod state;

pub use host::{DialogHost, DialogLabels};
pub use state::{
    Dialog, DialogAction, DialogId, DialogKind, DialogOutcome, PromptResponse, PromptResult,
};
