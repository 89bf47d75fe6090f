// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The manager handles de-duplication, queuing, display timing and removal of
//! messages. It limits the number of visible toasts and keeps at most one
//! blocking message on screen.

use super::layout::StackLayout;
use crate::config::defaults::FADE_OUT_MS;
use crate::domain::notify::{DedupKey, DisplayDuration, MessageRequest, Severity, StackCapacity};
use crate::scheduler::{Clock, SystemClock, TimerId, TimerQueue};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Opaque identity of an on-screen message instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastHandle(u64);

/// Which lifecycle an instance follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Modal with a backdrop, one at a time.
    Blocking,
    /// Stacked toast.
    NonBlocking,
}

/// Where an instance is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// On screen, counting down.
    Visible,
    /// Playing the exit animation; removed when it ends.
    Exiting,
}

/// Tunables of a [`NotificationManager`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagerSettings {
    /// Maximum number of simultaneously visible non-blocking toasts.
    pub capacity: StackCapacity,
    /// Vertical placement of stacked toasts.
    pub layout: StackLayout,
    /// Length of the exit animation.
    pub fade_out: Duration,
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self {
            capacity: StackCapacity::default(),
            layout: StackLayout::default(),
            fade_out: Duration::from_millis(FADE_OUT_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Expire,
    Remove,
}

#[derive(Debug, Clone)]
struct Timer {
    key: DedupKey,
    kind: TimerKind,
}

/// Cache entry for one active dedup key.
#[derive(Debug)]
struct Entry {
    handle: ToastHandle,
    count: u32,
    effective: DisplayDuration,
    mode: Mode,
    phase: Phase,
    slot: Option<usize>,
    timer: TimerId,
    /// When the current countdown ends. Never moves earlier on a repeat.
    expires_at: Instant,
}

/// Manages the message cache, the toast stack, the pending queue and the
/// blocking singleton.
pub struct NotificationManager {
    settings: ManagerSettings,
    clock: Box<dyn Clock>,
    /// Active instances, one per dedup key.
    entries: HashMap<DedupKey, Entry>,
    /// Visible non-blocking keys in insertion order (top first).
    stack: Vec<DedupKey>,
    /// Non-blocking requests waiting for a free slot, with their arrival time.
    pending: VecDeque<(MessageRequest, Instant)>,
    /// Key of the current blocking message.
    blocking: Option<DedupKey>,
    timers: TimerQueue<Timer>,
    next_handle: u64,
}

impl fmt::Debug for NotificationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationManager")
            .field("visible", &self.stack.len())
            .field("queued", &self.pending.len())
            .field("blocking", &self.blocking)
            .finish()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(ManagerSettings::default(), SystemClock)
    }
}

impl NotificationManager {
    /// Creates an empty manager reading time from `clock`.
    pub fn new(settings: ManagerSettings, clock: impl Clock + 'static) -> Self {
        Self {
            settings,
            clock: Box::new(clock),
            entries: HashMap::new(),
            stack: Vec::new(),
            pending: VecDeque::new(),
            blocking: None,
            timers: TimerQueue::new(),
            next_handle: 0,
        }
    }

    /// Shows a message. Empty text is replaced by a placeholder and durations
    /// below one second are raised to one second.
    pub fn notify(
        &mut self,
        severity: Severity,
        text: impl AsRef<str>,
        duration_ms: Option<u64>,
        blocking: bool,
    ) {
        self.push(
            MessageRequest::new(severity, text)
                .duration_ms(duration_ms)
                .blocking(blocking),
        );
    }

    pub fn success(&mut self, text: impl AsRef<str>, duration_ms: Option<u64>, blocking: bool) {
        self.notify(Severity::Success, text, duration_ms, blocking);
    }

    pub fn notice(&mut self, text: impl AsRef<str>, duration_ms: Option<u64>, blocking: bool) {
        self.notify(Severity::Notice, text, duration_ms, blocking);
    }

    pub fn warn(&mut self, text: impl AsRef<str>, duration_ms: Option<u64>, blocking: bool) {
        self.notify(Severity::Warn, text, duration_ms, blocking);
    }

    pub fn error(&mut self, text: impl AsRef<str>, duration_ms: Option<u64>, blocking: bool) {
        self.notify(Severity::Error, text, duration_ms, blocking);
    }

    /// Admits a request.
    ///
    /// A request whose key is already on screen only bumps the count badge
    /// and restarts the countdown with the longest duration seen so far.
    /// A fresh blocking request replaces the current blocking message at once.
    /// A fresh non-blocking request is shown if a slot is free and nothing is
    /// waiting, otherwise it joins the back of the queue.
    pub fn push(&mut self, request: MessageRequest) {
        let now = self.clock.now();
        if self.extend(&request, now) {
            return;
        }

        if request.is_blocking() {
            self.show_blocking(request, now);
        } else if self.stack.len() < self.settings.capacity.value() && self.pending.is_empty() {
            self.show_stacked(request, now);
        } else {
            debug!(key = %request.key(), queued = self.pending.len() + 1, "stack full, queuing");
            self.pending.push_back((request, now));
        }
    }

    /// Fires every timer that is due.
    ///
    /// Each timer is handled at its own deadline, so a late tick produces the
    /// same state as a punctual one.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        while let Some((id, deadline, timer)) = self.timers.pop_due(now) {
            match timer.kind {
                TimerKind::Expire => self.expire(&timer.key, id, deadline),
                TimerKind::Remove => self.remove(&timer.key, id, deadline),
            }
        }
    }

    /// Dismisses the blocking message early (backdrop click).
    pub fn dismiss_blocking(&mut self) {
        let Some(key) = self.blocking.clone() else {
            return;
        };
        let Some(entry) = self.entries.get(&key) else {
            return;
        };
        if entry.phase == Phase::Exiting {
            return;
        }
        let timer = entry.timer;
        self.timers.cancel(timer);
        debug!(key = %key, "blocking message dismissed");
        let now = self.clock.now();
        self.start_exit(&key, now);
    }

    /// Number of non-blocking toasts on screen, including ones fading out.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.stack.len()
    }

    /// Number of non-blocking requests waiting for a slot.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether anything is on screen or waiting.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty() || !self.pending.is_empty()
    }

    /// Returns the stacked toasts, top first.
    pub fn toasts(&self) -> impl Iterator<Item = ToastView<'_>> {
        self.stack.iter().filter_map(|key| self.view_of(key))
    }

    /// Returns the blocking message, if any.
    #[must_use]
    pub fn blocking(&self) -> Option<ToastView<'_>> {
        self.blocking.as_ref().and_then(|key| self.view_of(key))
    }

    /// Returns the phase of the instance showing `(severity, text)`.
    #[must_use]
    pub fn phase_of(&self, severity: Severity, text: &str) -> Option<Phase> {
        self.entries
            .get(&DedupKey::new(severity, text))
            .map(|entry| entry.phase)
    }

    /// Returns whether `(severity, text)` is on screen and not fading out.
    #[must_use]
    pub fn is_visible(&self, severity: Severity, text: &str) -> bool {
        self.phase_of(severity, text) == Some(Phase::Visible)
    }

    /// Returns how many times `(severity, text)` was requested while on screen.
    #[must_use]
    pub fn count_of(&self, severity: Severity, text: &str) -> Option<u32> {
        self.entries
            .get(&DedupKey::new(severity, text))
            .map(|entry| entry.count)
    }

    /// Returns when the next timer is due, for hosts that sleep between ticks.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn settings(&self) -> &ManagerSettings {
        &self.settings
    }

    fn view_of<'a>(&'a self, key: &'a DedupKey) -> Option<ToastView<'a>> {
        let entry = self.entries.get(key)?;
        Some(ToastView {
            handle: entry.handle,
            key,
            count: entry.count,
            mode: entry.mode,
            phase: entry.phase,
            slot: entry.slot,
            offset: entry.slot.map(|slot| self.settings.layout.offset(slot)),
        })
    }

    /// Applies a repeat to an active key. Returns `false` if the key is not active.
    fn extend(&mut self, request: &MessageRequest, now: Instant) -> bool {
        let Some(entry) = self.entries.get_mut(request.key()) else {
            return false;
        };

        entry.count += 1;
        entry.effective = entry.effective.max(request.duration());
        entry.phase = Phase::Visible;
        entry.expires_at = entry.expires_at.max(now + entry.effective.as_duration());
        self.timers.cancel(entry.timer);
        entry.timer = self.timers.schedule(
            entry.expires_at,
            Timer {
                key: request.key().clone(),
                kind: TimerKind::Expire,
            },
        );
        debug!(
            key = %request.key(),
            count = entry.count,
            duration_ms = entry.effective.as_millis(),
            "repeat extended visible message"
        );
        true
    }

    fn show_blocking(&mut self, request: MessageRequest, now: Instant) {
        if let Some(previous) = self.blocking.take() {
            if let Some(entry) = self.entries.remove(&previous) {
                self.timers.cancel(entry.timer);
                info!(key = %previous, next = %request.key(), "blocking message preempted");
            }
        }
        let key = request.key().clone();
        self.insert(request, Mode::Blocking, now);
        self.blocking = Some(key);
    }

    fn show_stacked(&mut self, request: MessageRequest, now: Instant) {
        let key = request.key().clone();
        self.insert(request, Mode::NonBlocking, now);
        self.stack.push(key);
        self.restack();
    }

    fn insert(&mut self, request: MessageRequest, mode: Mode, now: Instant) {
        let handle = ToastHandle(self.next_handle);
        self.next_handle += 1;

        let key = request.key().clone();
        let expires_at = now + request.duration().as_duration();
        let timer = self.timers.schedule(
            expires_at,
            Timer {
                key: key.clone(),
                kind: TimerKind::Expire,
            },
        );
        debug!(
            key = %key,
            ?mode,
            duration_ms = request.duration().as_millis(),
            "message shown"
        );
        self.entries.insert(
            key,
            Entry {
                handle,
                count: 1,
                effective: request.duration(),
                mode,
                phase: Phase::Visible,
                slot: None,
                timer,
                expires_at,
            },
        );
    }

    fn expire(&mut self, key: &DedupKey, id: TimerId, at: Instant) {
        if self.entries.get(key).is_some_and(|entry| entry.timer == id) {
            debug!(key = %key, "message expired");
            self.start_exit(key, at);
        }
    }

    fn start_exit(&mut self, key: &DedupKey, at: Instant) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.phase = Phase::Exiting;
            entry.timer = self.timers.schedule(
                at + self.settings.fade_out,
                Timer {
                    key: key.clone(),
                    kind: TimerKind::Remove,
                },
            );
        }
    }

    fn remove(&mut self, key: &DedupKey, id: TimerId, at: Instant) {
        if !self.entries.get(key).is_some_and(|entry| entry.timer == id) {
            return;
        }
        let Some(entry) = self.entries.remove(key) else {
            return;
        };
        debug!(key = %key, count = entry.count, "message removed");

        match entry.mode {
            Mode::NonBlocking => {
                self.stack.retain(|k| k != key);
                self.restack();
                self.admit_pending(at);
            }
            Mode::Blocking => {
                if self.blocking.as_ref() == Some(key) {
                    self.blocking = None;
                }
            }
        }
    }

    /// Moves queued requests onto the stack while slots are free.
    ///
    /// A request is admitted at the slot's release time, or at its own
    /// arrival if it came in after that.
    fn admit_pending(&mut self, at: Instant) {
        while self.stack.len() < self.settings.capacity.value() {
            let Some((request, arrived)) = self.pending.pop_front() else {
                break;
            };
            let admitted = at.max(arrived);
            if !self.extend(&request, admitted) {
                self.show_stacked(request, admitted);
            }
        }
    }

    /// Reassigns contiguous slots to the stacked toasts in insertion order.
    fn restack(&mut self) {
        for (slot, key) in self.stack.iter().enumerate() {
            if let Some(entry) = self.entries.get_mut(key) {
                entry.slot = Some(slot);
            }
        }
    }
}

/// Read-only snapshot of one on-screen message.
#[derive(Debug, Clone, Copy)]
pub struct ToastView<'a> {
    handle: ToastHandle,
    key: &'a DedupKey,
    count: u32,
    mode: Mode,
    phase: Phase,
    slot: Option<usize>,
    offset: Option<f32>,
}

impl<'a> ToastView<'a> {
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        self.handle
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.key.severity()
    }

    #[must_use]
    pub fn text(&self) -> &'a str {
        self.key.text()
    }

    /// Number of requests merged into this instance.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Count to display on the badge; `None` for a single request.
    #[must_use]
    pub fn badge(&self) -> Option<u32> {
        (self.count > 1).then_some(self.count)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Stack position, top first. `None` for the blocking message.
    #[must_use]
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    /// Vertical offset in pixels. `None` for the blocking message.
    #[must_use]
    pub fn offset(&self) -> Option<f32> {
        self.offset
    }
}
