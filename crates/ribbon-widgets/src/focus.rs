//! Programmatic focus for action bars whose items may have moved into an
//! overflow menu.
//!
//! A [`FocusController`] is created once by the owning widget and can be
//! cloned and handed to the host. `focus(id)` resolves the id against the
//! most recently computed partition: inline elements receive focus
//! directly, overflowed ones (including members of an overflowed group)
//! send focus to the overflow trigger. Unknown ids are ignored.

use crate::item::ItemOrGroup;
use crate::overflow::{self, Placement};
use crate::roving::RovingFocus;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The control that currently holds focus inside an action bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// An inline control, by leaf index in render order.
    Inline(usize),
    /// The overflow menu trigger.
    Trigger,
}

#[derive(Debug, Default)]
struct FocusState {
    items: Arc<[ItemOrGroup]>,
    limit: i64,
    inline_len: usize,
    stops: RovingFocus,
    transfers: u64,
}

impl FocusState {
    fn target(&self) -> Option<FocusTarget> {
        self.stops.active().map(|index| {
            if index < self.inline_len {
                FocusTarget::Inline(index)
            } else {
                FocusTarget::Trigger
            }
        })
    }

    fn set_target(&mut self, target: FocusTarget) {
        let index = match target {
            FocusTarget::Inline(leaf) => leaf,
            FocusTarget::Trigger => self.inline_len,
        };
        self.stops.focus(index);
        self.transfers += 1;
    }
}

/// Shared handle for moving focus inside an action bar.
///
/// Cloning is cheap; all clones address the same widget.
#[derive(Debug, Clone, Default)]
pub struct FocusController {
    state: Arc<Mutex<FocusState>>,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to the control that represents `id`.
    ///
    /// Does nothing when `id` is unknown. Never opens the overflow menu.
    pub fn focus(&self, id: &str) {
        let mut state = self.lock();
        let placement = overflow::resolve(&state.items, state.limit).locate(id);
        match placement {
            Some(Placement::Inline { leaf }) => {
                tracing::debug!(id, leaf, "focusing inline control");
                state.set_target(FocusTarget::Inline(leaf));
            }
            Some(Placement::Overflow) => {
                tracing::debug!(id, "item is in overflow, focusing trigger");
                state.set_target(FocusTarget::Trigger);
            }
            None => tracing::trace!(id, "no focusable control for id, ignored"),
        }
    }

    /// The control that holds focus, if any.
    pub fn target(&self) -> Option<FocusTarget> {
        self.lock().target()
    }

    /// Number of focus transfers performed so far.
    pub fn transfers(&self) -> u64 {
        self.lock().transfers
    }

    /// Record a new partition input. Focus is clamped to the new row.
    pub(crate) fn sync(&self, items: Arc<[ItemOrGroup]>, limit: i64) {
        let mut state = self.lock();
        let partition = overflow::resolve(&items, limit);
        let inline_len = partition.visible_item_count();
        let stops = inline_len + usize::from(partition.has_overflow());
        state.inline_len = inline_len;
        state.stops.set_len(stops);
        state.limit = limit;
        state.items = items;
    }

    pub(crate) fn focus_target(&self, target: FocusTarget) {
        self.lock().set_target(target);
    }

    pub(crate) fn focus_next(&self) {
        let mut state = self.lock();
        state.stops.focus_next();
        state.transfers += 1;
    }

    pub(crate) fn focus_prev(&self) {
        let mut state = self.lock();
        state.stops.focus_prev();
        state.transfers += 1;
    }

    pub(crate) fn focus_first(&self) {
        let mut state = self.lock();
        state.stops.focus_first();
        state.transfers += 1;
    }

    pub(crate) fn focus_last(&self) {
        let mut state = self.lock();
        state.stops.focus_last();
        state.transfers += 1;
    }

    pub(crate) fn blur(&self) {
        self.lock().stops.blur();
    }

    /// Tab index of a control in the row (see [`RovingFocus::tab_index`]).
    pub(crate) fn tab_index(&self, target: FocusTarget) -> i32 {
        let state = self.lock();
        let index = match target {
            FocusTarget::Inline(leaf) => leaf,
            FocusTarget::Trigger => state.inline_len,
        };
        state.stops.tab_index(index)
    }

    fn lock(&self) -> MutexGuard<'_, FocusState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
