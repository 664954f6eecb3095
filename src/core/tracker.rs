//! Linear snapshot history with a cursor.
//!
//! The tracker owns an ordered list of snapshots and the index of the one
//! currently shown. Navigation never fails: steps past either end are
//! ignored and report `false`, and arbitrary jumps are clamped.

use super::builder::TrackerBuilder;
use super::observer::Observer;
use super::options::{EndpointMode, TrackerOptions};
use tracing::{debug, trace};

/// Navigable undo/redo history of immutable snapshots.
///
/// The tracker has two meta-states. It is *empty* until the first snapshot
/// arrives (either at construction or through the first [`push`]), and
/// *populated* afterwards, with `0 <= index < len` holding from then on.
///
/// Snapshots are stored as given. Callers must hand over a fresh value for
/// every entry rather than mutating one that was already pushed.
///
/// [`push`]: StateTracker::push
///
/// # Example
///
/// ```rust
/// use rewind::core::StateTracker;
///
/// let mut tracker = StateTracker::with_initial("a");
/// tracker.push("b");
/// tracker.push("c");
/// assert_eq!(tracker.current(), Some(&"c"));
///
/// tracker.back();
/// assert_eq!(tracker.current(), Some(&"b"));
///
/// // Replace "b" with "x" and discard "c".
/// tracker.rewrite("x");
/// assert_eq!(tracker.get_history(), vec!["a", "x"]);
/// ```
#[derive(Debug)]
pub struct StateTracker<S> {
    history: Vec<S>,
    index: usize,
    on_change: Option<Observer>,
    options: TrackerOptions,
}

impl<S> Default for StateTracker<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateTracker<S> {
    /// Create an empty tracker. The first [`push`](Self::push) seeds it.
    pub fn new() -> Self {
        Self::from_parts(None, None, TrackerOptions::default())
    }

    /// Create a tracker holding a single snapshot.
    pub fn with_initial(state: S) -> Self {
        Self::from_parts(Some(state), None, TrackerOptions::default())
    }

    /// Start a builder for a tracker with an observer or custom options.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::StateTracker;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let changes = Rc::new(Cell::new(0));
    /// let seen = Rc::clone(&changes);
    ///
    /// let mut tracker = StateTracker::builder()
    ///     .initial(0)
    ///     .on_change(move || seen.set(seen.get() + 1))
    ///     .build();
    ///
    /// tracker.push(1);
    /// tracker.back();
    /// assert_eq!(changes.get(), 2);
    /// ```
    pub fn builder() -> TrackerBuilder<S> {
        TrackerBuilder::new()
    }

    pub(crate) fn from_parts(
        initial: Option<S>,
        on_change: Option<Observer>,
        options: TrackerOptions,
    ) -> Self {
        Self {
            history: initial.into_iter().collect(),
            index: 0,
            on_change,
            options,
        }
    }

    /// Install the observer, replacing any previous one.
    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.on_change = Some(Observer::new(callback));
    }

    /// Remove the observer.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Options this tracker was built with.
    pub fn options(&self) -> TrackerOptions {
        self.options
    }

    /// Append a snapshot and move the cursor onto it.
    ///
    /// On an empty tracker the snapshot becomes the sole entry, the index
    /// stays at 0 and the observer is not called.
    ///
    /// Entries after the cursor are *not* discarded. Calling `push` after
    /// navigating backwards leaves the old future in place and moves the
    /// cursor one step forward, onto whatever entry sits there. Use
    /// [`rewrite`](Self::rewrite), or [`fork`](Self::fork) followed by
    /// `push`, to branch cleanly.
    pub fn push(&mut self, state: S) {
        if self.append(state) {
            self.notify();
        }
    }

    /// Remove and return every entry after the cursor.
    ///
    /// Returns `None` when the cursor is already on the last entry. The
    /// current snapshot does not change, so the observer is not called.
    pub fn fork(&mut self) -> Option<Vec<S>> {
        if self.is_at_end() {
            return None;
        }

        let discarded = self.history.split_off(self.index + 1);
        debug!(
            index = self.index,
            discarded = discarded.len(),
            "History forked"
        );
        Some(discarded)
    }

    /// Redo: advance the cursor by one.
    pub fn next(&mut self) -> bool {
        let moved = self.advance();
        if moved {
            self.notify();
        } else {
            trace!(index = self.index, "Redo ignored at end of history");
        }
        moved
    }

    /// Undo: move the cursor back by one.
    pub fn back(&mut self) -> bool {
        let moved = self.retreat();
        if moved {
            self.notify();
        } else {
            trace!(index = self.index, "Undo ignored at start of history");
        }
        moved
    }

    /// Jump to the first entry.
    ///
    /// Under [`EndpointMode::Legacy`] this never moves the cursor.
    pub fn to_start(&mut self) -> bool {
        match self.options.endpoints {
            EndpointMode::Clamped => self.set_index(0),
            EndpointMode::Legacy => {
                trace!("to_start ignored in legacy endpoint mode");
                false
            }
        }
    }

    /// Jump to the last entry.
    ///
    /// Under [`EndpointMode::Legacy`] this never moves the cursor.
    pub fn to_end(&mut self) -> bool {
        match self.options.endpoints {
            EndpointMode::Clamped => match self.last_index() {
                Some(last) => self.set_index(last),
                None => false,
            },
            EndpointMode::Legacy => {
                trace!("to_end ignored in legacy endpoint mode");
                false
            }
        }
    }

    /// Replace the whole history with a single snapshot.
    ///
    /// Does nothing on an empty tracker and returns `false`. The observer is
    /// called only if the cursor had to move back to 0.
    pub fn clear(&mut self, state: S) -> bool {
        if self.history.is_empty() {
            return false;
        }

        self.history.clear();
        self.history.push(state);
        debug!(previous_index = self.index, "History cleared");

        if self.index != 0 {
            self.index = 0;
            self.notify();
        }
        true
    }

    /// Amend the current entry and drop the redo-future: `back`, then
    /// `fork`, then `push`.
    ///
    /// With the cursor past the first entry this overwrites the current
    /// entry in place. At index 0 there is nothing to step back to, so the
    /// future is dropped and `state` lands after the first entry. The
    /// observer is called at most once for the whole sequence.
    pub fn rewrite(&mut self, state: S) {
        let retreated = self.retreat();
        self.fork();
        let advanced = self.append(state);

        if retreated || advanced {
            self.notify();
        }
    }

    /// Copy of the full history. Mutating it does not affect the tracker.
    pub fn get_history(&self) -> Vec<S>
    where
        S: Clone,
    {
        self.history.clone()
    }

    /// Read-only view of the full history.
    pub fn snapshots(&self) -> &[S] {
        &self.history
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// `true` until the first snapshot is stored.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move the cursor anywhere, clamping to the last entry.
    ///
    /// No-op on an empty tracker, and when `value` equals the current index.
    /// Any other value is clamped and the observer is called, even when the
    /// clamped target is the entry the cursor already sits on. Returns
    /// whether the observer was called.
    pub fn set_index(&mut self, value: usize) -> bool {
        let Some(last) = self.last_index() else {
            return false;
        };

        if value == self.index {
            return false;
        }

        let target = value.min(last);
        debug!(from = self.index, to = target, requested = value, "Cursor set");
        self.index = target;
        self.notify();
        true
    }

    /// Snapshot under the cursor, `None` while empty.
    pub fn current(&self) -> Option<&S> {
        self.history.get(self.index)
    }

    /// Whether [`back`](Self::back) would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether [`next`](Self::next) would move the cursor.
    pub fn can_redo(&self) -> bool {
        !self.is_at_end()
    }

    fn append(&mut self, state: S) -> bool {
        if self.history.is_empty() {
            self.history.push(state);
            debug!("History seeded");
            return false;
        }

        self.history.push(state);
        self.index += 1;
        debug!(index = self.index, len = self.history.len(), "Snapshot pushed");
        true
    }

    fn advance(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.index += 1;
        true
    }

    fn retreat(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn last_index(&self) -> Option<usize> {
        self.history.len().checked_sub(1)
    }

    fn is_at_end(&self) -> bool {
        self.index + 1 >= self.history.len()
    }

    fn notify(&mut self) {
        if let Some(observer) = self.on_change.as_mut() {
            observer.notify();
        }
    }
}
