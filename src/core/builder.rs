//! Builder for constructing trackers.

use super::observer::Observer;
use super::options::TrackerOptions;
use super::tracker::StateTracker;

/// Builder for a [`StateTracker`] with a fluent API.
///
/// Every field is optional. Without an initial snapshot the tracker starts
/// empty and is seeded by its first `push`.
pub struct TrackerBuilder<S> {
    initial: Option<S>,
    on_change: Option<Observer>,
    options: TrackerOptions,
}

impl<S> TrackerBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            on_change: None,
            options: TrackerOptions::default(),
        }
    }

    /// Set the first snapshot.
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the change observer.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_change = Some(Observer::new(callback));
        self
    }

    /// Replace the options.
    pub fn options(mut self, options: TrackerOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the tracker.
    pub fn build(self) -> StateTracker<S> {
        StateTracker::from_parts(self.initial, self.on_change, self.options)
    }
}

impl<S> Default for TrackerBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
