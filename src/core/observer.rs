//! Single-slot change observer.
//!
//! The tracker notifies at most one subscriber, synchronously, whenever the
//! readable current snapshot moves.

use std::fmt;

/// Zero-argument callback fired after the tracker's cursor changes.
///
/// # Example
///
/// ```rust
/// use rewind::core::Observer;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let fired = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&fired);
/// let mut observer = Observer::new(move || counter.set(counter.get() + 1));
///
/// observer.notify();
/// observer.notify();
/// assert_eq!(fired.get(), 2);
/// ```
pub struct Observer {
    callback: Box<dyn FnMut()>,
}

impl Observer {
    /// Wrap a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Observer {
            callback: Box::new(callback),
        }
    }

    /// Invoke the callback on the caller's stack.
    pub fn notify(&mut self) {
        (self.callback)()
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Observer(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn notify_invokes_callback_each_time() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let mut observer = Observer::new(move || counter.set(counter.get() + 1));

        observer.notify();
        observer.notify();
        observer.notify();

        assert_eq!(fired.get(), 3);
    }

    #[test]
    fn callback_may_own_mutable_state() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut calls = 0;
        let mut observer = Observer::new(move || {
            calls += 1;
            sink.borrow_mut().push(calls);
        });

        observer.notify();
        observer.notify();

        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn debug_hides_callback() {
        let observer = Observer::new(|| {});
        assert_eq!(format!("{:?}", observer), "Observer(..)");
    }
}
