//! Snapshot history tracking.
//!
//! This module contains the history tracker and its supporting pieces:
//! - The `StateTracker` cursor-based history
//! - A single-slot `Observer` for change notification
//! - `TrackerOptions` configuration
//!
//! The tracker never inspects snapshots. Every boundary condition is a
//! silent no-op, so callers can forward raw user input without checking.

mod builder;
mod error;
mod observer;
mod options;
mod tracker;

pub use builder::TrackerBuilder;
pub use error::ConfigError;
pub use observer::Observer;
pub use options::{EndpointMode, TrackerOptions};
pub use tracker::StateTracker;
