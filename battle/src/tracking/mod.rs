//! Team state tracking from battle events

mod tracker;
mod updater;

pub use tracker::{TeamTracker, TrackerConfig};
