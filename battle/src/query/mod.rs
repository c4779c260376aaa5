//! Query helpers over a turn's events
//!
//! These read raw turns directly and never touch tracked state, so they can
//! run on any slice of the transcript.

mod intent;

pub use intent::{CommittedAction, current_active, parse_committed_action};
