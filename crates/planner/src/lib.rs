//! Day planner for the Meadowbrook farm stay.
//!
//! Maps a visitor's answers (vibe, group and interest checkboxes) to an
//! ordered list of recommendation records drawn from a static catalog.
//! Everything here is pure: no I/O, no shared state, no failure modes.

pub mod catalog;
mod input;
mod normalize;
mod selector;

pub use catalog::Recommendation;
pub use input::*;
pub use normalize::*;
pub use selector::*;
