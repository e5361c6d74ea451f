//! Clip schedule planning module
//!
//! Turns a media duration into an ordered list of clip intervals separated by
//! randomized gaps.

pub mod random;
pub mod schedule;

pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use schedule::ClipPlanner;
