//! Sprint-planning domain models.
//!
//! Core data types for the story-to-team assignment problem: the immutable
//! per-run inputs (`Story`, `Team`) and the evolving candidate output
//! (`Assignment`, `Solution`, `Population`).

mod solution;
mod story;
mod team;

pub use solution::{Assignment, Population, Solution};
pub use story::{Story, StoryStatus};
pub use team::Team;
