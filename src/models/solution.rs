//! Solution (candidate sprint plan) model.
//!
//! A solution is an ordered sequence of story-to-team assignments plus its
//! cached fitness. Solutions have value semantics: genetic operators always
//! work on an exclusively owned copy, never on a shared sequence.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One story bound to one team for the planning period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned team ID.
    pub team_id: String,
    /// Assigned story ID.
    pub story_id: String,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(team_id: impl Into<String>, story_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            story_id: story_id.into(),
        }
    }
}

/// A candidate sprint plan: assignments plus cached fitness.
///
/// Invariant: each story ID appears in at most one assignment. The invariant
/// is restored by [`Solution::dedup_stories`] after crossover rather than
/// assumed to hold throughout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Solution {
    /// Story-to-team assignments, in construction order.
    pub assignments: Vec<Assignment>,
    /// Cached fitness. Recomputed whenever the sequence changes.
    pub fitness: f64,
}

/// One generation's worth of candidate solutions.
///
/// Replaced wholesale each generation, never mutated in place.
pub type Population = Vec<Solution>;

impl Solution {
    /// Creates an empty solution with zero fitness.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solution from an assignment sequence, fitness unset.
    pub fn from_assignments(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            fitness: 0.0,
        }
    }

    /// Whether the solution assigns no stories.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of assignments.
    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the given story is assigned in this solution.
    pub fn contains_story(&self, story_id: &str) -> bool {
        self.assignments.iter().any(|a| a.story_id == story_id)
    }

    /// The team a story is assigned to, if any.
    pub fn team_for_story(&self, story_id: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.story_id == story_id)
            .map(|a| a.team_id.as_str())
    }

    /// Drops repeated assignments for the same story, first occurrence wins.
    ///
    /// Restores the one-assignment-per-story invariant after index-aligned
    /// crossover, which can import a story the base parent already carries.
    pub fn dedup_stories(&mut self) {
        let mut seen: HashSet<String> = HashSet::with_capacity(self.assignments.len());
        self.assignments.retain(|a| seen.insert(a.story_id.clone()));
    }
}
