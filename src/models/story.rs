//! Story (backlog item) model.
//!
//! A story is a unit of backlog work with an effort estimate, a business
//! priority, a lifecycle status, and dependencies on other stories.

use serde::{Deserialize, Serialize};

/// A backlog story that may be planned into the next sprint.
///
/// Stories are read-only for the lifetime of a run; the planner never
/// changes their status or dependencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Unique story identifier.
    pub id: String,
    /// Effort required, in story points.
    pub time: f64,
    /// Business priority (higher = more important).
    pub priority: f64,
    /// Lifecycle status. Only `Backlog` stories are assignable.
    pub status: StoryStatus,
    /// IDs of stories this story depends on. Empty = no dependencies.
    pub dependencies: Vec<String>,
}

/// Story lifecycle status.
///
/// Determines dependency semantics during fitness evaluation: a `Working`
/// dependency can never be satisfied within the sprint, a `Backlog`
/// dependency must be co-assigned to the same team, and a `Done`
/// dependency is already satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    /// Not yet started; eligible for assignment.
    Backlog,
    /// In progress from a previous sprint.
    Working,
    /// Completed.
    Done,
}

impl StoryStatus {
    /// Parses a status from its flat-file representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "backlog" => Some(Self::Backlog),
            "working" => Some(Self::Working),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl Story {
    /// Creates a new backlog story with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time: 0.0,
            priority: 0.0,
            status: StoryStatus::Backlog,
            dependencies: Vec::new(),
        }
    }

    /// Sets the effort estimate in story points.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Sets the business priority.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: StoryStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds a dependency on another story.
    pub fn with_dependency(mut self, story_id: impl Into<String>) -> Self {
        self.dependencies.push(story_id.into());
        self
    }

    /// Whether this story is eligible for sprint assignment.
    #[inline]
    pub fn is_backlog(&self) -> bool {
        self.status == StoryStatus::Backlog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_builder() {
        let story = Story::new("S1")
            .with_time(5.0)
            .with_priority(8.0)
            .with_dependency("S2")
            .with_dependency("S3");

        assert_eq!(story.id, "S1");
        assert_eq!(story.time, 5.0);
        assert_eq!(story.priority, 8.0);
        assert_eq!(story.status, StoryStatus::Backlog);
        assert_eq!(story.dependencies, vec!["S2", "S3"]);
        assert!(story.is_backlog());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(StoryStatus::parse("backlog"), Some(StoryStatus::Backlog));
        assert_eq!(StoryStatus::parse("working"), Some(StoryStatus::Working));
        assert_eq!(StoryStatus::parse("done"), Some(StoryStatus::Done));
        assert_eq!(StoryStatus::parse("cancelled"), None);
    }

    #[test]
    fn test_non_backlog_not_assignable() {
        let story = Story::new("S1").with_status(StoryStatus::Working);
        assert!(!story.is_backlog());
    }

    #[test]
    fn test_status_serde_roundtrip() {
        let json = serde_json::to_string(&StoryStatus::Working).unwrap();
        assert_eq!(json, "\"working\"");
        let status: StoryStatus = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(status, StoryStatus::Done);
    }
}
