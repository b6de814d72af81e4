//! Input validation for planning runs.
//!
//! Checks structural integrity of the backlog and team inputs before the
//! genetic search starts. Detects:
//! - Duplicate IDs
//! - Dependency references to unknown stories
//! - Circular story dependencies
//! - Non-finite or out-of-range numeric fields

use crate::models::{Story, Team};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A story depends on a story that doesn't exist.
    UnknownDependency,
    /// Dependency graph contains a cycle.
    CyclicDependency,
    /// A numeric field is negative, NaN, or otherwise out of range.
    InvalidNumber,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the backlog and team inputs for a planning run.
///
/// Checks:
/// 1. No duplicate story IDs
/// 2. No duplicate team IDs
/// 3. All dependency references point to existing stories
/// 4. No circular dependencies
/// 5. Story `time` and `priority` are finite, `time >= 0`
/// 6. Team `efficiency > 0`, `cost >= 0`, `available_time >= 0`, all finite
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(stories: &[Story], teams: &[Team]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut story_ids = HashSet::new();
    for story in stories {
        if !story_ids.insert(story.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate story ID: {}", story.id),
            ));
        }
        if !story.time.is_finite() || story.time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidNumber,
                format!("Story '{}' has invalid time {}", story.id, story.time),
            ));
        }
        if !story.priority.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidNumber,
                format!("Story '{}' has non-finite priority", story.id),
            ));
        }
    }

    let mut team_ids = HashSet::new();
    for team in teams {
        if !team_ids.insert(team.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team ID: {}", team.id),
            ));
        }
        if !team.efficiency.is_finite() || team.efficiency <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidNumber,
                format!(
                    "Team '{}' has invalid efficiency {}",
                    team.id, team.efficiency
                ),
            ));
        }
        if !team.cost.is_finite() || team.cost < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidNumber,
                format!("Team '{}' has invalid cost {}", team.id, team.cost),
            ));
        }
        if !team.available_time.is_finite() || team.available_time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidNumber,
                format!(
                    "Team '{}' has invalid available_time {}",
                    team.id, team.available_time
                ),
            ));
        }
    }

    // Check dependency references
    for story in stories {
        for dep in &story.dependencies {
            if !story_ids.contains(dep.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDependency,
                    format!("Story '{}' depends on unknown story '{}'", story.id, dep),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(stories) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the story dependency graph using DFS.
///
/// A back-edge (visiting a node currently in the recursion stack) means
/// a cycle exists.
fn detect_cycles(stories: &[Story]) -> Option<ValidationError> {
    // Adjacency list: story_id → dependents
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut all_ids: Vec<&str> = Vec::new();

    for story in stories {
        all_ids.push(&story.id);
        for dep in &story.dependencies {
            adj.entry(dep.as_str()).or_default().push(story.id.as_str());
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &node in &all_ids {
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving story '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_teams() -> Vec<Team> {
        vec![
            Team::new("alpha")
                .with_efficiency(1.0)
                .with_cost(50.0)
                .with_available_time(40.0),
            Team::new("beta")
                .with_efficiency(1.5)
                .with_cost(80.0)
                .with_available_time(30.0),
        ]
    }

    fn sample_stories() -> Vec<Story> {
        vec![
            Story::new("S1").with_time(5.0).with_priority(3.0),
            Story::new("S2")
                .with_time(8.0)
                .with_priority(5.0)
                .with_dependency("S1"),
            Story::new("S3").with_time(2.0).with_priority(1.0),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_stories(), &sample_teams()).is_ok());
    }

    #[test]
    fn test_duplicate_story_id() {
        let stories = vec![
            Story::new("S1").with_time(1.0),
            Story::new("S1").with_time(2.0),
        ];
        let errors = validate_input(&stories, &sample_teams()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("story")));
    }

    #[test]
    fn test_duplicate_team_id() {
        let teams = vec![
            Team::new("alpha").with_available_time(10.0),
            Team::new("alpha").with_available_time(20.0),
        ];
        let errors = validate_input(&sample_stories(), &teams).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("team")));
    }

    #[test]
    fn test_unknown_dependency() {
        let stories = vec![Story::new("S1").with_time(1.0).with_dependency("GHOST")];
        let errors = validate_input(&stories, &sample_teams()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownDependency));
    }

    #[test]
    fn test_cyclic_dependency() {
        // S1 → S2 → S3 → S1
        let stories = vec![
            Story::new("S1").with_time(1.0).with_dependency("S3"),
            Story::new("S2").with_time(1.0).with_dependency("S1"),
            Story::new("S3").with_time(1.0).with_dependency("S2"),
        ];
        let errors = validate_input(&stories, &sample_teams()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicDependency));
    }

    #[test]
    fn test_no_cycle_in_chain() {
        // S1 → S2 → S3 (linear chain)
        let stories = vec![
            Story::new("S1").with_time(1.0),
            Story::new("S2").with_time(1.0).with_dependency("S1"),
            Story::new("S3").with_time(1.0).with_dependency("S2"),
        ];
        assert!(validate_input(&stories, &sample_teams()).is_ok());
    }

    #[test]
    fn test_negative_story_time() {
        let stories = vec![Story::new("S1").with_time(-3.0)];
        let errors = validate_input(&stories, &sample_teams()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidNumber));
    }

    #[test]
    fn test_zero_efficiency_team() {
        let teams = vec![Team::new("slow").with_efficiency(0.0)];
        let errors = validate_input(&sample_stories(), &teams).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidNumber
                && e.message.contains("efficiency")));
    }

    #[test]
    fn test_multiple_errors() {
        let stories = vec![
            Story::new("S1").with_time(-1.0),
            Story::new("S1").with_time(1.0).with_dependency("GHOST"),
        ];
        let errors = validate_input(&stories, &[]).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
