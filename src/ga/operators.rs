//! Genetic operators for sprint solutions.
//!
//! Crossover splices a single index-aligned segment from one parent into a
//! copy of the other; mutation applies one of three edits (add, edit,
//! delete) to an assignment sequence. Both operate on exclusively owned
//! copies — parents are never modified.

use rand::Rng;

use super::problem::SprintProblem;
use crate::models::{Assignment, Solution};

/// Produces one offspring from two parents.
///
/// Copies parent A's sequence, overwrites the single-element slice
/// `[start, start + 1)` with parent B's element at the same index (indexes
/// are positions, not story IDs), optionally mutates, then repairs the
/// one-assignment-per-story invariant (first occurrence wins) and caches
/// fresh fitness. The cut start is drawn from `[0, max_len]` inclusive, so
/// the donated segment may fall past either parent's end and contribute
/// nothing.
///
/// `crossover(a, b, ..)` and `crossover(b, a, ..)` are not equivalent: the
/// first parent donates the base sequence, the second a single element.
pub fn crossover<R: Rng>(
    problem: &SprintProblem,
    parent_a: &Solution,
    parent_b: &Solution,
    mutation_probability: f64,
    rng: &mut R,
) -> Solution {
    let max_len = parent_a.len().max(parent_b.len());
    let start = rng.random_range(0..=max_len);

    let mut child: Vec<Assignment> = parent_a.assignments.clone();
    if let Some(donor) = parent_b.assignments.get(start) {
        if start < child.len() {
            child[start] = donor.clone();
        } else {
            child.push(donor.clone());
        }
    }

    if rng.random_bool(mutation_probability) {
        mutate(problem, &mut child, rng);
    }

    let mut offspring = Solution::from_assignments(child);
    offspring.dedup_stories();
    offspring.fitness = problem.evaluate(&offspring.assignments);
    offspring
}

/// Applies one mutation to an assignment sequence, in place.
///
/// One uniform draw selects the operation: add a random unassigned backlog
/// story with a random team (r < 1/3), edit a random assignment's team or
/// story (1/3 <= r < 2/3), or delete a random assignment (r >= 2/3). When no
/// backlog story is left to draw, add and edit degenerate to delete. On an
/// empty sequence an edit draw degenerates to add and a delete draw is a
/// no-op.
pub fn mutate<R: Rng>(problem: &SprintProblem, assignments: &mut Vec<Assignment>, rng: &mut R) {
    let available = problem.unassigned_backlog_ids(assignments);
    let can_add = !available.is_empty() && !problem.teams.is_empty();

    if !can_add {
        delete_assignment(assignments, rng);
        return;
    }

    let r: f64 = rng.random();
    if r < 1.0 / 3.0 {
        add_assignment(&available, problem, assignments, rng);
    } else if r < 2.0 / 3.0 {
        if assignments.is_empty() {
            add_assignment(&available, problem, assignments, rng);
        } else {
            edit_assignment(&available, problem, assignments, rng);
        }
    } else {
        delete_assignment(assignments, rng);
    }
}

fn add_assignment<R: Rng>(
    available: &[&str],
    problem: &SprintProblem,
    assignments: &mut Vec<Assignment>,
    rng: &mut R,
) {
    let story_id = available[rng.random_range(0..available.len())];
    let team = &problem.teams[rng.random_range(0..problem.teams.len())];
    assignments.push(Assignment::new(&team.id, story_id));
}

fn edit_assignment<R: Rng>(
    available: &[&str],
    problem: &SprintProblem,
    assignments: &mut [Assignment],
    rng: &mut R,
) {
    let idx = rng.random_range(0..assignments.len());
    if rng.random_bool(0.5) {
        let team = &problem.teams[rng.random_range(0..problem.teams.len())];
        assignments[idx].team_id = team.id.clone();
    } else {
        let story_id = available[rng.random_range(0..available.len())];
        assignments[idx].story_id = story_id.to_string();
    }
}

fn delete_assignment<R: Rng>(assignments: &mut Vec<Assignment>, rng: &mut R) {
    if assignments.is_empty() {
        return;
    }
    let idx = rng.random_range(0..assignments.len());
    assignments.remove(idx);
}
