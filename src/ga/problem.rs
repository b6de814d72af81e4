//! Sprint-planning GA problem definition.
//!
//! Bridges the domain models (`Story`, `Team`) to the genetic search:
//! owns the per-run input data, evaluates candidate solutions, and
//! produces the random solutions that seed the initial population.

use std::collections::HashMap;

use rand::Rng;

use crate::models::{Assignment, Population, Solution, Story, StoryStatus, Team};

/// GA problem definition for one planning run.
///
/// Holds the backlog and team inputs, indexed by ID, for the lifetime of
/// the run. All genetic operators read domain data through this struct.
pub struct SprintProblem {
    /// All input stories, in input order.
    pub stories: Vec<Story>,
    /// All input teams, in input order.
    pub teams: Vec<Team>,
    /// story_id → index into `stories`.
    story_index: HashMap<String, usize>,
    /// team_id → index into `teams`.
    team_index: HashMap<String, usize>,
}

impl SprintProblem {
    /// Creates a problem from domain inputs.
    pub fn new(stories: Vec<Story>, teams: Vec<Team>) -> Self {
        let story_index = stories
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        let team_index = teams
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
        Self {
            stories,
            teams,
            story_index,
            team_index,
        }
    }

    /// Looks up a story by ID.
    pub fn story(&self, id: &str) -> Option<&Story> {
        self.story_index.get(id).map(|&i| &self.stories[i])
    }

    /// Looks up a team by ID.
    pub fn team(&self, id: &str) -> Option<&Team> {
        self.team_index.get(id).map(|&i| &self.teams[i])
    }

    /// IDs of backlog-status stories not yet assigned in `assignments`.
    ///
    /// Input order is preserved so random draws stay reproducible under a
    /// fixed seed.
    pub fn unassigned_backlog_ids(&self, assignments: &[Assignment]) -> Vec<&str> {
        self.stories
            .iter()
            .filter(|s| s.is_backlog())
            .filter(|s| !assignments.iter().any(|a| a.story_id == s.id))
            .map(|s| s.id.as_str())
            .collect()
    }

    /// Computes the fitness of an assignment sequence.
    ///
    /// Deterministic: no randomness enters the evaluation. The empty
    /// sequence scores exactly 0, as does any sequence whose assigned
    /// stories sum to zero effort.
    ///
    /// `fitness = total_story_points / (1 + mean_cost * 4 * invalid_dependencies * excess_hours)`
    ///
    /// where `mean_cost` is the effort-weighted cost per story point,
    /// `invalid_dependencies` counts dependencies that cannot be satisfied
    /// this sprint, and `excess_hours` sums per-team capacity overruns.
    /// The penalty factors multiply, so a zero in either count collapses
    /// the whole penalty term.
    pub fn evaluate(&self, assignments: &[Assignment]) -> f64 {
        if assignments.is_empty() {
            return 0.0;
        }

        // story_id → assigned team, for dependency co-assignment checks
        let assigned_team: HashMap<&str, &str> = assignments
            .iter()
            .map(|a| (a.story_id.as_str(), a.team_id.as_str()))
            .collect();

        let mut total_story_points = 0.0;
        let mut weighted_cost = 0.0;
        let mut team_load: HashMap<&str, f64> = HashMap::new();
        let mut invalid_dependencies: u64 = 0;

        for a in assignments {
            let (story, team) = match (self.story(&a.story_id), self.team(&a.team_id)) {
                (Some(s), Some(t)) => (s, t),
                _ => continue,
            };

            total_story_points += story.time;
            weighted_cost += story.time * team.efficiency * team.cost;
            *team_load.entry(team.id.as_str()).or_insert(0.0) += story.time * team.efficiency;

            for dep_id in &story.dependencies {
                let Some(dep) = self.story(dep_id) else {
                    continue;
                };
                match dep.status {
                    // An in-flight dependency can never finish this sprint.
                    StoryStatus::Working => invalid_dependencies += 1,
                    // A backlog dependency must ride along with the same team.
                    StoryStatus::Backlog => {
                        if assigned_team.get(dep_id.as_str()) != Some(&a.team_id.as_str()) {
                            invalid_dependencies += 1;
                        }
                    }
                    StoryStatus::Done => {}
                }
            }
        }

        if total_story_points <= 0.0 {
            return 0.0;
        }

        let mean_cost = weighted_cost / total_story_points;
        let excess_hours: f64 = self
            .teams
            .iter()
            .map(|t| {
                let load = team_load.get(t.id.as_str()).copied().unwrap_or(0.0);
                (load - t.available_time).max(0.0)
            })
            .sum();

        total_story_points
            / (1.0 + mean_cost * 4.0 * invalid_dependencies as f64 * excess_hours)
    }

    /// Builds one solution by greedy-random placement.
    ///
    /// Repeatedly draws a random unassigned backlog story and a random team.
    /// A team whose remaining capacity cannot fit the drawn story is retired
    /// from further draws; otherwise the pair is committed and the story
    /// leaves the pool. Stops when either pool runs dry. An empty domain
    /// yields a valid empty solution.
    pub fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        let mut available_stories: Vec<&Story> =
            self.stories.iter().filter(|s| s.is_backlog()).collect();
        let mut available_teams: Vec<&Team> = self.teams.iter().collect();
        let mut remaining_time: HashMap<&str, f64> = self
            .teams
            .iter()
            .map(|t| (t.id.as_str(), t.available_time))
            .collect();

        let mut assignments = Vec::new();

        while !available_stories.is_empty() && !available_teams.is_empty() {
            let story_idx = rng.random_range(0..available_stories.len());
            let team_idx = rng.random_range(0..available_teams.len());
            let story = available_stories[story_idx];
            let team = available_teams[team_idx];

            let remaining = remaining_time
                .get(team.id.as_str())
                .copied()
                .unwrap_or(0.0);
            if remaining < story.time {
                available_teams.swap_remove(team_idx);
            } else {
                assignments.push(Assignment::new(&team.id, &story.id));
                *remaining_time.entry(team.id.as_str()).or_insert(0.0) -= story.time;
                available_stories.swap_remove(story_idx);
            }
        }

        let fitness = self.evaluate(&assignments);
        Solution {
            assignments,
            fitness,
        }
    }

    /// Generates the initial population: `size` independent random solutions,
    /// each with its fitness already computed.
    pub fn generate_population<R: Rng>(&self, size: usize, rng: &mut R) -> Population {
        (0..size).map(|_| self.random_solution(rng)).collect()
    }
}
