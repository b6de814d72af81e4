//! Generation loop.
//!
//! Orchestrates one full run: validate config, seed the RNG once, build the
//! initial population, then run a fixed number of reproduce-then-select
//! cycles. There is no convergence check — the loop always runs every
//! configured generation, and the fittest solution of the final population
//! is the result.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::operators::{crossover, mutate};
use super::problem::SprintProblem;
use super::selection::{elitism_select, roulette_pick, steady_state_select, tournament_pick};
use crate::config::{ConfigError, ReproductionType, RunConfig, SelectionStrategy};
use crate::models::{Population, Solution};

/// Outcome of a full run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Fittest solution of the final population.
    pub best: Solution,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Number of generations executed.
    pub generations: usize,
}

/// Runs the genetic search to completion.
pub struct GaRunner;

impl GaRunner {
    /// Executes one full run of `config.generations` cycles.
    ///
    /// Fails fast on an invalid configuration; nothing is evaluated before
    /// the config passes validation. The run is deterministic when
    /// `config.seed` is set.
    pub fn run(problem: &SprintProblem, config: &RunConfig) -> Result<GaResult, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut population = problem.generate_population(config.population_size, &mut rng);
        info!(
            population_size = config.population_size,
            generations = config.generations,
            "starting run"
        );

        for generation in 0..config.generations {
            population = Self::step(problem, &population, config, &mut rng);

            debug!(
                generation,
                best = fittest(&population).map(|s| s.fitness).unwrap_or(0.0),
                "generation complete"
            );
        }

        let best = fittest(&population).cloned().unwrap_or_default();
        let best_fitness = best.fitness;
        info!(best_fitness, "run complete");

        Ok(GaResult {
            best,
            best_fitness,
            generations: config.generations,
        })
    }

    /// Runs one reproduce-then-select cycle, yielding the next generation.
    ///
    /// The input population is read, never modified; the returned population
    /// has the same size.
    pub fn step<R: Rng>(
        problem: &SprintProblem,
        population: &Population,
        config: &RunConfig,
        rng: &mut R,
    ) -> Population {
        let offspring = reproduce(problem, population, config, rng);
        match config.selection_strategy {
            SelectionStrategy::Elitism => elitism_select(population, &offspring),
            SelectionStrategy::SteadyState => steady_state_select(population, &offspring),
        }
    }
}

/// The fittest solution of a population, if any.
pub fn fittest(population: &Population) -> Option<&Solution> {
    population.iter().max_by(|a, b| a.fitness.total_cmp(&b.fitness))
}

/// Produces one offspring list of population size using the configured
/// reproduction strategy.
fn reproduce<R: Rng>(
    problem: &SprintProblem,
    population: &Population,
    config: &RunConfig,
    rng: &mut R,
) -> Vec<Solution> {
    match config.reproduction_type {
        ReproductionType::Tournament => {
            let size = config.reproduction_tournament_size.unwrap_or(1);
            (0..population.len())
                .map(|_| {
                    let parent_a = tournament_pick(population, size, rng);
                    let parent_b = tournament_pick(population, size, rng);
                    crossover(problem, parent_a, parent_b, config.mutation_probability, rng)
                })
                .collect()
        }
        ReproductionType::Roulette => (0..population.len())
            .map(|_| {
                let parent_a = roulette_pick(population, rng);
                let parent_b = roulette_pick(population, rng);
                crossover(problem, parent_a, parent_b, config.mutation_probability, rng)
            })
            .collect(),
        ReproductionType::None => population
            .iter()
            .map(|parent| {
                let mut assignments = parent.assignments.clone();
                if rng.random_bool(config.mutation_probability) {
                    mutate(problem, &mut assignments, rng);
                    let fitness = problem.evaluate(&assignments);
                    Solution {
                        assignments,
                        fitness,
                    }
                } else {
                    // Unchanged sequence keeps its cached fitness.
                    Solution {
                        assignments,
                        fitness: parent.fitness,
                    }
                }
            })
            .collect(),
    }
}
