//! Run configuration.
//!
//! All knobs for one optimization run, loaded once and immutable afterwards.
//! Strategy fields are closed enums: an unknown `reproduction_type` or
//! `selection_strategy` fails at deserialization instead of silently doing
//! nothing. Cross-field requirements (tournament size present iff the
//! tournament strategy is selected) are checked eagerly by
//! [`RunConfig::validate`] before the run loop starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How offspring are produced each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReproductionType {
    /// Parents win repeated fitter-takes-all contests before crossover.
    Tournament,
    /// Parents drawn with probability proportional to fitness.
    Roulette,
    /// No crossover; each parent is copied and optionally mutated.
    None,
}

/// How the next generation is assembled from parents and offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionStrategy {
    /// Keep the best tenth of the current population, fill from offspring.
    #[serde(rename = "elitism")]
    Elitism,
    /// Keep the best tenth of the offspring, fill from the current population.
    #[serde(rename = "steadyState")]
    SteadyState,
}

/// Configuration for one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Number of solutions per generation (> 0).
    pub population_size: usize,
    /// Number of reproduce-then-select cycles (> 0). No early termination.
    #[serde(default = "default_generations")]
    pub generations: usize,
    /// Offspring production strategy.
    pub reproduction_type: ReproductionType,
    /// Contest count per parent slot. Required iff `reproduction_type`
    /// is `tournament`, and must be >= 1.
    #[serde(default)]
    pub reproduction_tournament_size: Option<usize>,
    /// Probability that a fresh offspring receives one mutation ([0, 1]).
    pub mutation_probability: f64,
    /// Replacement strategy.
    pub selection_strategy: SelectionStrategy,
    /// RNG seed for reproducible runs. `None` = seed from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_generations() -> usize {
    100
}

/// A fatal configuration error, surfaced before the run loop starts.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("population_size must be greater than zero")]
    ZeroPopulation,
    #[error("generations must be greater than zero")]
    ZeroGenerations,
    #[error("mutation_probability must be within [0, 1], got {0}")]
    InvalidMutationProbability(f64),
    #[error("reproduction_tournament_size is required for tournament reproduction")]
    MissingTournamentSize,
    #[error("reproduction_tournament_size must be at least 1, got {0}")]
    InvalidTournamentSize(usize),
}

impl RunConfig {
    /// Checks all cross-field requirements.
    ///
    /// Returns the first violation found; a config that passes here cannot
    /// fail later for configuration reasons.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_probability)
            || self.mutation_probability.is_nan()
        {
            return Err(ConfigError::InvalidMutationProbability(
                self.mutation_probability,
            ));
        }
        if self.reproduction_type == ReproductionType::Tournament {
            match self.reproduction_tournament_size {
                None => return Err(ConfigError::MissingTournamentSize),
                Some(0) => return Err(ConfigError::InvalidTournamentSize(0)),
                Some(_) => {}
            }
        }
        Ok(())
    }
}
