//! Genetic search for sprint planning.
//!
//! Evolves populations of candidate story-to-team assignments toward higher
//! fitness over a fixed number of generations.
//!
//! # Submodules
//!
//! - [`problem`]: problem definition — domain indexes, fitness evaluation,
//!   random-solution initialization
//! - [`operators`]: crossover, mutation, and invariant repair
//! - [`selection`]: tournament/roulette parent selection and
//!   elitism/steady-state replacement
//! - [`runner`]: the fixed-generation run loop
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning"

pub mod operators;
pub mod problem;
pub mod runner;
pub mod selection;

pub use operators::{crossover, mutate};
pub use problem::SprintProblem;
pub use runner::{fittest, GaResult, GaRunner};
pub use selection::{elitism_select, roulette_pick, steady_state_select, tournament_pick};
