//! Genetic-algorithm sprint planner.
//!
//! Assigns backlog stories to delivery teams for an upcoming planning
//! period, searching for an assignment that maximizes delivered story
//! points per unit cost while respecting team capacity and story
//! dependencies. The assignment space is combinatorial, so the search is
//! a population-based heuristic rather than an exhaustive enumeration:
//! no global optimum is guaranteed.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Story`, `Team`, `Assignment`,
//!   `Solution`, `Population`
//! - **`config`**: `RunConfig` knobs and eager validation
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown
//!   dependency references, dependency cycles)
//! - **`ga`**: The genetic engine — fitness, initialization, reproduction,
//!   selection, and the generation loop
//!
//! # Example
//!
//! ```
//! use sprint_select::config::{ReproductionType, RunConfig, SelectionStrategy};
//! use sprint_select::ga::{GaRunner, SprintProblem};
//! use sprint_select::models::{Story, Team};
//!
//! let stories = vec![
//!     Story::new("login").with_time(5.0).with_priority(8.0),
//!     Story::new("signup").with_time(3.0).with_priority(5.0),
//! ];
//! let teams = vec![
//!     Team::new("core")
//!         .with_efficiency(1.2)
//!         .with_cost(80.0)
//!         .with_available_time(20.0),
//! ];
//!
//! let config = RunConfig {
//!     population_size: 20,
//!     generations: 50,
//!     reproduction_type: ReproductionType::Tournament,
//!     reproduction_tournament_size: Some(3),
//!     mutation_probability: 0.1,
//!     selection_strategy: SelectionStrategy::Elitism,
//!     seed: Some(42),
//! };
//!
//! let problem = SprintProblem::new(stories, teams);
//! let result = GaRunner::run(&problem, &config).unwrap();
//! assert!(result.best_fitness >= 0.0);
//! ```

pub mod config;
pub mod ga;
pub mod models;
pub mod validation;
