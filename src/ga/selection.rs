//! Parent selection and generational replacement.
//!
//! Parent selection (tournament, roulette) picks individuals to breed from;
//! replacement (elitism, steady-state) merges the parent population and the
//! offspring list into the next generation. Both replacement strategies
//! return exactly as many solutions as the incoming population holds.

use rand::Rng;

use crate::models::{Population, Solution};

/// Picks one parent by tournament.
///
/// Starts from a random draw and runs `size - 1` challenges, keeping the
/// fitter of the incumbent and each new random contender.
pub fn tournament_pick<'a, R: Rng>(
    population: &'a [Solution],
    size: usize,
    rng: &mut R,
) -> &'a Solution {
    let mut best = &population[rng.random_range(0..population.len())];
    for _ in 1..size.max(1) {
        let contender = &population[rng.random_range(0..population.len())];
        if contender.fitness > best.fitness {
            best = contender;
        }
    }
    best
}

/// Picks one parent by roulette (fitness-proportional) selection.
///
/// Draws a threshold in `[0, total_fitness)` and walks the population
/// accumulating fitness until the threshold is first exceeded. A population
/// with zero total fitness degenerates to a uniform draw.
pub fn roulette_pick<'a, R: Rng>(population: &'a [Solution], rng: &mut R) -> &'a Solution {
    let total: f64 = population.iter().map(|s| s.fitness).sum();
    if total <= 0.0 {
        return &population[rng.random_range(0..population.len())];
    }

    let threshold = rng.random_range(0.0..total);
    let mut accumulated = 0.0;
    for solution in population {
        accumulated += solution.fitness;
        if accumulated > threshold {
            return solution;
        }
    }
    // Floating-point slack on the final accumulation.
    &population[population.len() - 1]
}

/// Elitism replacement.
///
/// Keeps the top tenth of the *current* population, then fills the rest
/// from the offspring sorted ascending by fitness with the weakest tenth
/// skipped. The construction stays size-exact even when the tenth
/// truncates to zero.
pub fn elitism_select(population: &[Solution], offspring: &[Solution]) -> Population {
    merge_tenth(population, offspring)
}

/// Steady-state replacement.
///
/// The mirror of elitism: keeps the top tenth of the *offspring*, filling
/// the rest from the current population with its weakest tenth skipped.
pub fn steady_state_select(population: &[Solution], offspring: &[Solution]) -> Population {
    merge_tenth(offspring, population)
}

/// Keeps the best `|keep_from| / 10` of `keep_from`, fills the remainder
/// from `fill_from` minus its weakest `|keep_from| / 10`.
fn merge_tenth(keep_from: &[Solution], fill_from: &[Solution]) -> Population {
    let elite_count = keep_from.len() / 10;

    let mut elite: Vec<Solution> = keep_from.to_vec();
    elite.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    elite.truncate(elite_count);

    let mut rest: Vec<Solution> = fill_from.to_vec();
    rest.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));

    elite.extend(rest.into_iter().skip(elite_count));
    elite
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn solution_with_fitness(fitness: f64) -> Solution {
        Solution {
            assignments: Vec::new(),
            fitness,
        }
    }

    fn population(fitnesses: &[f64]) -> Vec<Solution> {
        fitnesses.iter().map(|&f| solution_with_fitness(f)).collect()
    }

    #[test]
    fn test_tournament_prefers_fitter() {
        let pop = population(&[1.0, 2.0, 3.0, 4.0, 100.0]);
        let mut rng = SmallRng::seed_from_u64(42);

        // With a large tournament the best individual wins almost always.
        let mut wins = 0;
        for _ in 0..100 {
            if tournament_pick(&pop, 10, &mut rng).fitness == 100.0 {
                wins += 1;
            }
        }
        assert!(wins > 80, "best won only {wins}/100 tournaments");
    }

    #[test]
    fn test_tournament_size_one_is_uniform_draw() {
        let pop = population(&[1.0, 50.0]);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut low_picked = false;
        for _ in 0..100 {
            if tournament_pick(&pop, 1, &mut rng).fitness == 1.0 {
                low_picked = true;
                break;
            }
        }
        assert!(low_picked, "size-1 tournament must not filter");
    }

    #[test]
    fn test_roulette_proportional() {
        let pop = population(&[1.0, 1.0, 98.0]);
        let mut rng = SmallRng::seed_from_u64(42);

        let mut heavy = 0;
        for _ in 0..1000 {
            if roulette_pick(&pop, &mut rng).fitness == 98.0 {
                heavy += 1;
            }
        }
        // Expected ~980; anything above 900 confirms proportionality.
        assert!(heavy > 900, "heavy individual drawn {heavy}/1000 times");
    }

    #[test]
    fn test_roulette_zero_total_fitness() {
        let pop = population(&[0.0, 0.0, 0.0]);
        let mut rng = SmallRng::seed_from_u64(42);
        // Must not panic or loop; uniform fallback.
        for _ in 0..10 {
            let picked = roulette_pick(&pop, &mut rng);
            assert_eq!(picked.fitness, 0.0);
        }
    }

    #[test]
    fn test_elitism_preserves_size() {
        for n in [10, 20, 35, 100] {
            let pop = population(&(0..n).map(|i| i as f64).collect::<Vec<_>>());
            let off = population(&(0..n).map(|i| (i as f64) * 0.5).collect::<Vec<_>>());
            assert_eq!(elitism_select(&pop, &off).len(), n);
        }
    }

    #[test]
    fn test_steady_state_preserves_size() {
        for n in [10, 20, 35, 100] {
            let pop = population(&(0..n).map(|i| i as f64).collect::<Vec<_>>());
            let off = population(&(0..n).map(|i| (i as f64) * 0.5).collect::<Vec<_>>());
            assert_eq!(steady_state_select(&pop, &off).len(), n);
        }
    }

    #[test]
    fn test_small_population_truncates_elite_to_zero() {
        // |population| / 10 == 0: everything comes from the fill side.
        let pop = population(&[5.0, 6.0, 7.0]);
        let off = population(&[1.0, 2.0, 3.0]);

        let next = elitism_select(&pop, &off);
        assert_eq!(next.len(), 3);
        assert!(next.iter().all(|s| s.fitness <= 3.0));
    }

    #[test]
    fn test_elitism_keeps_best_parents() {
        let pop = population(&(0..20).map(|i| i as f64).collect::<Vec<_>>());
        let off = population(&[0.5; 20]);

        let next = elitism_select(&pop, &off);
        assert_eq!(next.len(), 20);
        // Top 2 parents (fitness 19 and 18) survive.
        assert!(next.iter().any(|s| s.fitness == 19.0));
        assert!(next.iter().any(|s| s.fitness == 18.0));
        // 18 offspring at 0.5 fill the rest.
        assert_eq!(next.iter().filter(|s| s.fitness == 0.5).count(), 18);
    }

    #[test]
    fn test_elitism_drops_weakest_offspring() {
        let pop = population(&[10.0; 20]);
        let off = population(&(0..20).map(|i| i as f64).collect::<Vec<_>>());

        let next = elitism_select(&pop, &off);
        // Offspring 0.0 and 1.0 are the skipped weakest tenth.
        assert!(!next.iter().any(|s| s.fitness == 0.0));
        assert!(!next.iter().any(|s| s.fitness == 1.0));
    }

    #[test]
    fn test_steady_state_keeps_best_offspring() {
        let pop = population(&[0.5; 20]);
        let off = population(&(0..20).map(|i| i as f64).collect::<Vec<_>>());

        let next = steady_state_select(&pop, &off);
        assert_eq!(next.len(), 20);
        assert!(next.iter().any(|s| s.fitness == 19.0));
        assert!(next.iter().any(|s| s.fitness == 18.0));
        assert_eq!(next.iter().filter(|s| s.fitness == 0.5).count(), 18);
    }

    #[test]
    fn test_replacement_clones_solutions() {
        let mut pop = population(&[1.0; 10]);
        pop[0].assignments.push(Assignment::new("alpha", "S1"));
        let off = population(&[2.0; 10]);

        let next = steady_state_select(&pop, &off);
        // Population slots own independent copies.
        assert_eq!(next.len(), 10);
        assert_eq!(pop[0].assignments.len(), 1);
    }
}
