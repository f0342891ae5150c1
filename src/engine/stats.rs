use super::chromosome::Chromosome;
use super::fitness::fitness;
use crate::config::ProblemConfig;
use rayon::prelude::*;
use serde::Serialize;

/// Fitness aggregates and selection data for one generation.
///
/// The probability and expected-count vectors are informational: they are
/// handed to reporters but the loop does not resample the population from
/// them. Selection pressure comes from which chromosomes occupy the head of
/// the population and enter the mating pool.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationStats {
    pub fitness: Vec<u32>,
    pub total_fitness: u64,
    pub max_fitness: u32,
    pub avg_fitness: f64,
    /// Fitness-proportionate selection probability per chromosome; uniform
    /// `1/N` when the whole generation scored zero.
    pub probabilities: Vec<f64>,
    pub expected_counts: Vec<f64>,
    pub actual_counts: Vec<u32>,
}

impl PopulationStats {
    /// Evaluate a non-empty population. Chromosome fitness values are
    /// independent, so they are computed in parallel.
    pub fn evaluate(population: &[Chromosome], problem: &ProblemConfig) -> Self {
        let fitness: Vec<u32> = population.par_iter().map(|c| fitness(c, problem)).collect();

        let n = population.len();
        let total_fitness: u64 = fitness.iter().map(|&f| u64::from(f)).sum();
        let max_fitness = fitness.iter().copied().max().unwrap_or(0);
        let avg_fitness = total_fitness as f64 / n as f64;

        let probabilities: Vec<f64> = if total_fitness == 0 {
            // No chromosome carries any signal; fall back to a uniform pick.
            vec![1.0 / n as f64; n]
        } else {
            fitness
                .iter()
                .map(|&f| f as f64 / total_fitness as f64)
                .collect()
        };

        let expected_counts: Vec<f64> = probabilities.iter().map(|p| p * n as f64).collect();
        let actual_counts: Vec<u32> = expected_counts.iter().map(|e| e.round() as u32).collect();

        Self {
            fitness,
            total_fitness,
            max_fitness,
            avg_fitness,
            probabilities,
            expected_counts,
            actual_counts,
        }
    }
}
