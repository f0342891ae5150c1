use super::chromosome::Chromosome;
use super::operators::{crossover, mutate, random_chromosome};
use super::report::{CrossoverParams, GenerationReport, Reporter};
use super::stats::PopulationStats;
use crate::config::AppConfig;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// Best fitness repeated across two consecutive generations.
    Converged,
    /// The generation limit was reached first.
    Exhausted,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Converged => write!(f, "Fitness stabilized"),
            Termination::Exhausted => write!(f, "Generation limit reached"),
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub termination: Termination,
    pub generations: usize,
    pub best_fitness: u32,
    pub population: Vec<Chromosome>,
    /// Statistics of the final population, with no operator parameters.
    pub final_report: GenerationReport,
}

/// The evolution loop: owns the population and the RNG, calls the fitness
/// statistics to observe each generation and the operators to produce the
/// next one, and reports every generation to the caller's [`Reporter`].
pub struct EvolutionEngine {
    config: AppConfig,
    rng: StdRng,
}

impl EvolutionEngine {
    /// Validates the configuration and seeds the RNG (fixed seed for
    /// reproducible runs, entropy otherwise).
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.evolution.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { config, rng })
    }

    /// Run the evolutionary search to convergence or the generation limit.
    ///
    /// Per generation: evaluate statistics, check convergence against the
    /// previous best (before touching the population), then draw operator
    /// parameters and apply crossover followed by mutation. The report
    /// emitted each generation describes the population as evaluated on
    /// entry together with the crossover parameters applied to it.
    pub fn run<R: Reporter>(&mut self, reporter: &mut R) -> Result<RunOutcome> {
        let chromosome_len = self.config.problem.chromosome_len();
        let bits_per_task = self.config.problem.bits_per_task;
        let max_generations = self.config.evolution.max_generations;

        let mut population = self.initialize_population(chromosome_len);
        let mut previous_max: Option<u32> = None;

        let mut termination = Termination::Exhausted;
        let mut generations = max_generations;
        let mut converged_stats = None;

        for generation in 1..=max_generations {
            let stats = PopulationStats::evaluate(&population, &self.config.problem);

            if self.has_converged(previous_max, stats.max_fitness) {
                log::debug!(
                    "max fitness {} stabilized in generation {}",
                    stats.max_fitness,
                    generation
                );
                termination = Termination::Converged;
                generations = generation;
                converged_stats = Some(stats);
                break;
            }
            previous_max = Some(stats.max_fitness);

            let params = CrossoverParams {
                pool_size: self.draw_pool_size(),
                bit_pos: self.rng.gen_range(0..chromosome_len),
            };
            let report =
                GenerationReport::new(generation, &population, &stats, bits_per_task, Some(params));

            crossover(&mut population, params.pool_size, params.bit_pos)?;
            mutate(&mut population, self.config.evolution.mutation_rate, &mut self.rng);

            reporter.on_generation(&report);
        }

        // The converged population is the one that triggered the stop; the
        // exhausted population has evolved since its last report and is
        // evaluated once more.
        let final_stats = match converged_stats {
            Some(stats) => stats,
            None => PopulationStats::evaluate(&population, &self.config.problem),
        };
        let final_report =
            GenerationReport::new(generations, &population, &final_stats, bits_per_task, None);

        let outcome = RunOutcome {
            termination,
            generations,
            best_fitness: final_stats.max_fitness,
            population,
            final_report,
        };
        reporter.on_run_complete(&outcome);

        Ok(outcome)
    }

    fn initialize_population(&mut self, chromosome_len: usize) -> Vec<Chromosome> {
        (0..self.config.evolution.population_size)
            .map(|_| random_chromosome(chromosome_len, &mut self.rng))
            .collect()
    }

    fn has_converged(&self, previous_max: Option<u32>, max_fitness: u32) -> bool {
        match previous_max {
            Some(prev) => {
                prev == max_fitness
                    || (f64::from(max_fitness) - f64::from(prev)).abs()
                        < self.config.evolution.convergence_tolerance
            }
            None => false,
        }
    }

    /// Even mating-pool size, uniform over {2, 4, ..., N rounded down}.
    fn draw_pool_size(&mut self) -> usize {
        let half = self.config.evolution.population_size / 2;
        2 * self.rng.gen_range(1..=half)
    }
}
