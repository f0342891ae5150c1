use super::traits::ConfigSection;
use crate::error::ResallocError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub max_generations: usize,
    /// Per-bit flip probability applied to the whole population each generation.
    pub mutation_rate: f64,
    /// The run stops once the best fitness repeats within this tolerance
    /// across two consecutive generations.
    pub convergence_tolerance: f64,
    /// Fixed RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 6,
            max_generations: 50,
            mutation_rate: 0.05,
            convergence_tolerance: 1e-5,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), ResallocError> {
        if self.population_size < 2 {
            return Err(ResallocError::Configuration(format!(
                "[{}] population size must be at least 2",
                Self::section_name()
            )));
        }
        if self.max_generations == 0 {
            return Err(ResallocError::Configuration(format!(
                "[{}] at least one generation is required",
                Self::section_name()
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ResallocError::Configuration(format!(
                "[{}] mutation rate must be between 0 and 1",
                Self::section_name()
            )));
        }
        if self.convergence_tolerance < 0.0 {
            return Err(ResallocError::Configuration(format!(
                "[{}] convergence tolerance must be non-negative",
                Self::section_name()
            )));
        }
        Ok(())
    }
}
