//! Binary-encoded genetic algorithm that searches for an allocation of a
//! shared resource across competing tasks.
//!
//! The [`engine::EvolutionEngine`] owns a population of fixed-length bit
//! strings and evolves it generation by generation: evaluate fitness
//! statistics, check convergence, cross over a randomly sized mating pool at
//! a random bit, then mutate every bit with a fixed probability. Each
//! generation is delivered to a [`engine::Reporter`] as structured data;
//! rendering lives entirely outside the core.

pub mod config;
pub mod engine;
pub mod error;

pub use config::{AppConfig, EvolutionConfig, ProblemConfig};
pub use engine::{
    Chromosome, ConsoleReporter, EvolutionEngine, GenerationReport, Reporter, RunOutcome,
    SilentReporter, Termination,
};
pub use error::{ResallocError, Result};
