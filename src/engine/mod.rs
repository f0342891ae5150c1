pub mod chromosome;
pub mod fitness;
pub mod stats;
pub mod operators;
pub mod evolution;
pub mod report;

pub use chromosome::Chromosome;
pub use fitness::fitness;
pub use stats::PopulationStats;
pub use operators::{crossover, mutate, random_chromosome};
pub use evolution::{EvolutionEngine, RunOutcome, Termination};
pub use report::{
    ChannelReporter, ChromosomeReport, ConsoleReporter, CrossoverParams, GenerationReport,
    ReportMessage, Reporter, SilentReporter,
};
