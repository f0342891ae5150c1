use super::chromosome::Chromosome;
use super::evolution::RunOutcome;
use super::stats::PopulationStats;
use serde::Serialize;
use std::time::Duration;

/// One chromosome as seen by a reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromosomeReport {
    pub bits: String,
    pub allocations: Vec<u32>,
    pub fitness: u32,
}

/// Crossover parameters chosen for a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrossoverParams {
    pub pool_size: usize,
    pub bit_pos: usize,
}

/// Everything the loop observed about one generation, handed to the
/// [`Reporter`] as structured data. The core never formats text.
///
/// `crossover` is `None` on the terminal report, where no operator ran.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub generation: usize,
    pub chromosomes: Vec<ChromosomeReport>,
    pub total_fitness: u64,
    pub max_fitness: u32,
    pub avg_fitness: f64,
    pub probabilities: Vec<f64>,
    pub expected_counts: Vec<f64>,
    pub actual_counts: Vec<u32>,
    pub crossover: Option<CrossoverParams>,
}

impl GenerationReport {
    pub(crate) fn new(
        generation: usize,
        population: &[Chromosome],
        stats: &PopulationStats,
        bits_per_task: u32,
        crossover: Option<CrossoverParams>,
    ) -> Self {
        let chromosomes = population
            .iter()
            .zip(&stats.fitness)
            .map(|(c, &fitness)| ChromosomeReport {
                bits: c.to_string(),
                allocations: c.decode(bits_per_task),
                fitness,
            })
            .collect();

        Self {
            generation,
            chromosomes,
            total_fitness: stats.total_fitness,
            max_fitness: stats.max_fitness,
            avg_fitness: stats.avg_fitness,
            probabilities: stats.probabilities.clone(),
            expected_counts: stats.expected_counts.clone(),
            actual_counts: stats.actual_counts.clone(),
            crossover,
        }
    }
}

/// Receives per-generation reports from the evolution loop.
///
/// Reporters render or forward the data; they cannot mutate engine state.
pub trait Reporter {
    fn on_generation(&mut self, report: &GenerationReport);
    fn on_run_complete(&mut self, outcome: &RunOutcome);
}

/// Prints each generation as a population table, like the run log of the
/// original demo. An optional pacing delay slows the stream down for
/// watching live.
pub struct ConsoleReporter {
    pacing: Option<Duration>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { pacing: None }
    }

    pub fn with_pacing(pacing: Duration) -> Self {
        Self {
            pacing: Some(pacing),
        }
    }

    fn print_table(chromosomes: &[ChromosomeReport]) {
        println!("{:<15} | {:<20} | {:<7}", "Chromosome", "Allocations", "Fitness");
        println!("{}", "-".repeat(50));
        for c in chromosomes {
            println!(
                "{:<15} | {:<20} | {:<7}",
                c.bits,
                format!("{:?}", c.allocations),
                c.fitness
            );
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn on_generation(&mut self, report: &GenerationReport) {
        println!("\n--- Generation {} ---", report.generation);
        Self::print_table(&report.chromosomes);
        println!(
            "Sum fitness: {}, Max fitness: {}, Avg fitness: {:.2}",
            report.total_fitness, report.max_fitness, report.avg_fitness
        );
        if let Some(params) = &report.crossover {
            println!(
                "Mating pool size: {}, crossover bit: {}",
                params.pool_size, params.bit_pos
            );
        }

        if let Some(pacing) = self.pacing {
            std::thread::sleep(pacing);
        }
    }

    fn on_run_complete(&mut self, outcome: &RunOutcome) {
        println!("\n=== Final Population ===");
        Self::print_table(&outcome.final_report.chromosomes);
        println!(
            "{} after {} generations, best fitness {}",
            outcome.termination, outcome.generations, outcome.best_fitness
        );
    }
}

/// Forwards reports over an mpsc channel, e.g. to a UI thread.
pub struct ChannelReporter {
    sender: std::sync::mpsc::Sender<ReportMessage>,
}

#[derive(Debug, Clone)]
pub enum ReportMessage {
    Generation(GenerationReport),
    RunComplete(RunOutcome),
}

impl ChannelReporter {
    pub fn new(sender: std::sync::mpsc::Sender<ReportMessage>) -> Self {
        Self { sender }
    }
}

impl Reporter for ChannelReporter {
    fn on_generation(&mut self, report: &GenerationReport) {
        let _ = self.sender.send(ReportMessage::Generation(report.clone()));
    }

    fn on_run_complete(&mut self, outcome: &RunOutcome) {
        let _ = self.sender.send(ReportMessage::RunComplete(outcome.clone()));
    }
}

/// Discards every report; for tests and headless runs.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn on_generation(&mut self, _report: &GenerationReport) {}
    fn on_run_complete(&mut self, _outcome: &RunOutcome) {}
}
