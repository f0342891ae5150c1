use resalloc::config::{AppConfig, EvolutionConfig, ProblemConfig};
use resalloc::engine::{
    ChannelReporter, EvolutionEngine, GenerationReport, ReportMessage, Reporter, SilentReporter,
};
use resalloc::{ResallocError, RunOutcome, Termination};

/// Records every report so tests can inspect the full run.
struct RecordingReporter {
    reports: Vec<GenerationReport>,
    outcome: Option<RunOutcome>,
}

impl RecordingReporter {
    fn new() -> Self {
        Self {
            reports: Vec::new(),
            outcome: None,
        }
    }
}

impl Reporter for RecordingReporter {
    fn on_generation(&mut self, report: &GenerationReport) {
        self.reports.push(report.clone());
    }

    fn on_run_complete(&mut self, outcome: &RunOutcome) {
        self.outcome = Some(outcome.clone());
    }
}

fn test_config(seed: u64) -> AppConfig {
    AppConfig {
        problem: ProblemConfig::default(),
        evolution: EvolutionConfig {
            population_size: 6,
            max_generations: 20,
            mutation_rate: 0.05,
            convergence_tolerance: 1e-5,
            seed: Some(seed),
        },
    }
}

#[test]
fn test_run_reports_every_generation_and_terminates() {
    let mut engine = EvolutionEngine::new(test_config(42)).unwrap();
    let mut reporter = RecordingReporter::new();
    let outcome = engine.run(&mut reporter).unwrap();

    assert!(outcome.generations >= 1);
    assert!(outcome.generations <= 20);
    match outcome.termination {
        // The converging generation is reported only once, as the terminal
        // report; every earlier generation went through the operators.
        Termination::Converged => assert_eq!(reporter.reports.len(), outcome.generations - 1),
        Termination::Exhausted => assert_eq!(reporter.reports.len(), outcome.generations),
    }

    let recorded = reporter.outcome.unwrap();
    assert_eq!(recorded.best_fitness, outcome.best_fitness);
    assert!(recorded.final_report.crossover.is_none());
}

#[test]
fn test_population_shape_is_invariant() {
    let mut engine = EvolutionEngine::new(test_config(7)).unwrap();
    let mut reporter = RecordingReporter::new();
    let outcome = engine.run(&mut reporter).unwrap();

    assert_eq!(outcome.population.len(), 6);
    assert!(outcome.population.iter().all(|c| c.len() == 15));

    for report in &reporter.reports {
        assert_eq!(report.chromosomes.len(), 6);
        for c in &report.chromosomes {
            assert_eq!(c.bits.len(), 15);
            assert_eq!(c.allocations.len(), 3);
            assert!(c.allocations.iter().all(|&a| a <= 31));
        }

        let sum: f64 = report.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((report.avg_fitness - report.total_fitness as f64 / 6.0).abs() < 1e-9);

        let params = report.crossover.expect("in-loop reports carry operator parameters");
        assert!(params.pool_size >= 2 && params.pool_size <= 6);
        assert_eq!(params.pool_size % 2, 0);
        assert!(params.bit_pos < 15);
    }
}

#[test]
fn test_flat_fitness_converges_in_second_generation() {
    // Zero demands and zero capacity force every chromosome to fitness 0,
    // so the best fitness repeats immediately.
    let config = AppConfig {
        problem: ProblemConfig {
            num_tasks: 3,
            bits_per_task: 5,
            capacity: 0,
            demands: vec![0, 0, 0],
        },
        evolution: EvolutionConfig {
            seed: Some(1),
            ..EvolutionConfig::default()
        },
    };

    let mut engine = EvolutionEngine::new(config).unwrap();
    let mut reporter = RecordingReporter::new();
    let outcome = engine.run(&mut reporter).unwrap();

    assert_eq!(outcome.termination, Termination::Converged);
    assert_eq!(outcome.generations, 2);
    // Only generation 1 was evolved; generation 2 stopped before any operator.
    assert_eq!(reporter.reports.len(), 1);
    assert!(outcome.final_report.crossover.is_none());
    assert_eq!(outcome.best_fitness, 0);

    // Zero total fitness falls back to uniform selection probabilities.
    for &p in &outcome.final_report.probabilities {
        assert!((p - 1.0 / 6.0).abs() < 1e-12);
    }
}

#[test]
fn test_generation_limit_exhausts_run() {
    let config = AppConfig {
        problem: ProblemConfig::default(),
        evolution: EvolutionConfig {
            max_generations: 1,
            seed: Some(3),
            ..EvolutionConfig::default()
        },
    };

    let mut engine = EvolutionEngine::new(config).unwrap();
    let mut reporter = RecordingReporter::new();
    let outcome = engine.run(&mut reporter).unwrap();

    assert_eq!(outcome.termination, Termination::Exhausted);
    assert_eq!(outcome.generations, 1);
    assert_eq!(reporter.reports.len(), 1);
    // The exhausted population evolved after its last in-loop report and is
    // re-evaluated for the terminal report.
    assert!(outcome.final_report.crossover.is_none());
}

#[test]
fn test_seeded_runs_are_deterministic() {
    let run = |seed| {
        let mut engine = EvolutionEngine::new(test_config(seed)).unwrap();
        let mut reporter = RecordingReporter::new();
        let outcome = engine.run(&mut reporter).unwrap();
        (
            serde_json::to_value(&reporter.reports).unwrap(),
            serde_json::to_value(&outcome).unwrap(),
        )
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn test_channel_reporter_forwards_run() {
    let (sender, receiver) = std::sync::mpsc::channel();
    let mut engine = EvolutionEngine::new(test_config(5)).unwrap();
    let mut reporter = ChannelReporter::new(sender);
    let outcome = engine.run(&mut reporter).unwrap();
    drop(reporter);

    let messages: Vec<ReportMessage> = receiver.iter().collect();
    let generation_count = messages
        .iter()
        .filter(|m| matches!(m, ReportMessage::Generation(_)))
        .count();
    match outcome.termination {
        Termination::Converged => assert_eq!(generation_count, outcome.generations - 1),
        Termination::Exhausted => assert_eq!(generation_count, outcome.generations),
    }
    assert!(matches!(
        messages.last(),
        Some(ReportMessage::RunComplete(_))
    ));
}

#[test]
fn test_invalid_config_is_rejected_at_construction() {
    let mut config = test_config(0);
    config.evolution.mutation_rate = 1.5;
    assert!(matches!(
        EvolutionEngine::new(config),
        Err(ResallocError::Configuration(_))
    ));

    let mut config = test_config(0);
    config.problem.demands.pop();
    assert!(EvolutionEngine::new(config).is_err());
}

#[test]
fn test_silent_reporter_run_matches_returned_outcome() {
    let mut engine = EvolutionEngine::new(test_config(11)).unwrap();
    let outcome = engine.run(&mut SilentReporter).unwrap();
    assert_eq!(outcome.final_report.max_fitness, outcome.best_fitness);
    assert_eq!(outcome.final_report.generation, outcome.generations);
}

#[test]
fn test_config_file_round_trip() {
    let path = std::env::temp_dir().join("resalloc_test_config.toml");
    let config = test_config(123);
    config.save_to_file(&path).unwrap();

    let loaded = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.problem.demands, config.problem.demands);
    assert_eq!(loaded.evolution.seed, Some(123));

    std::fs::remove_file(&path).unwrap();
}
