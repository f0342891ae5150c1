use resalloc::config::AppConfig;
use resalloc::engine::{ConsoleReporter, EvolutionEngine};
use std::path::Path;
use std::time::Duration;

const CONFIG_PATH: &str = "resalloc.toml";
const GENERATION_PACING: Duration = Duration::from_millis(300);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = if Path::new(CONFIG_PATH).exists() {
        AppConfig::load_from_file(CONFIG_PATH)?
    } else {
        AppConfig::default()
    };

    println!("=== Real-Time Resource Allocation GA ===");

    let mut engine = EvolutionEngine::new(config)?;
    let mut reporter = ConsoleReporter::with_pacing(GENERATION_PACING);
    engine.run(&mut reporter)?;

    Ok(())
}
