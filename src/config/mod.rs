pub mod traits;
pub mod problem;
pub mod evolution;
pub mod manager;

pub use manager::AppConfig;
pub use problem::ProblemConfig;
pub use evolution::EvolutionConfig;
pub use traits::ConfigSection;
