use super::{evolution::EvolutionConfig, problem::ProblemConfig, traits::ConfigSection};
use crate::error::ResallocError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub problem: ProblemConfig,
    pub evolution: EvolutionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ResallocError> {
        self.problem.validate()?;
        self.evolution.validate()?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ResallocError> {
        let contents = std::fs::read_to_string(path)?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| ResallocError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ResallocError> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| ResallocError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }
}
