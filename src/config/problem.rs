use super::traits::ConfigSection;
use crate::error::ResallocError;
use serde::{Deserialize, Serialize};

/// The allocation problem: a set of tasks competing for one shared resource.
///
/// Each task is allocated an integer number of units encoded in
/// `bits_per_task` bits, so a single allocation ranges over
/// `0..=2^bits_per_task - 1`. All allocations together compete for
/// `capacity` units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub num_tasks: usize,
    pub bits_per_task: u32,
    pub capacity: u32,
    pub demands: Vec<u32>,
}

impl ProblemConfig {
    pub fn chromosome_len(&self) -> usize {
        self.num_tasks * self.bits_per_task as usize
    }

    /// Largest allocation a single task can receive.
    pub fn max_allocation(&self) -> u32 {
        (1u32 << self.bits_per_task) - 1
    }
}

impl Default for ProblemConfig {
    fn default() -> Self {
        // 3 tasks, 1 resource with capacity 30 units, 0-31 units per task
        Self {
            num_tasks: 3,
            bits_per_task: 5,
            capacity: 30,
            demands: vec![10, 12, 8],
        }
    }
}

impl ConfigSection for ProblemConfig {
    fn section_name() -> &'static str {
        "problem"
    }

    fn validate(&self) -> Result<(), ResallocError> {
        if self.num_tasks == 0 {
            return Err(ResallocError::Configuration(format!(
                "[{}] at least one task is required",
                Self::section_name()
            )));
        }
        if self.bits_per_task == 0 || self.bits_per_task > 16 {
            return Err(ResallocError::Configuration(format!(
                "[{}] bits per task must be between 1 and 16",
                Self::section_name()
            )));
        }
        if self.demands.len() != self.num_tasks {
            return Err(ResallocError::Configuration(format!(
                "[{}] demand table has {} entries but there are {} tasks",
                Self::section_name(),
                self.demands.len(),
                self.num_tasks
            )));
        }
        if let Some(&d) = self.demands.iter().find(|&&d| d > self.max_allocation()) {
            return Err(ResallocError::Configuration(format!(
                "[{}] demand {} is not representable in {} bits",
                Self::section_name(),
                d,
                self.bits_per_task
            )));
        }
        Ok(())
    }
}
