use super::chromosome::Chromosome;
use crate::config::ProblemConfig;

/// Overshooting the shared capacity costs ten units per excess unit, which
/// dominates any reward reachable within the demand range.
const CAPACITY_PENALTY_WEIGHT: i64 = 10;

/// Allocating beyond a task's demand loses two units per wasted unit.
const WASTE_PENALTY_WEIGHT: i64 = 2;

/// Score one chromosome against the allocation problem.
///
/// Allocations at or below demand earn the allocated amount; allocations
/// beyond demand are penalized for the waste; exceeding the shared capacity
/// is penalized heavily. The raw score is clamped at zero, so a badly
/// violating chromosome ties with a merely useless one.
pub fn fitness(chromosome: &Chromosome, problem: &ProblemConfig) -> u32 {
    let allocations = chromosome.decode(problem.bits_per_task);

    let total: i64 = allocations.iter().map(|&a| i64::from(a)).sum();
    let penalty = if total > i64::from(problem.capacity) {
        (total - i64::from(problem.capacity)) * CAPACITY_PENALTY_WEIGHT
    } else {
        0
    };

    let reward: i64 = allocations
        .iter()
        .zip(&problem.demands)
        .map(|(&alloc, &demand)| {
            let (a, d) = (i64::from(alloc), i64::from(demand));
            if a <= d {
                a
            } else {
                d - (a - d) * WASTE_PENALTY_WEIGHT
            }
        })
        .sum();

    (reward - penalty).max(0) as u32
}
