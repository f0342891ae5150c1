use super::chromosome::Chromosome;
use crate::error::{ResallocError, Result};
use rand::Rng;

/// Generate a random chromosome with each bit uniform over {0, 1}.
pub fn random_chromosome<R: Rng>(length: usize, rng: &mut R) -> Chromosome {
    Chromosome::from_bits((0..length).map(|_| rng.gen_range(0..=1u8)).collect())
}

/// Single-bit crossover over the head of the population.
///
/// The first `pool_size` chromosomes form the mating pool and are paired
/// consecutively: (0,1), (2,3), ... Within each pair the bit at `bit_pos` is
/// swapped between the partners. Chromosomes beyond the pool are untouched
/// and every chromosome keeps its position.
///
/// `pool_size` must be even, at least 2, and no larger than the population;
/// `bit_pos` must be inside the chromosome.
pub fn crossover(population: &mut [Chromosome], pool_size: usize, bit_pos: usize) -> Result<()> {
    if pool_size < 2 || pool_size % 2 != 0 {
        return Err(ResallocError::Operator(format!(
            "mating pool size must be even and at least 2, got {}",
            pool_size
        )));
    }
    if pool_size > population.len() {
        return Err(ResallocError::Operator(format!(
            "mating pool size {} exceeds population size {}",
            pool_size,
            population.len()
        )));
    }
    let chromosome_len = population[0].len();
    if bit_pos >= chromosome_len {
        return Err(ResallocError::Operator(format!(
            "crossover bit {} out of range for chromosome length {}",
            bit_pos, chromosome_len
        )));
    }

    for pair in population[..pool_size].chunks_exact_mut(2) {
        let (left, right) = pair.split_at_mut(1);
        let bit = left[0].bit(bit_pos);
        left[0].set_bit(bit_pos, right[0].bit(bit_pos));
        right[0].set_bit(bit_pos, bit);
    }

    Ok(())
}

/// Flip every bit of every chromosome independently with probability `rate`.
///
/// Applies to the whole population, including chromosomes outside the last
/// mating pool. Rate validity is enforced by configuration validation.
pub fn mutate<R: Rng>(population: &mut [Chromosome], rate: f64, rng: &mut R) {
    for (idx, chromosome) in population.iter_mut().enumerate() {
        let before = log::log_enabled!(log::Level::Debug).then(|| chromosome.to_string());

        for pos in 0..chromosome.len() {
            if rng.gen::<f64>() < rate {
                chromosome.flip_bit(pos);
            }
        }

        if let Some(before) = before {
            log::debug!("mutation: chromosome {}: {} -> {}", idx, before, chromosome);
        }
    }
}
