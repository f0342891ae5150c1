use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary chromosome for the allocation search
///
/// A chromosome is a fixed-length string of bits that deterministically maps
/// to one allocation per task: consecutive `bits_per_task`-wide segments are
/// read most-significant-bit first as unsigned integers.
///
/// # Why operate on bits instead of allocation vectors?
///
/// Genetic operators work best on simple, linear structures:
/// - **Crossover**: Swapping bits between two chromosomes is trivial
/// - **Mutation**: Flipping individual bits is straightforward
/// - **No invalid states**: Any bit string decodes to a valid allocation
///
/// The length is `num_tasks * bits_per_task` and stays constant across the
/// population and across generations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chromosome(Vec<u8>);

impl Chromosome {
    /// Wrap a bit vector; every entry must be 0 or 1.
    pub fn from_bits(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bit(&self, pos: usize) -> u8 {
        self.0[pos]
    }

    pub fn set_bit(&mut self, pos: usize, value: u8) {
        debug_assert!(value <= 1);
        self.0[pos] = value;
    }

    pub fn flip_bit(&mut self, pos: usize) {
        self.0[pos] ^= 1;
    }

    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|&&b| b == 1).count()
    }

    /// Split the chromosome into per-task allocations.
    ///
    /// Each consecutive `bits_per_task`-wide segment is parsed as a
    /// big-endian unsigned integer.
    pub fn decode(&self, bits_per_task: u32) -> Vec<u32> {
        self.0
            .chunks_exact(bits_per_task as usize)
            .map(|gene| gene.iter().fold(0u32, |acc, &b| (acc << 1) | u32::from(b)))
            .collect()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chromosome(bits: &str) -> Chromosome {
        Chromosome::from_bits(bits.bytes().map(|b| b - b'0').collect())
    }

    #[test]
    fn test_decode_reference_chromosomes() {
        assert_eq!(chromosome("010011110100001").decode(5), vec![9, 29, 1]);
        assert_eq!(chromosome("001010010000111").decode(5), vec![5, 4, 7]);
        assert_eq!(chromosome("111110100111001").decode(5), vec![31, 9, 25]);
    }

    #[test]
    fn test_decode_width_and_range() {
        let c = chromosome("111111111111111");
        let allocations = c.decode(5);
        assert_eq!(allocations.len(), 3);
        assert!(allocations.iter().all(|&a| a <= 31));
        assert_eq!(allocations, vec![31, 31, 31]);

        assert_eq!(chromosome("000000000000000").decode(5), vec![0, 0, 0]);
    }

    #[test]
    fn test_flip_bit_is_binary_complement() {
        let mut c = chromosome("0101");
        c.flip_bit(0);
        c.flip_bit(1);
        assert_eq!(c.to_string(), "1001");
    }

    #[test]
    fn test_display_round_trip() {
        let c = chromosome("100101110111000");
        assert_eq!(c.to_string(), "100101110111000");
        assert_eq!(c.len(), 15);
        assert_eq!(c.count_ones(), 8);
    }
}
