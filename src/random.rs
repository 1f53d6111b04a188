use rand::{Rng, random};

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// A source of integers for strategies that pick moves at random.
pub trait RandomGenerator: Default {
    /// Returns the next value of the sequence.
    fn next(&mut self) -> i32;

    /// Returns a value in `from..to`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks one element of `items`, or `None` if it is empty.
    fn pick<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }
}

/// Draws from the thread-local generator of `rand`.
#[derive(Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// A seeded linear congruential generator. The same seed always yields the
/// same sequence, which keeps simulated games reproducible.
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl CustomNumberGenerator {
    /// Creates a generator from any seed. The seed is reduced modulo
    /// `i32::MAX` so the recurrence cannot overflow.
    pub const fn new(seed: i64) -> Self {
        Self {
            seed: seed.rem_euclid(i32::MAX as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{CustomNumberGenerator, RandomGenerator, StandardRandomGenerator};

    #[test]
    fn outputs_same_numbers() {
        let mut crg = CustomNumberGenerator::new(42);
        assert_eq!(crg.next_range(0, 10), 8);
        assert_eq!(crg.next_range(0, 10), 4);
        assert_eq!(crg.next_range(0, 10), 1);
        assert_eq!(crg.next_range(0, 10), 2);
        assert_eq!(crg.next_range(0, 10), 4);
    }

    #[test]
    fn extreme_seeds_stay_in_range() {
        for seed in [i64::MAX, i64::MIN, 10_000_000_000, -1] {
            let mut crg = CustomNumberGenerator::new(seed);
            for _ in 0..20 {
                let value = crg.next_range(0, 9);
                assert!((0..9).contains(&value), "seed {seed} gave {value}");
            }
        }
    }

    #[test]
    fn same_seed_same_picks() {
        let cells = [0u8, 3, 5, 6, 8];
        let mut first = CustomNumberGenerator::new(7);
        let mut second = CustomNumberGenerator::new(7);
        for _ in 0..20 {
            assert_eq!(first.pick(&cells), second.pick(&cells));
        }
    }

    #[test]
    fn pick_from_empty_slice_is_none() {
        let empty: [u8; 0] = [];
        assert_eq!(CustomNumberGenerator::default().pick(&empty), None);
        assert_eq!(StandardRandomGenerator.pick(&empty), None);
    }

    #[test]
    fn standard_generator_stays_in_range() {
        let mut rg = StandardRandomGenerator;
        for _ in 0..100 {
            let value = rg.next_range(3, 9);
            assert!((3..9).contains(&value));
        }
    }
}
