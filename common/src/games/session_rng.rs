use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for one run, so a self-play session can be replayed from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.random_range(0..len))
    }

    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        self.random_index(items.len()).map(|i| items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let items = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        for _ in 0..20 {
            assert_eq!(a.choose(&items), b.choose(&items));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_choose_from_empty_is_none() {
        let mut rng = SessionRng::new(1);
        let empty: [usize; 0] = [];
        assert_eq!(rng.choose(&empty), None);
        assert_eq!(rng.random_index(0), None);
    }
}
