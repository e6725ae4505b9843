use rand::{Rng, rngs::SmallRng};

/// Source of uniformly distributed numbers in `[0, 1)`.
///
/// Used for particle placement, drift recycling and the matrix rain. The
/// browser build plugs in `Math.random`; seeded pages and tests use a
/// [`SmallRng`] from `seed_from_u64` so layouts are reproducible.
pub trait RandomSource {
    /// Returns the next sample in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Returns `true` with the given probability.
    fn chance(&mut self, probability: f32) -> bool {
        self.next_f32() < probability
    }

    /// Returns a sample in `[0, upper)`.
    fn below(&mut self, upper: usize) -> usize {
        ((self.next_f32() * upper as f32) as usize).min(upper.saturating_sub(1))
    }
}

impl RandomSource for SmallRng {
    fn next_f32(&mut self) -> f32 {
        self.r#gen::<f32>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn samples_stay_in_unit_interval() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let x = rng.next_f32();
            assert!((0.0..1.0).contains(&x), "{x}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        for _ in 0..64 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn certain_chance_always_hits() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!((0..1000).all(|_| rng.chance(1.0)));
        assert!((0..1000).all(|_| !rng.chance(0.0)));
    }

    #[test]
    fn below_is_bounded() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert!((0..1000).all(|_| rng.below(5) < 5));
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn works_through_a_reference() {
        fn sample(mut rng: impl RandomSource) -> f32 {
            rng.next_f32()
        }

        let mut rng = SmallRng::seed_from_u64(1);
        let mut twin = rng.clone();
        assert_eq!(sample(&mut rng), twin.next_f32());
    }
}
