use nanorand::{Rng, WyRand};

/// A uniform draw from `[lo, hi]`.
pub(crate) fn uniform(rng: &mut WyRand, lo: f64, hi: f64) -> f64 {
    let unit = rng.generate::<u64>() as f64 / u64::MAX as f64;
    lo + (hi - lo) * unit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_range() {
        let mut rng = WyRand::new_seed(11);
        for _ in 0..1000 {
            let value = uniform(&mut rng, -0.25, 0.25);
            assert!((-0.25..=0.25).contains(&value));
        }
    }

    #[test]
    fn seeded_draws_are_deterministic() {
        let mut a = WyRand::new_seed(8);
        let mut b = WyRand::new_seed(8);
        for _ in 0..10 {
            assert_eq!(uniform(&mut a, 0.0, 1.0), uniform(&mut b, 0.0, 1.0));
        }
    }
}
