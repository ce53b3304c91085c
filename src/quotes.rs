use rand::seq::SliceRandom;
use rand::Rng;

/// The fixed set of motivational quotes
pub const QUOTES: &[&str] = &[
    "Keep pushing forward, you're doing great!",
    "Small steps lead to big achievements!",
    "Believe in yourself and your abilities!",
    "Progress is progress, no matter how small.",
];

/// Pick one quote uniformly at random
pub fn pick(rng: &mut impl Rng) -> &'static str {
    // QUOTES is non-empty, so choose always succeeds
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_returns_a_known_quote() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let quote = pick(&mut rng);
            assert!(QUOTES.contains(&quote));
        }
    }

    #[test]
    fn test_pick_is_deterministic_given_the_rng() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(pick(&mut a), pick(&mut b));
    }

    #[test]
    fn test_pick_eventually_covers_the_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick(&mut rng));
        }
        assert_eq!(seen.len(), QUOTES.len());
    }
}
