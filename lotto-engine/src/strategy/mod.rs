pub mod fixed_excluded;
pub mod pattern_weighted;
pub mod pure_random;
pub mod stat_filter;

use rand::seq::SliceRandom;
use rand::Rng;

use lotto_db::models::{Draw, NumberSet};

use crate::config::RecommenderConfig;
use crate::error::StrategyError;

pub use fixed_excluded::FixedExcluded;
pub use pattern_weighted::PatternWeighted;
pub use pure_random::PureRandom;
pub use stat_filter::StatFilter;

/// Générateur de grilles. La source d'aléa est toujours passée par l'appelant.
pub trait Strategy {
    fn name(&self) -> &str;
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NumberSet, StrategyError>;
}

/// Choix de stratégie à l'exécution.
#[derive(Debug, Clone)]
pub enum StrategyKind {
    FixedExcluded(FixedExcluded),
    PatternWeighted(PatternWeighted),
    StatFilter(StatFilter),
    PureRandom(PureRandom),
}

impl StrategyKind {
    pub fn fixed_excluded(fixed: Vec<u8>, excluded: Vec<u8>) -> Self {
        StrategyKind::FixedExcluded(FixedExcluded::new(fixed, excluded))
    }

    /// `draws` du plus récent au plus ancien.
    pub fn pattern_weighted(draws: Vec<Draw>, config: &RecommenderConfig) -> Self {
        StrategyKind::PatternWeighted(PatternWeighted::with_window(draws, config.pattern_window))
    }

    pub fn stat_filter(config: &RecommenderConfig) -> Self {
        StrategyKind::StatFilter(StatFilter::new(config.stat_filter, config.max_attempts))
    }

    pub fn pure_random() -> Self {
        StrategyKind::PureRandom(PureRandom)
    }
}

impl Strategy for StrategyKind {
    fn name(&self) -> &str {
        match self {
            StrategyKind::FixedExcluded(s) => s.name(),
            StrategyKind::PatternWeighted(s) => s.name(),
            StrategyKind::StatFilter(s) => s.name(),
            StrategyKind::PureRandom(s) => s.name(),
        }
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NumberSet, StrategyError> {
        match self {
            StrategyKind::FixedExcluded(s) => s.generate(rng),
            StrategyKind::PatternWeighted(s) => s.generate(rng),
            StrategyKind::StatFilter(s) => s.generate(rng),
            StrategyKind::PureRandom(s) => s.generate(rng),
        }
    }
}

/// Tirage uniforme sans remise de `count` éléments de `pool`.
/// `pool` est réordonné sur place.
pub(crate) fn sample_distinct<R: Rng + ?Sized>(pool: &mut [u8], count: usize, rng: &mut R) -> Vec<u8> {
    let (chosen, _) = pool.partial_shuffle(rng, count);
    chosen.to_vec()
}

#[cfg(test)]
pub(crate) fn assert_valid_set(set: &NumberSet) {
    let n = set.numbers();
    assert_eq!(n.len(), 6);
    assert!(n.iter().all(|&x| (1..=45).contains(&x)), "Hors limites : {:?}", n);
    assert!(n.windows(2).all(|w| w[0] < w[1]), "Non trié ou doublon : {:?}", n);
}

#[cfg(test)]
pub(crate) fn make_test_draws(n: usize) -> Vec<Draw> {
    (0..n)
        .map(|i| {
            let base = (i % 7) as u8;
            Draw {
                draw_id: (n - i) as u32,
                numbers: [
                    base * 6 + 1,
                    base * 6 + 2,
                    base * 6 + 3,
                    base * 6 + 4,
                    base * 6 + 5,
                    base * 6 + 6,
                ],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_distinct() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool: Vec<u8> = (1..=10).collect();
        let picked = sample_distinct(&mut pool, 4, &mut rng);
        assert_eq!(picked.len(), 4);
        let mut dedup = picked.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), 4);
        assert!(picked.iter().all(|n| (1..=10).contains(n)));
    }

    #[test]
    fn test_make_test_draws_valid() {
        for draw in make_test_draws(30) {
            assert!(lotto_db::models::validate_numbers(&draw.numbers, "test").is_ok());
        }
    }

    #[test]
    fn test_kind_dispatch() {
        let config = RecommenderConfig::default();
        let kinds = vec![
            StrategyKind::fixed_excluded(vec![3, 12, 21], vec![4, 10]),
            StrategyKind::pattern_weighted(make_test_draws(10), &config),
            StrategyKind::stat_filter(&config),
            StrategyKind::pure_random(),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        for kind in &kinds {
            let set = kind.generate(&mut rng).unwrap();
            assert_valid_set(&set);
        }
        let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["FixedExcluded", "PatternWeighted", "StatFilter", "PureRandom"]);
    }

    #[test]
    fn test_same_seed_same_output() {
        let kind = StrategyKind::pure_random();
        let a = kind.generate(&mut StdRng::seed_from_u64(7)).unwrap();
        let b = kind.generate(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }
}
