//! Propriétés des stratégies sur des entrées arbitraires.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use lotto_db::models::{Draw, NumberSet};
use lotto_engine::error::StrategyError;
use lotto_engine::frequency::FrequencyTable;
use lotto_engine::strategy::{FixedExcluded, PatternWeighted, StatFilter, Strategy as _};

fn assert_number_set(set: &NumberSet) {
    let n = set.numbers();
    assert!(n.iter().all(|&x| (1..=45).contains(&x)));
    assert!(n.windows(2).all(|w| w[0] < w[1]));
}

fn arb_numbers(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::sample::subsequence((1u8..=45).collect::<Vec<_>>(), 0..=max_len)
        .prop_shuffle()
}

fn arb_draw() -> impl Strategy<Value = Draw> {
    (1u32..2000, prop::sample::subsequence((1u8..=45).collect::<Vec<_>>(), 6))
        .prop_map(|(id, numbers)| {
            let mut arr = [0u8; 6];
            arr.copy_from_slice(&numbers);
            Draw { draw_id: id, numbers: arr }
        })
}

proptest! {
    #[test]
    fn fixed_excluded_contract(
        fixed in arb_numbers(8),
        excluded in arb_numbers(44),
        seed in any::<u64>(),
    ) {
        let strategy = FixedExcluded::new(fixed.clone(), excluded.clone());
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = (1..=45u8).filter(|n| !fixed.contains(n) && !excluded.contains(n)).count();

        match strategy.generate(&mut rng) {
            Ok(set) => {
                assert_number_set(&set);
                prop_assert!(fixed.len() <= 6);
                prop_assert!(fixed.iter().all(|&n| set.contains(n)));
                prop_assert!(excluded
                    .iter()
                    .filter(|n| !fixed.contains(n))
                    .all(|&n| !set.contains(n)));
            }
            Err(StrategyError::Overflow { fixed: count }) => {
                prop_assert!(fixed.len() > 6);
                prop_assert_eq!(count, fixed.len());
            }
            Err(StrategyError::PoolExhausted { needed, available }) => {
                prop_assert!(fixed.len() <= 6);
                prop_assert_eq!(needed, 6 - fixed.len());
                prop_assert_eq!(available, pool);
                prop_assert!(needed > available);
            }
            Err(e) => prop_assert!(false, "Erreur inattendue : {}", e),
        }
    }

    #[test]
    fn pattern_weighted_always_valid(
        draws in prop::collection::vec(arb_draw(), 0..12),
        seed in any::<u64>(),
    ) {
        let strategy = PatternWeighted::new(draws);
        let mut rng = StdRng::seed_from_u64(seed);
        let set = strategy.generate(&mut rng).unwrap();
        assert_number_set(&set);
    }

    #[test]
    fn padded_ranking_is_permutation(draws in prop::collection::vec(arb_draw(), 0..12)) {
        let table = FrequencyTable::from_window(&draws);
        let pool = table.padded_ranking();
        prop_assert_eq!(pool.len(), 45);
        let unique: BTreeSet<u8> = pool.iter().copied().collect();
        prop_assert_eq!(unique.len(), 45);
        // Classement par fréquence non croissante
        let ranked = table.ranking();
        prop_assert!(ranked.windows(2).all(|w| table.count(w[0]) >= table.count(w[1])));
        prop_assert_eq!(&pool[..ranked.len()], ranked);
    }

    #[test]
    fn stat_filter_respects_bounds(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let set = StatFilter::default().generate(&mut rng).unwrap();
        assert_number_set(&set);
        prop_assert!((2..=4).contains(&set.odd_count()));
        prop_assert!((2..=4).contains(&set.high_count()));
        prop_assert!((100..=200).contains(&set.sum()));
    }
}
