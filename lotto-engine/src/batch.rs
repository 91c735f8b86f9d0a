use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use rayon::prelude::*;

use lotto_db::models::NumberSet;

use crate::error::StrategyError;
use crate::strategy::Strategy;

pub type BatchResult = Vec<Result<NumberSet, StrategyError>>;

/// `count` appels indépendants sur la même source. Chaque échec reste à sa place.
pub fn recommend<S: Strategy, R: Rng + ?Sized>(strategy: &S, count: usize, rng: &mut R) -> BatchResult {
    (0..count).map(|_| strategy.generate(rng)).collect()
}

/// Seed fourni ou tiré de la source d'entropie du thread. Renvoie le seed effectif.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

pub fn recommend_seeded<S: Strategy>(strategy: &S, count: usize, seed: u64) -> BatchResult {
    let mut rng = StdRng::seed_from_u64(seed);
    recommend(strategy, count, &mut rng)
}

/// Lot parallèle : une source maîtresse `seed` tire un seed par grille avant la
/// répartition, aucune source n'est partagée entre threads et le résultat ne
/// dépend pas de l'ordonnancement.
pub fn recommend_par<S: Strategy + Sync>(strategy: &S, count: usize, seed: u64) -> BatchResult {
    let mut master = StdRng::seed_from_u64(seed);
    let child_seeds: Vec<u64> = (0..count).map(|_| master.random()).collect();

    child_seeds
        .into_par_iter()
        .map(|child| {
            let mut rng = StdRng::seed_from_u64(child);
            strategy.generate(&mut rng)
        })
        .collect()
}

/// Lot partiel : grilles obtenues et échecs avec leur position.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub sets: Vec<(usize, NumberSet)>,
    pub failures: Vec<(usize, StrategyError)>,
}

impl BatchSummary {
    pub fn from_results(results: BatchResult) -> Self {
        let mut summary = Self::default();
        for (i, result) in results.into_iter().enumerate() {
            match result {
                Ok(set) => summary.sets.push((i, set)),
                Err(e) => summary.failures.push((i, e)),
            }
        }
        summary
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
