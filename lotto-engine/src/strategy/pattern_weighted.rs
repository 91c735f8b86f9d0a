use rand::Rng;
use tracing::debug;

use lotto_db::models::{Draw, NumberSet, PICK_COUNT};

use super::{sample_distinct, Strategy};
use crate::error::StrategyError;
use crate::frequency::FrequencyTable;

pub const DEFAULT_WINDOW: usize = 5;

/// Tendance des derniers tirages.
///
/// Le classement par fréquence récente ouvre le pool, complété par les numéros
/// absents en ordre croissant jusqu'aux 45 numéros. Le tirage final reste
/// uniforme sur ce pool : sans historique, la stratégie équivaut à `PureRandom`.
#[derive(Debug, Clone)]
pub struct PatternWeighted {
    /// draws[0] = tirage le plus récent
    draws: Vec<Draw>,
    window: usize,
}

impl Default for PatternWeighted {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PatternWeighted {
    pub fn new(draws: Vec<Draw>) -> Self {
        Self::with_window(draws, DEFAULT_WINDOW)
    }

    pub fn with_window(draws: Vec<Draw>, window: usize) -> Self {
        Self { draws, window }
    }

    pub fn frequency_table(&self) -> FrequencyTable {
        let window = self.window.min(self.draws.len());
        FrequencyTable::from_window(&self.draws[..window])
    }
}

impl Strategy for PatternWeighted {
    fn name(&self) -> &str {
        "PatternWeighted"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NumberSet, StrategyError> {
        let table = self.frequency_table();
        let mut pool = table.padded_ranking();
        debug!(
            window = table.window_len(),
            ranked = table.ranking().len(),
            "pool de tendance"
        );

        let numbers = sample_distinct(&mut pool, PICK_COUNT, rng);
        Ok(NumberSet::new(&numbers)?)
    }
}
