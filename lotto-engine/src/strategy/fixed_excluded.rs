use rand::Rng;
use tracing::debug;

use lotto_db::models::{validate_numbers, NumberSet, MAX_NUMBER, PICK_COUNT};

use super::{sample_distinct, Strategy};
use crate::error::StrategyError;

/// Numéros imposés et numéros interdits. Un numéro présent dans les deux
/// listes reste imposé.
#[derive(Debug, Clone, Default)]
pub struct FixedExcluded {
    fixed: Vec<u8>,
    excluded: Vec<u8>,
}

impl FixedExcluded {
    pub fn new(fixed: Vec<u8>, excluded: Vec<u8>) -> Self {
        Self { fixed, excluded }
    }

    /// Numéros libres : 1-45 privés des fixes et des exclus.
    pub fn pool(&self) -> Vec<u8> {
        (1..=MAX_NUMBER)
            .filter(|n| !self.fixed.contains(n) && !self.excluded.contains(n))
            .collect()
    }

    /// Contrôles préalables, sans tirage.
    pub fn check(&self) -> Result<(), StrategyError> {
        validate_numbers(&self.fixed, "Numéros fixes")?;
        validate_numbers(&self.excluded, "Numéros exclus")?;

        if self.fixed.len() > PICK_COUNT {
            return Err(StrategyError::Overflow { fixed: self.fixed.len() });
        }
        let needed = PICK_COUNT - self.fixed.len();
        let available = self.pool().len();
        if needed > available {
            return Err(StrategyError::PoolExhausted { needed, available });
        }
        Ok(())
    }
}

impl Strategy for FixedExcluded {
    fn name(&self) -> &str {
        "FixedExcluded"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NumberSet, StrategyError> {
        self.check()?;

        let mut pool = self.pool();
        let remaining = PICK_COUNT - self.fixed.len();
        debug!(pool = pool.len(), remaining, "tirage fixes/exclus");

        let mut numbers = self.fixed.clone();
        numbers.extend(sample_distinct(&mut pool, remaining, rng));
        Ok(NumberSet::new(&numbers)?)
    }
}
