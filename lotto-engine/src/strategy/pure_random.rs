use rand::Rng;

use lotto_db::models::{NumberSet, MAX_NUMBER, PICK_COUNT};

use super::{sample_distinct, Strategy};
use crate::error::StrategyError;

/// 6 numéros tirés uniformément dans 1-45.
#[derive(Debug, Clone, Copy, Default)]
pub struct PureRandom;

impl Strategy for PureRandom {
    fn name(&self) -> &str {
        "PureRandom"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NumberSet, StrategyError> {
        let mut pool: Vec<u8> = (1..=MAX_NUMBER).collect();
        let numbers = sample_distinct(&mut pool, PICK_COUNT, rng);
        Ok(NumberSet::new(&numbers)?)
    }
}
