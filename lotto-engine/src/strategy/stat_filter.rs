use rand::Rng;
use tracing::{debug, warn};

use lotto_db::models::NumberSet;

use super::{PureRandom, Strategy};
use crate::config::StatFilterBounds;
use crate::error::StrategyError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Échantillonnage par rejet : tirages uniformes jusqu'à respecter les bornes
/// impairs / hauts (>= 23) / somme.
///
/// La boucle se termine presque sûrement (environ 62 % des combinaisons
/// passent les bornes par défaut) mais n'a pas de borne stricte : `max_attempts`
/// la plafonne et renvoie `RetryExhausted` au-delà.
#[derive(Debug, Clone)]
pub struct StatFilter {
    bounds: StatFilterBounds,
    max_attempts: u32,
}

impl Default for StatFilter {
    fn default() -> Self {
        Self::new(StatFilterBounds::default(), DEFAULT_MAX_ATTEMPTS)
    }
}

impl StatFilter {
    pub fn new(bounds: StatFilterBounds, max_attempts: u32) -> Self {
        Self { bounds, max_attempts }
    }
}

impl Strategy for StatFilter {
    fn name(&self) -> &str {
        "StatFilter"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NumberSet, StrategyError> {
        for attempt in 1..=self.max_attempts {
            let candidate = PureRandom.generate(rng)?;
            if self.bounds.accepts(&candidate) {
                debug!(attempt, "grille filtrée acceptée");
                return Ok(candidate);
            }
        }
        warn!(attempts = self.max_attempts, "filtre statistique jamais satisfait");
        Err(StrategyError::RetryExhausted {
            attempts: self.max_attempts,
        })
    }
}
