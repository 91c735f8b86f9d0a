use lotto_db::error::NumberError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error(transparent)]
    Invalid(#[from] NumberError),

    /// Plus de 6 numéros fixes
    #[error("{fixed} numéros fixes : 6 au maximum")]
    Overflow { fixed: usize },

    /// Pas assez de numéros libres pour compléter la grille
    #[error("Numéros disponibles insuffisants : {needed} requis, {available} disponibles")]
    PoolExhausted { needed: usize, available: usize },

    /// Filtre statistique jamais satisfait dans la limite d'essais
    #[error("Aucune grille conforme après {attempts} essais")]
    RetryExhausted { attempts: u32 },
}
