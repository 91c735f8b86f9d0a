use anyhow::Result;
use rusqlite::Connection;

use crate::db::fetch_last_draws;
use crate::models::Draw;

/// Source d'historique consultée par les stratégies.
pub trait DrawHistory {
    /// Au plus `window` tirages, draws[0] = tirage le plus récent.
    /// Une source vide renvoie un vecteur vide.
    fn last_draws(&self, window: usize) -> Result<Vec<Draw>>;
}

impl DrawHistory for Connection {
    fn last_draws(&self, window: usize) -> Result<Vec<Draw>> {
        let limit = u32::try_from(window).unwrap_or(u32::MAX);
        fetch_last_draws(self, limit)
    }
}

/// Tranche déjà ordonnée du plus récent au plus ancien.
impl DrawHistory for [Draw] {
    fn last_draws(&self, window: usize) -> Result<Vec<Draw>> {
        Ok(self.iter().take(window).cloned().collect())
    }
}
