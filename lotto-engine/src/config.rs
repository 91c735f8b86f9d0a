use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use lotto_db::models::{NumberSet, PICK_COUNT};

use crate::strategy::pattern_weighted::DEFAULT_WINDOW;
use crate::strategy::stat_filter::DEFAULT_MAX_ATTEMPTS;

/// Bornes inclusives du filtre statistique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatFilterBounds {
    pub odd: [usize; 2],
    pub high: [usize; 2],
    pub sum: [u32; 2],
}

impl Default for StatFilterBounds {
    fn default() -> Self {
        Self {
            odd: [2, 4],
            high: [2, 4],
            sum: [100, 200],
        }
    }
}

impl StatFilterBounds {
    pub fn accepts(&self, set: &NumberSet) -> bool {
        let within = |v: usize, [lo, hi]: [usize; 2]| lo <= v && v <= hi;
        let sum = set.sum();
        within(set.odd_count(), self.odd)
            && within(set.high_count(), self.high)
            && self.sum[0] <= sum
            && sum <= self.sum[1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Nombre de grilles par recommandation
    pub batch_size: usize,
    /// Nombre de tirages récents consultés par la stratégie « tendance »
    pub pattern_window: usize,
    pub stat_filter: StatFilterBounds,
    pub max_attempts: u32,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            batch_size: 3,
            pattern_window: DEFAULT_WINDOW,
            stat_filter: StatFilterBounds::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl RecommenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            bail!("batch_size doit être > 0");
        }
        if self.pattern_window == 0 {
            bail!("pattern_window doit être > 0");
        }
        if self.max_attempts == 0 {
            bail!("max_attempts doit être > 0");
        }
        let b = &self.stat_filter;
        if b.odd[0] > b.odd[1] || b.odd[1] > PICK_COUNT {
            bail!("Bornes impaires invalides : {:?}", b.odd);
        }
        if b.high[0] > b.high[1] || b.high[1] > PICK_COUNT {
            bail!("Bornes hautes invalides : {:?}", b.high);
        }
        if b.sum[0] > b.sum[1] {
            bail!("Bornes de somme invalides : {:?}", b.sum);
        }
        Ok(())
    }
}

pub fn save_config(config: &RecommenderConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)
        .with_context(|| format!("Impossible d'écrire {:?}", path))?;
    Ok(())
}

pub fn load_config(path: &Path) -> Result<RecommenderConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {:?}", path))?;
    let config: RecommenderConfig = serde_json::from_str(&json)
        .with_context(|| format!("Configuration invalide {:?}", path))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RecommenderConfig::default();
        assert_eq!(config.batch_size, 3);
        assert_eq!(config.pattern_window, 5);
        assert_eq!(config.stat_filter.sum, [100, 200]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = RecommenderConfig {
            batch_size: 5,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: RecommenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RecommenderConfig = serde_json::from_str(r#"{"batch_size": 10}"#).unwrap();
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.pattern_window, 5);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_defaults_shared_with_strategies() {
        let config = RecommenderConfig::default();
        assert_eq!(config.pattern_window, DEFAULT_WINDOW);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut config = RecommenderConfig::default();
        config.stat_filter.sum = [200, 100];
        assert!(config.validate().is_err());

        let mut config = RecommenderConfig::default();
        config.stat_filter.odd = [2, 7];
        assert!(config.validate().is_err());

        let config = RecommenderConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bounds_accepts() {
        let bounds = StatFilterBounds::default();
        // 4 impairs, 3 hauts
        let ok = NumberSet::new(&[5, 10, 20, 25, 41, 45]).unwrap();
        assert_eq!(ok.sum(), 146);
        assert!(bounds.accepts(&ok));
        // somme trop faible
        let low = NumberSet::new(&[1, 2, 3, 4, 23, 24]).unwrap();
        assert!(!bounds.accepts(&low));
        // 6 impairs
        let odd = NumberSet::new(&[1, 3, 5, 27, 29, 45]).unwrap();
        assert!(!bounds.accepts(&odd));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("lotto-config-{}.json", std::process::id()));
        let config = RecommenderConfig {
            pattern_window: 10,
            ..Default::default()
        };
        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
