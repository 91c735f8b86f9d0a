use lotto_db::models::{Draw, NumberStats, MAX_NUMBER};

/// Occurrences de chaque numéro sur une fenêtre de tirages.
///
/// Les tirages sont fournis du plus récent au plus ancien (draws[0] = dernier
/// tirage) mais parcourus dans l'ordre chronologique : à fréquence égale, le
/// numéro apparu le premier dans ce parcours est classé devant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; MAX_NUMBER as usize],
    ranking: Vec<u8>,
    window_len: usize,
}

impl FrequencyTable {
    pub fn from_window(draws: &[Draw]) -> Self {
        let mut counts = [0u32; MAX_NUMBER as usize];
        let mut first_seen = [usize::MAX; MAX_NUMBER as usize];

        let scan = draws.iter().rev().flat_map(|d| d.numbers.iter().copied());
        for (pos, n) in scan.enumerate() {
            let idx = n.wrapping_sub(1) as usize;
            if idx < counts.len() {
                counts[idx] += 1;
                if first_seen[idx] == usize::MAX {
                    first_seen[idx] = pos;
                }
            }
        }

        let mut ranking: Vec<u8> = (1..=MAX_NUMBER)
            .filter(|&n| counts[(n - 1) as usize] > 0)
            .collect();
        ranking.sort_by(|&a, &b| {
            let (ia, ib) = ((a - 1) as usize, (b - 1) as usize);
            counts[ib].cmp(&counts[ia]).then(first_seen[ia].cmp(&first_seen[ib]))
        });

        Self {
            counts,
            ranking,
            window_len: draws.len(),
        }
    }

    pub fn count(&self, number: u8) -> u32 {
        match number {
            1..=MAX_NUMBER => self.counts[(number - 1) as usize],
            _ => 0,
        }
    }

    /// Numéros sortis au moins une fois, par fréquence décroissante.
    pub fn ranking(&self) -> &[u8] {
        &self.ranking
    }

    /// Classement complété par les numéros absents, en ordre croissant,
    /// jusqu'à couvrir les 45 numéros une seule fois chacun.
    pub fn padded_ranking(&self) -> Vec<u8> {
        let mut pool = self.ranking.clone();
        pool.extend((1..=MAX_NUMBER).filter(|&n| self.count(n) == 0));
        pool
    }

    pub fn window_len(&self) -> usize {
        self.window_len
    }
}

/// Fréquence et retard de chaque numéro. draws[0] = tirage le plus récent.
pub fn compute_stats(draws: &[Draw]) -> Vec<NumberStats> {
    let mut stats: Vec<NumberStats> = (1..=MAX_NUMBER)
        .map(|n| NumberStats {
            number: n,
            frequency: 0,
            gap: draws.len() as u32,
        })
        .collect();

    for (i, draw) in draws.iter().enumerate() {
        for &n in &draw.numbers {
            let idx = n.wrapping_sub(1) as usize;
            if idx < stats.len() {
                if stats[idx].frequency == 0 {
                    stats[idx].gap = i as u32;
                }
                stats[idx].frequency += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(id: u32, numbers: [u8; 6]) -> Draw {
        Draw { draw_id: id, numbers }
    }

    #[test]
    fn test_counts() {
        let draws = vec![
            draw(2, [1, 2, 3, 4, 5, 6]),
            draw(1, [1, 2, 3, 7, 8, 9]),
        ];
        let table = FrequencyTable::from_window(&draws);
        assert_eq!(table.count(1), 2);
        assert_eq!(table.count(7), 1);
        assert_eq!(table.count(45), 0);
        assert_eq!(table.count(0), 0);
        assert_eq!(table.count(46), 0);
        assert_eq!(table.window_len(), 2);
    }

    #[test]
    fn test_ranking_by_frequency_then_first_seen() {
        // Ordre chronologique du parcours : tirage 1 puis tirage 2
        let draws = vec![
            draw(2, [40, 10, 11, 12, 13, 14]),
            draw(1, [30, 20, 10, 15, 16, 17]),
        ];
        let table = FrequencyTable::from_window(&draws);
        let ranking = table.ranking();
        assert_eq!(ranking[0], 10);
        assert_eq!(&ranking[1..6], &[30, 20, 15, 16, 17]);
        assert_eq!(&ranking[6..], &[40, 11, 12, 13, 14]);
    }

    #[test]
    fn test_padded_ranking_covers_all_numbers() {
        let draws = vec![draw(1, [45, 44, 1, 2, 3, 4])];
        let table = FrequencyTable::from_window(&draws);
        let pool = table.padded_ranking();
        assert_eq!(pool.len(), 45);
        assert_eq!(&pool[..6], &[45, 44, 1, 2, 3, 4]);
        assert_eq!(pool[6], 5);
        let mut sorted = pool.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, (1..=45).collect::<Vec<u8>>());
    }

    #[test]
    fn test_empty_window() {
        let table = FrequencyTable::from_window(&[]);
        assert!(table.ranking().is_empty());
        assert_eq!(table.padded_ranking(), (1..=45).collect::<Vec<u8>>());
    }

    #[test]
    fn test_compute_stats_gap() {
        let draws = vec![
            draw(3, [1, 2, 3, 4, 5, 6]),
            draw(2, [7, 8, 9, 10, 11, 12]),
            draw(1, [1, 8, 13, 14, 15, 16]),
        ];
        let stats = compute_stats(&draws);
        assert_eq!(stats.len(), 45);
        assert_eq!(stats[0].frequency, 2);
        assert_eq!(stats[0].gap, 0);
        assert_eq!(stats[7].frequency, 2);
        assert_eq!(stats[7].gap, 1);
        assert_eq!(stats[12].gap, 2);
        assert_eq!(stats[44].frequency, 0);
        assert_eq!(stats[44].gap, 3);
    }
}
