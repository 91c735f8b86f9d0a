use comfy_table::{Table, ContentArrangement, presets::UTF8_FULL, Cell, Color};

use crate::import::ImportResult;
use lotto_db::models::{Draw, NumberStats};
use lotto_engine::batch::BatchSummary;
use lotto_engine::frequency::FrequencyTable;

fn format_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

pub fn display_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tirage", "Numéros"]);

    for draw in draws {
        let mut sorted = draw.numbers;
        sorted.sort();
        table.add_row(vec![draw.draw_id.to_string(), format_numbers(&sorted)]);
    }

    println!("{table}");
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Import terminé :");
    println!("  Total lignes lues : {}", result.total_records);
    println!("  Insérés           : {}", result.inserted);
    println!("  Doublons ignorés  : {}", result.skipped);
    if result.errors > 0 {
        println!("  Erreurs           : {}", result.errors);
    }
}

pub fn display_stats(stats: &[NumberStats], table_freq: &FrequencyTable) {
    println!("\n📊 Statistiques sur les {} derniers tirages\n", table_freq.window_len());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rang", "Numéro", "Fréquence", "Retard"]);

    for (rank, &n) in table_freq.padded_ranking().iter().enumerate() {
        let stat = &stats[(n - 1) as usize];
        let rank_cell = if table_freq.count(n) > 0 {
            Cell::new(rank + 1).fg(Color::Green)
        } else {
            Cell::new("—")
        };
        table.add_row(vec![
            rank_cell,
            Cell::new(format!("{:2}", stat.number)),
            Cell::new(stat.frequency),
            Cell::new(stat.gap),
        ]);
    }
    println!("{table}");
}

pub fn display_recommendations(strategy_name: &str, summary: &BatchSummary, seed: u64) {
    println!("\n🎯 Grilles recommandées ({strategy_name}, seed {seed})\n");

    if !summary.sets.is_empty() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["#", "Numéros", "Impairs", "Hauts", "Somme"]);

        for (i, set) in &summary.sets {
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(set.to_string()),
                Cell::new(set.odd_count()),
                Cell::new(set.high_count()),
                Cell::new(set.sum()),
            ]);
        }
        println!("{table}");
    }

    for (i, err) in &summary.failures {
        println!("❌ Grille {} : {}", i + 1, err);
    }
}

pub fn display_notice() {
    println!("\n📌 Avertissement\n");
    println!("1. Le tirage est un jeu de hasard : aucune combinaison ne garantit un gain.");
    println!("2. Les grilles proposées sont des filtres heuristiques sur un tirage uniforme,");
    println!("   pas des prédictions. Elles sont fournies à titre indicatif.");
    println!("3. Chaque tirage est indépendant des précédents.");
    println!("4. Jouez pour le plaisir et fixez un budget adapté à votre situation.");
    println!("5. Toute mise relève de la seule responsabilité du joueur.");
}
