use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use lotto_db::rusqlite::Connection;
use tracing::{info, warn};

use lotto_db::db::insert_draw;
use lotto_db::models::{Draw, PICK_COUNT};

/// Colonne 0 : numéro de tirage, colonnes 1 à 6 : les six numéros.
/// Les colonnes suivantes (bonus, date...) sont ignorées.
fn parse_record(record: &csv::StringRecord) -> Result<Draw> {
    let get = |idx: usize| {
        record
            .get(idx)
            .map(str::trim)
            .with_context(|| format!("Champ manquant à l'index {}", idx))
    };

    let raw_id = get(0)?;
    let draw_id: u32 = raw_id
        .parse()
        .with_context(|| format!("Numéro de tirage invalide : '{}'", raw_id))?;

    let mut numbers = [0u8; PICK_COUNT];
    for (i, slot) in numbers.iter_mut().enumerate() {
        let s = get(i + 1)?;
        *slot = s
            .parse::<u8>()
            .with_context(|| format!("Impossible de parser '{}' (index {})", s, i + 1))?;
    }

    Ok(Draw::new(draw_id, numbers)?)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub total_records: u32,
    pub inserted: u32,
    pub skipped: u32,
    pub errors: u32,
}

pub fn import_csv(conn: &Connection, path: &Path) -> Result<ImportResult> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Impossible d'ouvrir {:?}", path))?;
    import_reader(conn, file)
}

pub fn import_reader<R: Read>(conn: &Connection, input: R) -> Result<ImportResult> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let tx = conn.unchecked_transaction()
        .context("Impossible de démarrer la transaction")?;

    let mut result = ImportResult::default();

    for record_result in reader.records() {
        result.total_records += 1;
        let line = result.total_records;
        match record_result {
            Ok(record) => match parse_record(&record) {
                Ok(draw) => match insert_draw(&tx, &draw) {
                    Ok(true) => result.inserted += 1,
                    Ok(false) => result.skipped += 1,
                    Err(e) => {
                        warn!(line, error = %e, "insertion refusée");
                        result.errors += 1;
                    }
                },
                Err(e) => {
                    warn!(line, error = %e, "ligne invalide");
                    result.errors += 1;
                }
            },
            Err(e) => {
                warn!(line, error = %e, "lecture impossible");
                result.errors += 1;
            }
        }
    }

    tx.commit().context("Échec du commit")?;
    info!(
        total = result.total_records,
        inserted = result.inserted,
        skipped = result.skipped,
        errors = result.errors,
        "import terminé"
    );
    Ok(result)
}
