mod display;
mod import;
mod interactive;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lotto_db::db::{count_draws, db_path, fetch_last_draws, insert_draw, migrate, open_db};
use lotto_db::history::DrawHistory;
use lotto_db::models::{parse_numbers, Draw, PICK_COUNT};
use lotto_db::rusqlite::Connection;
use lotto_engine::batch::{recommend_par, recommend_seeded, resolve_seed, BatchSummary};
use lotto_engine::config::{load_config, save_config, RecommenderConfig};
use lotto_engine::frequency::{compute_stats, FrequencyTable};
use lotto_engine::strategy::{Strategy, StrategyKind};
use crate::display::{
    display_draws, display_import_summary, display_notice, display_recommendations,
    display_stats,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyName {
    /// Numéros fixes et exclus
    Fixed,
    /// Tendance des derniers tirages
    Pattern,
    /// Filtre impairs / hauts / somme
    Stat,
    /// Tirage uniforme
    Random,
}

#[derive(Parser)]
#[command(name = "lotto", about = "Recommandeur de grilles Lotto 6/45")]
struct Cli {
    /// Fichier de configuration JSON (défaut : valeurs intégrées)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Importer les tirages depuis un fichier CSV
    Import {
        /// Chemin vers le fichier CSV
        #[arg(short, long, default_value = "data/lotto_results.csv")]
        file: PathBuf,
    },

    /// Afficher le chemin de la base de données
    DbPath,

    /// Lister les derniers tirages
    List {
        /// Nombre de tirages à afficher
        #[arg(short, long, default_value = "10")]
        last: u32,
    },

    /// Fréquences et retards sur les derniers tirages
    Stats {
        /// Fenêtre d'analyse (défaut : fenêtre de la stratégie tendance)
        #[arg(short, long)]
        window: Option<u32>,
    },

    /// Recommander des grilles
    Recommend {
        #[arg(short, long, value_enum, default_value = "random")]
        strategy: StrategyName,

        /// Numéros fixes (ex: 3,12,21)
        #[arg(long, default_value = "")]
        fixed: String,

        /// Numéros exclus (ex: 4,10)
        #[arg(long, default_value = "")]
        exclude: String,

        /// Nombre de grilles (défaut : batch_size de la configuration)
        #[arg(short, long)]
        count: Option<usize>,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,

        /// Générer les grilles en parallèle
        #[arg(long)]
        parallel: bool,
    },

    /// Ajouter un tirage manuellement
    Add,

    /// Mode interactif
    Interactive,

    /// Afficher l'avertissement
    Notice,

    /// Écrire la configuration effective dans un fichier JSON
    Config {
        /// Fichier de sortie
        #[arg(short, long, default_value = "lotto.json")]
        output: PathBuf,
    },
}

fn init_tracing() -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn")
            .add_directive("lotto_cli=info".parse()?)
            .add_directive("lotto_engine=info".parse()?),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RecommenderConfig::default(),
    };

    let path = db_path();
    let conn = open_db(&path)?;
    migrate(&conn)?;

    match cli.command {
        Command::Import { file } => cmd_import(&conn, &file),
        Command::DbPath => {
            println!("{}", path.display());
            Ok(())
        }
        Command::List { last } => cmd_list(&conn, last),
        Command::Stats { window } => cmd_stats(&conn, &config, window),
        Command::Recommend {
            strategy,
            fixed,
            exclude,
            count,
            seed,
            parallel,
        } => {
            let kind = build_strategy(&conn, &config, strategy, &fixed, &exclude)?;
            cmd_recommend(&kind, count.unwrap_or(config.batch_size), seed, parallel)
        }
        Command::Add => cmd_add(&conn),
        Command::Interactive => interactive::run_interactive(&conn, &config),
        Command::Notice => {
            display_notice();
            Ok(())
        }
        Command::Config { output } => cmd_config(&config, &output),
    }
}

fn cmd_import(conn: &Connection, file: &PathBuf) -> Result<()> {
    let result = import::import_csv(conn, file)?;
    display_import_summary(&result);
    Ok(())
}

fn cmd_list(conn: &Connection, last: u32) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Base vide. Lancez d'abord : lotto import");
        return Ok(());
    }
    let draws = fetch_last_draws(conn, last)?;
    display_draws(&draws);
    Ok(())
}

fn cmd_stats(conn: &Connection, config: &RecommenderConfig, window: Option<u32>) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Base vide. Lancez d'abord : lotto import");
        return Ok(());
    }
    let window = stats_window(window, config, n);
    let draws = fetch_last_draws(conn, window)?;

    let stats = compute_stats(&draws);
    let table = FrequencyTable::from_window(&draws);
    display_stats(&stats, &table);
    Ok(())
}

/// Fenêtre demandée, sinon celle de la tendance, bornée par la taille de la base.
fn stats_window(window: Option<u32>, config: &RecommenderConfig, available: u32) -> u32 {
    window
        .unwrap_or_else(|| u32::try_from(config.pattern_window).unwrap_or(u32::MAX))
        .min(available)
}

fn cmd_config(config: &RecommenderConfig, output: &Path) -> Result<()> {
    save_config(config, output)?;
    info!(path = %output.display(), "configuration écrite");
    println!("Configuration écrite dans {}", output.display());
    Ok(())
}

/// Construit la stratégie demandée. Les saisies fixes/exclues sont contrôlées
/// ici ; les échecs propres au tirage sont rapportés grille par grille.
pub(crate) fn build_strategy(
    conn: &Connection,
    config: &RecommenderConfig,
    name: StrategyName,
    fixed: &str,
    exclude: &str,
) -> Result<StrategyKind> {
    let kind = match name {
        StrategyName::Fixed => {
            let fixed = parse_numbers(fixed, "Numéros fixes")?;
            let excluded = parse_numbers(exclude, "Numéros exclus")?;
            StrategyKind::fixed_excluded(fixed, excluded)
        }
        StrategyName::Pattern => {
            let draws = conn.last_draws(config.pattern_window)?;
            if draws.is_empty() {
                println!("(Historique vide : tirage uniforme sur 1-45)");
            }
            StrategyKind::pattern_weighted(draws, config)
        }
        StrategyName::Stat => StrategyKind::stat_filter(config),
        StrategyName::Random => StrategyKind::pure_random(),
    };
    Ok(kind)
}

pub(crate) fn cmd_recommend(
    kind: &StrategyKind,
    count: usize,
    seed: Option<u64>,
    parallel: bool,
) -> Result<()> {
    let seed = resolve_seed(seed);
    let results = if parallel {
        recommend_par(kind, count, seed)
    } else {
        recommend_seeded(kind, count, seed)
    };

    let summary = BatchSummary::from_results(results);
    display_recommendations(kind.name(), &summary, seed);
    Ok(())
}

fn cmd_add(conn: &Connection) -> Result<()> {
    println!("Ajout d'un tirage manuellement\n");

    let raw_id = prompt("Numéro du tirage (ex: 1150) : ")?;
    let draw_id: u32 = raw_id
        .parse()
        .with_context(|| format!("Numéro de tirage invalide : '{}'", raw_id))?;

    let numbers = prompt_numbers()?;
    let draw = Draw::new(draw_id, numbers)?;

    println!("\nTirage à insérer :");
    display_draws(&[draw.clone()]);

    let confirm = prompt("\nConfirmer l'insertion ? (o/n) : ")?;
    if confirm.trim().to_lowercase() == "o" {
        let inserted = insert_draw(conn, &draw)?;
        if inserted {
            println!("Tirage inséré avec succès.");
        } else {
            println!("Ce tirage existe déjà (doublon ignoré).");
        }
    } else {
        println!("Insertion annulée.");
    }

    Ok(())
}

pub(crate) fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    if read == 0 {
        bail!("Entrée standard fermée");
    }
    Ok(input.trim().to_string())
}

fn prompt_numbers() -> Result<[u8; PICK_COUNT]> {
    loop {
        let input = prompt("6 numéros (séparés par des virgules, 1-45) : ")?;
        match parse_numbers(&input, "Tirage") {
            Ok(v) if v.len() == PICK_COUNT => {
                let mut arr = [0u8; PICK_COUNT];
                arr.copy_from_slice(&v);
                return Ok(arr);
            }
            Ok(v) => println!("Entrez exactement 6 numéros ({} reçus). Réessayez.", v.len()),
            Err(e) => println!("{}. Réessayez.", e),
        }
    }
}
