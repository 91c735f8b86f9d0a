use anyhow::Result;
use lotto_db::models::parse_numbers;
use lotto_db::rusqlite::Connection;
use lotto_engine::config::RecommenderConfig;

use crate::display::display_notice;
use crate::{build_strategy, cmd_recommend, prompt, StrategyName};

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    Generate(StrategyName),
    Notice,
    Quit,
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "fixes" | "fixed" => Some(InteractiveCommand::Generate(StrategyName::Fixed)),
        "2" | "tendance" | "pattern" => Some(InteractiveCommand::Generate(StrategyName::Pattern)),
        "3" | "filtre" | "stat" => Some(InteractiveCommand::Generate(StrategyName::Stat)),
        "4" | "hasard" | "random" => Some(InteractiveCommand::Generate(StrategyName::Random)),
        "5" | "avertissement" | "notice" => Some(InteractiveCommand::Notice),
        "6" | "quitter" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn display_menu() {
    println!();
    println!("── Mode de génération ──");
    println!("  1. fixes     Numéros fixes / exclus");
    println!("  2. tendance  Tendance des 5 derniers tirages");
    println!("  3. filtre    Filtre statistique (impairs, hauts, somme)");
    println!("  4. hasard    Tirage uniforme");
    println!("  5. avertissement");
    println!("  6. quitter");
    println!();
}

/// Redemande tant que la saisie n'est pas une liste valide.
fn prompt_list(msg: &str, label: &str) -> Result<String> {
    loop {
        let input = prompt(msg)?;
        match parse_numbers(&input, label) {
            Ok(_) => return Ok(input),
            Err(e) => println!("❌ {}", e),
        }
    }
}

pub fn run_interactive(conn: &Connection, config: &RecommenderConfig) -> Result<()> {
    println!("🎯 Recommandeur de grilles Lotto 6/45");

    loop {
        display_menu();
        let input = prompt("Choix : ")?;
        let Some(command) = parse_command(&input) else {
            println!("Choix inconnu : '{}'", input);
            continue;
        };

        match command {
            InteractiveCommand::Generate(name) => {
                let (fixed, exclude) = if name == StrategyName::Fixed {
                    (
                        prompt_list("🔒 Numéros fixes (ex: 3,12,21) : ", "Numéros fixes")?,
                        prompt_list("🚫 Numéros exclus (ex: 4,10) : ", "Numéros exclus")?,
                    )
                } else {
                    (String::new(), String::new())
                };
                let kind = build_strategy(conn, config, name, &fixed, &exclude)?;
                if let Err(e) = cmd_recommend(&kind, config.batch_size, None, false) {
                    println!("Erreur : {:#}", e);
                }
            }
            InteractiveCommand::Notice => display_notice(),
            InteractiveCommand::Quit => {
                display_notice();
                return Ok(());
            }
        }
    }
}
