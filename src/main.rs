// src/main.rs
//
// Calculatrice avancée — point d’entrée terminal
// ----------------------------------------------
// - `eval <EXPR>`  : une évaluation, code de sortie 1 en cas d’erreur
// - `repl`         : session interactive (par défaut)
// - Journal        : RUST_LOG si défini, sinon -v / -vv / -vvv (stderr)

use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use calculatrice_avancee::app::{lancer_repl, Session};
use calculatrice_avancee::noyau::{evaluate_detaille, format_resultat};

/// Titre unique (aide + bannière).
const TITRE_APP: &str = "Calculatrice avancée";

#[derive(Parser, Debug)]
#[command(version, about = TITRE_APP)]
struct Args {
    /// Verbosité du journal (répétable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commande: Option<Commande>,
}

#[derive(Subcommand, Debug)]
enum Commande {
    /// Évalue une expression et affiche le résultat
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Affiche aussi les jetons et la RPN
        #[arg(long)]
        demarche: bool,
    },
    /// Session interactive (historique, mémoire)
    Repl,
}

fn installer_journal(verbose: u8) {
    let defaut = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

fn eval_une(expression: &str, demarche: bool) -> ExitCode {
    match evaluate_detaille(expression) {
        Ok((v, d)) => {
            if demarche {
                println!("jetons : {}", d.jetons);
                println!("rpn    : {}", d.rpn);
            }
            println!("{}", format_resultat(v));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    installer_journal(args.verbose);

    match args.commande.unwrap_or(Commande::Repl) {
        Commande::Eval {
            expression,
            demarche,
        } => Ok(eval_une(&expression, demarche)),
        Commande::Repl => {
            println!("{TITRE_APP} : :quit pour sortir, :historique, :effacer, :c, :mc :ms :m+ :m-");
            println!(":mr colle la mémoire dans l’entrée, la ligne suivante la complète");
            let mut session = Session::new();
            lancer_repl(&mut session)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
