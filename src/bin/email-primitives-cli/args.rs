use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "email-primitives-cli", version)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long, global = true)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long, global = true)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human", global = true)]
    pub format: String,

    /// fichier JSON de règles (typos, domaines gratuits/jetables)
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// affiche le résumé valid/fixable/invalid après le rapport
    #[arg(long, global = true)]
    pub summary: bool,

    /// verbosité des logs (-v info, -vv debug, -vvv trace); RUST_LOG prime
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profil complet de chaque adresse
    Analyze { emails: Vec<String> },
    /// Une adresse canonique par ligne (dédoublonnage)
    Canonical { emails: Vec<String> },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}
