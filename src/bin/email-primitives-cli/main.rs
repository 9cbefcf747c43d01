mod args;
mod logging;
mod output;

use std::io::{self, BufRead};
use std::path::Path;

#[cfg(not(feature = "with-serde"))]
use anyhow::bail;
use anyhow::{Context, Result};
use email_primitives::{EmailProfile, QualitySummary, RuleTables, rules};

use args::{Cli, Commands};

enum Mode {
    Analyze,
    Canonical,
}

#[cfg(feature = "with-serde")]
fn load_rules(path: &Path) -> Result<RuleTables> {
    RuleTables::from_json_path(path).with_context(|| format!("load rules {}", path.display()))
}

#[cfg(not(feature = "with-serde"))]
fn load_rules(_path: &Path) -> Result<RuleTables> {
    bail!("--rules nécessite la feature 'with-serde'")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    // erreur de config: fatale, une seule fois, avant tout traitement
    let tables = match &cli.rules {
        Some(path) => load_rules(path)?,
        None => RuleTables::default(),
    };
    let tables = rules::install(tables).context("install rule tables")?;

    let (mode, mut emails) = match &cli.cmd {
        Some(Commands::Analyze { emails }) => (Mode::Analyze, emails.clone()),
        Some(Commands::Canonical { emails }) => (Mode::Canonical, emails.clone()),
        None => (Mode::Analyze, Vec::new()),
    };

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            if !line.trim().is_empty() {
                emails.push(line);
            }
        }
    }

    if emails.is_empty() {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    }

    match mode {
        Mode::Canonical => {
            let rows: Vec<Option<String>> = emails
                .iter()
                .map(|email| output::canonical_row(tables, email))
                .collect();
            let lines: Vec<String> = rows
                .iter()
                .map(|row| row.clone().unwrap_or_default())
                .collect();
            output::write_lines(&lines, &cli)?;

            // adresse irrécupérable: ligne vide, sortie 2
            if rows.iter().any(Option::is_none) {
                std::process::exit(2);
            }
        }
        Mode::Analyze => {
            let rows: Vec<EmailProfile> = emails
                .iter()
                .map(|email| {
                    let row = tables.profile(email);
                    #[cfg(feature = "with-tracing")]
                    tracing::debug!(email = %row.masked, quality = %row.quality, "analyzed");
                    row
                })
                .collect();

            output::write_reports(&rows, &cli)?;
            if cli.summary {
                let summary: QualitySummary = rows.iter().map(|row| row.quality).collect();
                output::write_summary(&summary);
            }

            // codes de sortie : 0 OK, 2 invalids, 1 fatal
            if output::any_invalid(&rows) {
                std::process::exit(2);
            }
        }
    }

    Ok(())
}
