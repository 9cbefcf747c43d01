use anyhow::{Context, Result, bail};

use crate::args::Cli;
use email_primitives::{EmailProfile, EmailQuality, QualitySummary, RuleTables};

pub fn write_reports(rows: &[EmailProfile], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(rows),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

pub fn write_lines(lines: &[String], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = lines.join("\n");
        buf.push('\n');
        write_all_atomically(path, buf.as_bytes())
    } else {
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }
}

/// Canonical form, or `None` when the input stays invalid once standardized.
pub fn canonical_row(tables: &RuleTables, email: &str) -> Option<String> {
    match tables.quality(email) {
        EmailQuality::Invalid => None,
        EmailQuality::Valid | EmailQuality::Fixable => Some(tables.canonical_email(email)),
    }
}

pub fn any_invalid(rows: &[EmailProfile]) -> bool {
    rows.iter().any(|row| !row.valid)
}

/// Sur stderr, pour ne pas polluer un rapport JSON/CSV sur stdout.
pub fn write_summary(summary: &QualitySummary) {
    eprintln!(
        "total={} valid={} fixable={} invalid={}",
        summary.total, summary.valid, summary.fixable, summary.invalid
    );
}

/// Header line, then detail lines (printed indented).
pub fn human_lines(row: &EmailProfile) -> Vec<String> {
    let mut lines = Vec::new();
    match row.quality {
        EmailQuality::Valid => lines.push(format!("[OK]      {}", row.original)),
        quality => lines.push(format!(
            "[{}] {} :: {}",
            quality.as_str().to_ascii_uppercase(),
            row.original,
            row.reasons.join("; ")
        )),
    }

    if row.quality == EmailQuality::Invalid {
        return lines;
    }

    if row.fixed != row.original {
        lines.push(format!("typo fix: {}", row.fixed));
    }
    lines.push(format!(
        "provider: {} ({}), canonical: {}",
        row.provider, row.class, row.canonical
    ));
    if row.name.is_empty() {
        lines.push(format!("masked: {}", row.masked));
    } else {
        lines.push(format!("name: {}, masked: {}", row.name, row.masked));
    }
    lines
}

fn write_human(rows: &[EmailProfile]) -> Result<()> {
    for row in rows {
        for (idx, line) in human_lines(row).iter().enumerate() {
            if idx == 0 {
                println!("{line}");
            } else {
                println!("          {line}");
            }
        }
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[EmailProfile], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[EmailProfile], _: &Cli) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[EmailProfile], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for row in rows {
            let line = serde_json::to_string(row)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for row in rows {
            println!("{}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[EmailProfile], _: &Cli) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
const CSV_HEADER: [&str; 16] = [
    "original",
    "valid",
    "quality",
    "reasons",
    "username",
    "domain",
    "domain_name",
    "tld",
    "fixed",
    "standardized",
    "canonical",
    "has_plus",
    "class",
    "provider",
    "name",
    "masked",
];

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[EmailProfile], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(CSV_HEADER)?;
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(CSV_HEADER)?;
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[EmailProfile], _: &Cli) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

#[cfg(feature = "with-csv")]
fn csv_record(row: &EmailProfile) -> Vec<String> {
    vec![
        row.original.clone(),
        row.valid.to_string(),
        row.quality.to_string(),
        row.reasons.join("|"),
        row.username.clone(),
        row.domain.clone(),
        row.domain_name.clone(),
        row.tld.clone(),
        row.fixed.clone(),
        row.standardized.clone(),
        row.canonical.clone(),
        row.has_plus.to_string(),
        row.class.to_string(),
        row.provider.clone(),
        row.name.clone(),
        row.masked.clone(),
    ]
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
