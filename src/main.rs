use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use heavymetal_index::config::{EngineConfig, OutputFormat};
use heavymetal_index::logging::init_tracing;
use heavymetal_index::{compute_indices, IndicesResult, IngestError, StationSample};

/// Score water samples for heavy-metal pollution.
#[derive(Debug, Parser)]
#[command(name = "heavymetal-index", version, about)]
struct Cli {
    /// JSON array of station samples; reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Output layout, overrides the config file.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// TOML config file.
    #[arg(long, env = "HEAVYMETAL_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct AssessedSample<'a> {
    station: &'a str,
    latitude: f64,
    longitude: f64,
    sampled_on: NaiveDate,
    result: IndicesResult,
}

fn read_batch(input: Option<&PathBuf>) -> Result<Vec<StationSample>, IngestError> {
    let raw = match input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|source| IngestError::Read {
                path: path.clone(),
                source,
            })?
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(IngestError::Stdin)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn print_csv(rows: &[AssessedSample<'_>]) {
    println!("station,sampled_on,latitude,longitude,hpi,hei,pli,eri,risk_level,exceeds_standards");
    for row in rows {
        let r = &row.result;
        println!(
            "{},{},{:.6},{:.6},{:.2},{:.2},{:.2},{:.2},{},{}",
            csv_field(row.station),
            row.sampled_on,
            row.latitude,
            row.longitude,
            r.hpi,
            r.hei,
            r.pli,
            r.eri,
            r.risk_level,
            csv_field(&r.exceeds_standards.join("; ")),
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    init_tracing(config.log_filter.as_deref());
    let format = cli.format.unwrap_or(config.format);

    let batch = read_batch(cli.input.as_ref())?;
    let total = batch.len();

    let mut assessed = Vec::with_capacity(total);
    let mut rejected = 0usize;
    for entry in &batch {
        if let Err(e) = entry.metals.validate() {
            warn!(station = %entry.station, error = %e, "sample rejected");
            eprintln!("{}: {}", entry.station, e);
            rejected += 1;
            continue;
        }
        assessed.push(AssessedSample {
            station: &entry.station,
            latitude: entry.latitude,
            longitude: entry.longitude,
            sampled_on: entry.sampled_on,
            result: compute_indices(&entry.metals),
        });
    }
    info!(total, rejected, "batch assessed");

    match format {
        OutputFormat::Csv => print_csv(&assessed),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assessed)?),
    }

    if rejected > 0 {
        return Err(IngestError::Rejected { rejected, total }.into());
    }
    Ok(())
}
