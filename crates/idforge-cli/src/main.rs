use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde_json::json;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use idforge_core::{BatchRecord, EmotionCategory, Identifier, Tabular, UuidVersion};
use idforge_generate::output::{CsvOptions, export_csv, export_json};
use idforge_generate::{Batch, ExportError, GenerateOptions, GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

#[derive(Parser, Debug)]
#[command(name = "idforge", version, about = "Synthetic identifier generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate UUIDs (versions 1, 3, 4, 5, 6, 7).
    Uuid(UuidArgs),
    /// Generate Vehicle Identification Numbers.
    Vin(GenerateArgs),
    /// Generate IMEI numbers with a valid Luhn check digit.
    Imei(GenerateArgs),
    /// Generate emotion words.
    Emotion(EmotionArgs),
    /// List the available generators and their fields.
    List,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of identifiers to generate (clamped to 1..=100).
    #[arg(long, short = 'n', default_value_t = 1)]
    count: i64,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Export the batch as CSV to this filename.
    #[arg(long, value_name = "FILE")]
    csv: Option<String>,
    /// Export the batch as JSON to this filename.
    #[arg(long, value_name = "FILE")]
    json: Option<String>,
    /// Directory exported files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct UuidArgs {
    /// UUID version to generate.
    #[arg(long, default_value = "v4")]
    uuid_version: UuidVersion,
    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Args, Debug)]
struct EmotionArgs {
    /// Category filter; "all" draws from every category.
    #[arg(long, default_value = "all")]
    category: String,
    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let engine = GenerationEngine::new();

    let (generator_id, params, headers, args) = match cli.command {
        Command::Uuid(args) => (
            "uuid",
            Some(json!({"version": args.uuid_version.tag()})),
            vec!["index", "uuid", "version"],
            args.generate,
        ),
        Command::Vin(args) => (
            "vin",
            None,
            vec!["index", "vin", "wmi", "vds", "vis"],
            args,
        ),
        Command::Imei(args) => (
            "imei",
            None,
            vec!["index", "imei", "tac", "fac", "snr", "cd"],
            args,
        ),
        Command::Emotion(args) => (
            "emotion",
            Some(json!({"category": args.category})),
            vec!["index", "emotion", "category"],
            args.generate,
        ),
        Command::List => {
            list_generators(&engine);
            return Ok(());
        }
    };

    let options = GenerateOptions {
        count: args.count,
        seed: args.seed,
        params,
    };
    let batch = engine.generate(generator_id, &options)?;

    match batch.single() {
        Some(record) => print_single(record),
        None => print_table(&batch, &headers),
    }

    if let Some(filename) = args.csv {
        let csv_options = CsvOptions {
            filename: Some(filename),
            headers: Some(headers.iter().map(|header| header.to_string()).collect()),
        };
        let path = export_csv(&args.out_dir, batch.records(), &csv_options)?;
        info!(path = %path.display(), "csv exported");
    }

    if let Some(filename) = args.json {
        let path = export_json(&args.out_dir, batch.records(), Some(&filename))?;
        info!(path = %path.display(), "json exported");
    }

    Ok(())
}

fn print_single(record: &BatchRecord) {
    println!("{}", record.identifier.value());
    println!("{}", breakdown(&record.identifier));
}

/// Segment summary shown under a single generated value.
fn breakdown(identifier: &Identifier) -> String {
    match identifier {
        Identifier::Uuid(record) => format!("Version: {}", record.version),
        Identifier::Vin(record) => format!(
            "WMI: {}  VDS: {}  VIS: {}",
            record.wmi, record.vds, record.vis
        ),
        Identifier::Imei(record) => format!(
            "TAC: {}  FAC: {}  SNR: {}  CD: {}",
            record.tac, record.fac, record.snr, record.cd
        ),
        Identifier::Emotion(record) => format!("Category: {}", record.category),
    }
}

fn print_table(batch: &Batch, headers: &[&str]) {
    let rows: Vec<Vec<String>> = batch
        .records()
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|header| record.field(header).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .map(|row| row[column].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    print_row(headers.iter().map(|header| header.to_string()), &widths);
    for row in rows {
        print_row(row.into_iter(), &widths);
    }
}

fn print_row(cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    println!("{}", line.join("  ").trim_end());
}

fn list_generators(engine: &GenerationEngine) {
    for id in engine.registry().ids() {
        let fields = engine
            .registry()
            .generator(id)
            .map(|generator| generator.field_names().join(", "))
            .unwrap_or_default();
        println!("{id}: {fields}");
    }
    println!();
    println!("uuid versions:");
    for version in UuidVersion::ALL {
        println!("  {} - {}", version.tag(), version.label());
    }
    println!("emotion categories: all, {}", category_tags().join(", "));
}

fn category_tags() -> Vec<&'static str> {
    EmotionCategory::ALL
        .into_iter()
        .map(|category| category.tag())
        .collect()
}
