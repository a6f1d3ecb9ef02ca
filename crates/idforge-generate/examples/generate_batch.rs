use std::env;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use idforge_generate::output::{CsvOptions, export_csv, export_json};
use idforge_generate::{GenerateOptions, GenerationEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let generator_id = args.next().unwrap_or_else(|| "vin".to_string());
    let count: i64 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(5);

    let engine = GenerationEngine::new();
    let options = GenerateOptions {
        count,
        seed: None,
        params: Some(json!({})),
    };

    let batch = engine.generate(&generator_id, &options)?;
    for value in batch.values() {
        println!("{value}");
    }

    let out_dir = env::temp_dir();
    let csv_path = export_csv(&out_dir, batch.records(), &CsvOptions::default())?;
    let json_path = export_json(&out_dir, batch.records(), None)?;
    println!("csv={}", csv_path.display());
    println!("json={}", json_path.display());
    Ok(())
}
