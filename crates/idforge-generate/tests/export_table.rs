use std::fs;
use std::path::PathBuf;

use idforge_core::{BatchRecord, EmotionCategory, EmotionRecord, Identifier, Tabular};
use idforge_generate::errors::ExportError;
use idforge_generate::output::{CsvOptions, csv_string, export_csv, export_json, json_string};
use idforge_generate::{GenerateOptions, GenerationEngine};

fn emotion_record(index: u32, emotion: &str, category: EmotionCategory) -> BatchRecord {
    BatchRecord {
        index,
        key: (index - 1).to_string(),
        identifier: Identifier::Emotion(EmotionRecord {
            emotion: emotion.to_string(),
            category,
        }),
    }
}

#[test]
fn csv_matches_expected_bytes() {
    let records = vec![emotion_record(1, "Happy", EmotionCategory::Happy)];
    let headers = vec![
        "index".to_string(),
        "emotion".to_string(),
        "category".to_string(),
    ];

    let content = csv_string(&records, Some(&headers)).expect("serialize csv");
    assert_eq!(content, "index,emotion,category\n1,Happy,happy");
}

#[test]
fn csv_defaults_headers_to_record_fields() {
    let records = vec![emotion_record(1, "Gloomy", EmotionCategory::Sad)];

    let content = csv_string(&records, None).expect("serialize csv");
    assert_eq!(content, "index,key,emotion,category\n1,0,Gloomy,sad");
}

struct NoteRecord {
    index: u32,
    note: String,
}

impl Tabular for NoteRecord {
    fn field_names(&self) -> &'static [&'static str] {
        &["index", "note"]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "index" => Some(self.index.to_string()),
            "note" => Some(self.note.clone()),
            _ => None,
        }
    }
}

#[test]
fn csv_quotes_cells_with_commas_and_quotes() {
    let records = vec![
        NoteRecord {
            index: 1,
            note: "a,b".to_string(),
        },
        NoteRecord {
            index: 2,
            note: "say \"hi\"".to_string(),
        },
    ];

    let content = csv_string(&records, None).expect("serialize csv");
    assert_eq!(content, "index,note\n1,\"a,b\"\n2,\"say \"\"hi\"\"\"");
}

#[test]
fn csv_fills_unknown_headers_with_empty_cells() {
    let records = vec![emotion_record(1, "Happy", EmotionCategory::Happy)];
    let headers = vec!["index".to_string(), "mood".to_string()];

    let content = csv_string(&records, Some(&headers)).expect("serialize csv");
    assert_eq!(content, "index,mood\n1,");
}

#[test]
fn csv_of_no_records_is_an_error() {
    let records: Vec<BatchRecord> = Vec::new();
    let result = csv_string(&records, None);
    assert!(matches!(result, Err(ExportError::EmptyData)));
}

#[test]
fn json_of_empty_array_is_legal() {
    let records: Vec<BatchRecord> = Vec::new();
    let content = json_string(&records).expect("serialize json");
    assert_eq!(content, "[]");
}

#[test]
fn json_is_two_space_indented() {
    let records = vec![emotion_record(1, "Happy", EmotionCategory::Happy)];
    let content = json_string(&records).expect("serialize json");

    let expected = r#"[
  {
    "index": 1,
    "key": "0",
    "emotion": "Happy",
    "category": "happy"
  }
]"#;
    assert_eq!(content, expected);
}

#[test]
fn export_files_normalize_filenames() {
    let out_dir = temp_out_dir("normalize");
    let records = vec![emotion_record(1, "Happy", EmotionCategory::Happy)];

    let options = CsvOptions {
        filename: Some("emotions".to_string()),
        headers: None,
    };
    let path = export_csv(&out_dir, &records, &options).expect("export csv");
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("idforge_emotions.csv")
    );

    let options = CsvOptions {
        filename: Some("emotions.csv".to_string()),
        headers: None,
    };
    let path = export_csv(&out_dir, &records, &options).expect("export csv");
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("emotions.csv")
    );

    let path = export_json(&out_dir, &records, Some("emotions")).expect("export json");
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("idforge_emotions.json")
    );
}

#[test]
fn exported_files_round_trip_a_generated_batch() {
    let out_dir = temp_out_dir("round_trip");
    let engine = GenerationEngine::new();
    let options = GenerateOptions {
        count: 4,
        seed: Some(8),
        params: None,
    };
    let batch = engine.generate("imei", &options).expect("generate batch");

    let csv_path = export_csv(&out_dir, batch.records(), &CsvOptions::default()).expect("csv");
    let csv_content = fs::read_to_string(&csv_path).expect("read csv");
    let mut lines = csv_content.lines();
    assert_eq!(lines.next(), Some("index,key,imei,tac,fac,snr,cd"));
    assert_eq!(lines.count(), 4);

    let json_path = export_json(&out_dir, batch.records(), None).expect("json");
    let json_content = fs::read_to_string(&json_path).expect("read json");
    let parsed: Vec<BatchRecord> = serde_json::from_str(&json_content).expect("parse json");
    assert_eq!(parsed, batch.records());
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("idforge_export_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}
