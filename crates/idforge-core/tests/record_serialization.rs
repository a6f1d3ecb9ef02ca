use idforge_core::{
    BatchRecord, EmotionCategory, EmotionRecord, Identifier, ImeiRecord, Tabular, UuidRecord,
    UuidVersion, VinRecord,
};

#[test]
fn serializes_uuid_record_flattened() {
    let record = BatchRecord {
        index: 1,
        key: "0".to_string(),
        identifier: Identifier::Uuid(UuidRecord {
            uuid: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            version: UuidVersion::V4,
        }),
    };

    let json = serde_json::to_string_pretty(&record).expect("serialize record");
    let expected = r#"{
  "index": 1,
  "key": "0",
  "uuid": "550e8400-e29b-41d4-a716-446655440000",
  "version": "v4"
}"#;
    assert_eq!(json, expected);
}

#[test]
fn deserializes_emotion_record() {
    let json = r#"{"index":3,"key":"2","emotion":"Happy","category":"happy"}"#;
    let record: BatchRecord = serde_json::from_str(json).expect("deserialize record");

    assert_eq!(record.index, 3);
    assert_eq!(record.key, "2");
    assert_eq!(
        record.identifier,
        Identifier::Emotion(EmotionRecord {
            emotion: "Happy".to_string(),
            category: EmotionCategory::Happy,
        })
    );
}

#[test]
fn version_tags_round_trip() {
    for version in UuidVersion::ALL {
        assert_eq!(UuidVersion::from_tag(version.tag()), Some(version));
        assert_eq!(version.tag().parse::<UuidVersion>().ok(), Some(version));
    }
    assert!(UuidVersion::from_tag("v2").is_none());
    assert!("v9".parse::<UuidVersion>().is_err());
}

#[test]
fn category_tags_round_trip() {
    for category in EmotionCategory::ALL {
        assert_eq!(EmotionCategory::from_tag(category.tag()), Some(category));
    }
    assert!(EmotionCategory::from_tag("bored").is_none());
    assert!("all".parse::<EmotionCategory>().is_err());
}

#[test]
fn tabular_fields_follow_declaration_order() {
    let record = BatchRecord {
        index: 2,
        key: "1".to_string(),
        identifier: Identifier::Vin(VinRecord {
            vin: "1HGABCDEF12345678".to_string(),
            wmi: "1HG".to_string(),
            vds: "ABCDEF".to_string(),
            vis: "12345678".to_string(),
        }),
    };

    assert_eq!(
        record.field_names(),
        &["index", "key", "vin", "wmi", "vds", "vis"]
    );
    assert_eq!(record.field("index").as_deref(), Some("2"));
    assert_eq!(record.field("key").as_deref(), Some("1"));
    assert_eq!(record.field("wmi").as_deref(), Some("1HG"));
    assert_eq!(record.field("color"), None);
}

#[test]
fn imei_record_field_lookup() {
    let record = BatchRecord {
        index: 1,
        key: "0".to_string(),
        identifier: Identifier::Imei(ImeiRecord {
            imei: "353284061234563".to_string(),
            tac: "35328406".to_string(),
            fac: "12".to_string(),
            snr: "345678".to_string(),
            cd: "3".to_string(),
        }),
    };

    assert_eq!(record.identifier.value(), "353284061234563");
    assert_eq!(record.field("cd").as_deref(), Some("3"));
    assert_eq!(
        record.field_names(),
        &["index", "key", "imei", "tac", "fac", "snr", "cd"]
    );
}
