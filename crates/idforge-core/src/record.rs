use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// UUID version tags supported by the uuid generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidVersion {
    V1,
    V3,
    V4,
    V5,
    V6,
    V7,
}

impl UuidVersion {
    pub const ALL: [UuidVersion; 6] = [
        UuidVersion::V1,
        UuidVersion::V3,
        UuidVersion::V4,
        UuidVersion::V5,
        UuidVersion::V6,
        UuidVersion::V7,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            UuidVersion::V1 => "v1",
            UuidVersion::V3 => "v3",
            UuidVersion::V4 => "v4",
            UuidVersion::V5 => "v5",
            UuidVersion::V6 => "v6",
            UuidVersion::V7 => "v7",
        }
    }

    /// Human-readable description used by listings and help output.
    pub fn label(&self) -> &'static str {
        match self {
            UuidVersion::V1 => "UUID v1 (timestamp + node)",
            UuidVersion::V3 => "UUID v3 (namespace + name MD5)",
            UuidVersion::V4 => "UUID v4 (random)",
            UuidVersion::V5 => "UUID v5 (namespace + name SHA-1)",
            UuidVersion::V6 => "UUID v6 (reordered timestamp + node)",
            UuidVersion::V7 => "UUID v7 (timestamp + random)",
        }
    }

    /// Numeric value of the version nibble in the canonical representation.
    pub fn number(&self) -> u8 {
        match self {
            UuidVersion::V1 => 1,
            UuidVersion::V3 => 3,
            UuidVersion::V4 => 4,
            UuidVersion::V5 => 5,
            UuidVersion::V6 => 6,
            UuidVersion::V7 => 7,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|version| version.tag() == tag)
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for UuidVersion {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_tag(value).ok_or_else(|| Error::InvalidVersion(value.to_string()))
    }
}

/// Emotion word categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Happy,
    Sad,
    Angry,
    Scared,
    Confused,
}

impl EmotionCategory {
    pub const ALL: [EmotionCategory; 5] = [
        EmotionCategory::Happy,
        EmotionCategory::Sad,
        EmotionCategory::Angry,
        EmotionCategory::Scared,
        EmotionCategory::Confused,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            EmotionCategory::Happy => "happy",
            EmotionCategory::Sad => "sad",
            EmotionCategory::Angry => "angry",
            EmotionCategory::Scared => "scared",
            EmotionCategory::Confused => "confused",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.tag() == tag)
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EmotionCategory {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_tag(value).ok_or_else(|| Error::InvalidCategory(value.to_string()))
    }
}

/// A generated UUID with the version that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidRecord {
    pub uuid: String,
    pub version: UuidVersion,
}

/// A generated VIN split into its three sections.
///
/// Invariant: `vin == wmi + vds + vis`, 17 characters total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinRecord {
    pub vin: String,
    pub wmi: String,
    pub vds: String,
    pub vis: String,
}

/// A generated IMEI split into its four segments.
///
/// Invariant: `imei == tac + fac + snr + cd`, 15 digits, `cd` is the Luhn
/// check digit of the 14-digit prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImeiRecord {
    pub imei: String,
    pub tac: String,
    pub fac: String,
    pub snr: String,
    pub cd: String,
}

/// A generated emotion word and the category it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionRecord {
    pub emotion: String,
    pub category: EmotionCategory,
}

pub const UUID_FIELDS: &[&str] = &["uuid", "version"];
pub const VIN_FIELDS: &[&str] = &["vin", "wmi", "vds", "vis"];
pub const IMEI_FIELDS: &[&str] = &["imei", "tac", "fac", "snr", "cd"];
pub const EMOTION_FIELDS: &[&str] = &["emotion", "category"];

const UUID_RECORD_FIELDS: &[&str] = &["index", "key", "uuid", "version"];
const VIN_RECORD_FIELDS: &[&str] = &["index", "key", "vin", "wmi", "vds", "vis"];
const IMEI_RECORD_FIELDS: &[&str] = &["index", "key", "imei", "tac", "fac", "snr", "cd"];
const EMOTION_RECORD_FIELDS: &[&str] = &["index", "key", "emotion", "category"];

/// One generated identifier of any supported kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Uuid(UuidRecord),
    Vin(VinRecord),
    Imei(ImeiRecord),
    Emotion(EmotionRecord),
}

impl Identifier {
    /// The primary value: the string a user would copy.
    pub fn value(&self) -> &str {
        match self {
            Identifier::Uuid(record) => &record.uuid,
            Identifier::Vin(record) => &record.vin,
            Identifier::Imei(record) => &record.imei,
            Identifier::Emotion(record) => &record.emotion,
        }
    }

    /// Field names of this identifier kind, in declaration order.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Identifier::Uuid(_) => UUID_FIELDS,
            Identifier::Vin(_) => VIN_FIELDS,
            Identifier::Imei(_) => IMEI_FIELDS,
            Identifier::Emotion(_) => EMOTION_FIELDS,
        }
    }

    /// Look up one field as a display string.
    pub fn field(&self, name: &str) -> Option<String> {
        match self {
            Identifier::Uuid(record) => match name {
                "uuid" => Some(record.uuid.clone()),
                "version" => Some(record.version.tag().to_string()),
                _ => None,
            },
            Identifier::Vin(record) => match name {
                "vin" => Some(record.vin.clone()),
                "wmi" => Some(record.wmi.clone()),
                "vds" => Some(record.vds.clone()),
                "vis" => Some(record.vis.clone()),
                _ => None,
            },
            Identifier::Imei(record) => match name {
                "imei" => Some(record.imei.clone()),
                "tac" => Some(record.tac.clone()),
                "fac" => Some(record.fac.clone()),
                "snr" => Some(record.snr.clone()),
                "cd" => Some(record.cd.clone()),
                _ => None,
            },
            Identifier::Emotion(record) => match name {
                "emotion" => Some(record.emotion.clone()),
                "category" => Some(record.category.tag().to_string()),
                _ => None,
            },
        }
    }
}

/// One row of a generated batch.
///
/// `index` is the 1-based position, `key` the stringified 0-based position.
/// Both are assigned by the batch engine, never by a generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub index: u32,
    pub key: String,
    #[serde(flatten)]
    pub identifier: Identifier,
}

/// Ordered by-name cell access for tabular export.
pub trait Tabular {
    fn field_names(&self) -> &'static [&'static str];
    fn field(&self, name: &str) -> Option<String>;
}

impl Tabular for BatchRecord {
    fn field_names(&self) -> &'static [&'static str] {
        match self.identifier {
            Identifier::Uuid(_) => UUID_RECORD_FIELDS,
            Identifier::Vin(_) => VIN_RECORD_FIELDS,
            Identifier::Imei(_) => IMEI_RECORD_FIELDS,
            Identifier::Emotion(_) => EMOTION_RECORD_FIELDS,
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "index" => Some(self.index.to_string()),
            "key" => Some(self.key.clone()),
            _ => self.identifier.field(name),
        }
    }
}
