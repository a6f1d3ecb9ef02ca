use chrono::Utc;
use rand::{Rng, RngCore};
use serde_json::Value;
use uuid::{Builder, Context, Timestamp, Uuid};

use idforge_core::record::UUID_FIELDS;
use idforge_core::{Identifier, UuidRecord, UuidVersion};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry, str_param};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(UuidGenerator));
}

struct UuidGenerator;

impl Generator for UuidGenerator {
    fn id(&self) -> &'static str {
        "uuid"
    }

    fn field_names(&self) -> &'static [&'static str] {
        UUID_FIELDS
    }

    fn generate(
        &self,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Identifier, GenerationError> {
        // Unknown or missing version tags fall back to v4, so generation
        // never fails on the version switch.
        let version = str_param(params, "version", "uuid")?
            .and_then(UuidVersion::from_tag)
            .unwrap_or(UuidVersion::V4);

        let uuid = build_uuid(version, rng);
        Ok(Identifier::Uuid(UuidRecord {
            uuid: uuid.to_string(),
            version,
        }))
    }
}

fn build_uuid(version: UuidVersion, rng: &mut dyn RngCore) -> Uuid {
    match version {
        UuidVersion::V1 => {
            let node_id: [u8; 6] = random_bytes(rng);
            Uuid::new_v1(gregorian_timestamp(rng), &node_id)
        }
        UuidVersion::V3 => Uuid::new_v3(&Uuid::NAMESPACE_URL, hashed_name(rng).as_bytes()),
        UuidVersion::V4 => Builder::from_random_bytes(random_bytes(rng)).into_uuid(),
        UuidVersion::V5 => Uuid::new_v5(&Uuid::NAMESPACE_URL, hashed_name(rng).as_bytes()),
        UuidVersion::V6 => {
            let node_id: [u8; 6] = random_bytes(rng);
            Uuid::new_v6(gregorian_timestamp(rng), &node_id)
        }
        UuidVersion::V7 => {
            Builder::from_unix_timestamp_millis(unix_millis(), &random_bytes(rng)).into_uuid()
        }
    }
}

fn gregorian_timestamp(rng: &mut dyn RngCore) -> Timestamp {
    let now = Utc::now();
    let seconds = u64::try_from(now.timestamp()).unwrap_or_default();
    let context = Context::new(rng.random());
    Timestamp::from_unix(&context, seconds, now.timestamp_subsec_nanos())
}

fn unix_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Name input for the namespace-hash versions (v3/v5).
///
/// The name mixes the current clock with a random fractional offset, so
/// nominally deterministic hashes produce a fresh value per call.
fn hashed_name(rng: &mut dyn RngCore) -> String {
    let millis = Utc::now().timestamp_millis();
    format!("https://idforge.dev/{}", millis as f64 - rng.random::<f64>())
}

fn random_bytes<const N: usize>(rng: &mut dyn RngCore) -> [u8; N] {
    let mut bytes = [0u8; N];
    rng.fill_bytes(&mut bytes);
    bytes
}
