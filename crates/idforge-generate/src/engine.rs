use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use idforge_core::BatchRecord;

use crate::errors::GenerationError;
use crate::generators::GeneratorRegistry;

/// Smallest batch the engine will produce.
pub const MIN_BATCH: i64 = 1;
/// Largest batch the engine will produce.
pub const MAX_BATCH: i64 = 100;

/// Clamp a requested count into the supported batch range.
pub fn clamp_count(count: i64) -> usize {
    count.clamp(MIN_BATCH, MAX_BATCH) as usize
}

/// Options for one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Requested record count; clamped to `[MIN_BATCH, MAX_BATCH]`.
    pub count: i64,
    /// Seed for reproducible output. `None` draws OS entropy.
    pub seed: Option<u64>,
    /// Generator-specific params, e.g. `{"version": "v7"}`.
    pub params: Option<Value>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: 1,
            seed: None,
            params: None,
        }
    }
}

/// An ordered batch of generated records.
///
/// A generation call always replaces the previous batch wholesale; records
/// are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    records: Vec<BatchRecord>,
}

impl Batch {
    pub fn records(&self) -> &[BatchRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<BatchRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sole record of a single-item batch, `None` otherwise.
    pub fn single(&self) -> Option<&BatchRecord> {
        match self.records.as_slice() {
            [record] => Some(record),
            _ => None,
        }
    }

    /// Plain identifier values in batch order, ready to newline-join.
    pub fn values(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.identifier.value())
            .collect()
    }
}

/// Entry point for producing identifier batches.
pub struct GenerationEngine {
    registry: GeneratorRegistry,
}

impl GenerationEngine {
    pub fn new() -> Self {
        Self {
            registry: GeneratorRegistry::new(),
        }
    }

    pub fn with_registry(registry: GeneratorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Generate a batch with the named generator.
    ///
    /// `index` (1-based) and `key` (stringified 0-based position) are
    /// assigned here; generators only produce identifiers.
    pub fn generate(
        &self,
        generator_id: &str,
        options: &GenerateOptions,
    ) -> Result<Batch, GenerationError> {
        let generator = self
            .registry
            .generator(generator_id)
            .ok_or_else(|| GenerationError::UnknownGenerator(generator_id.to_string()))?;

        let count = clamp_count(options.count);
        let mut rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        let mut records = Vec::with_capacity(count);
        for position in 0..count {
            let identifier = generator.generate(options.params.as_ref(), &mut rng)?;
            records.push(BatchRecord {
                index: position as u32 + 1,
                key: position.to_string(),
                identifier,
            });
        }

        info!(
            generator = generator_id,
            count,
            seed = options.seed,
            "batch generated"
        );

        Ok(Batch { records })
    }
}

impl Default for GenerationEngine {
    fn default() -> Self {
        Self::new()
    }
}
