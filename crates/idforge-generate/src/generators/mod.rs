use std::collections::HashMap;

use rand::RngCore;
use serde_json::Value;

use idforge_core::Identifier;

use crate::errors::GenerationError;

pub mod emotion;
pub mod imei;
pub mod uuid;
pub mod vin;

/// One identifier synthesis strategy.
///
/// Generators are stateless: every call draws from the RNG handed in, so a
/// seeded RNG makes the output reproducible. `index` and `key` bookkeeping
/// belongs to the batch engine, not to generators.
pub trait Generator: Send + Sync {
    /// Stable id used to select the strategy.
    fn id(&self) -> &'static str;

    /// Field names of the records this generator produces, in order.
    fn field_names(&self) -> &'static [&'static str];

    /// Produce one identifier. Total under valid params; malformed params
    /// report `InvalidOptions`.
    fn generate(
        &self,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Identifier, GenerationError>;
}

/// Registry of the built-in identifier generators.
pub struct GeneratorRegistry {
    generators: HashMap<&'static str, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            generators: HashMap::new(),
        };
        uuid::register(&mut registry);
        vin::register(&mut registry);
        imei::register(&mut registry);
        emotion::register(&mut registry);
        registry
    }

    pub fn register_generator(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.id(), generator);
    }

    pub fn generator(&self, id: &str) -> Option<&dyn Generator> {
        self.generators.get(id).map(|generator| generator.as_ref())
    }

    /// Registered ids in stable order.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.generators.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract an optional string param, rejecting non-string values.
pub(crate) fn str_param<'a>(
    params: Option<&'a Value>,
    key: &str,
    ctx: &'static str,
) -> Result<Option<&'a str>, GenerationError> {
    match params.and_then(|params| params.get(key)) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(GenerationError::InvalidOptions(format!(
            "{ctx}: param '{key}' must be a string"
        ))),
    }
}
