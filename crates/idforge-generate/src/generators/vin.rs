use rand::{Rng, RngCore};
use serde_json::Value;

use idforge_core::record::VIN_FIELDS;
use idforge_core::{Identifier, VinRecord};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry};

/// World Manufacturer Identifier prefixes sampled for the first 3 positions.
pub const WMI_CODES: &[&str] = &[
    "1HG", "JHM", "2HG", "KMH", "WBA", "WBS", "4F2", "1FT", "1GC", "1GM", "2G1", "3G1", "YV1",
    "WDD", "WAU", "JN1",
];

/// VIN alphabet: digits and uppercase letters without I, O, Q.
pub const VIN_CHARSET: &[u8] = b"0123456789ABCDEFGHJKLMNPRSTUVWXYZ";

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(VinGenerator));
}

struct VinGenerator;

impl Generator for VinGenerator {
    fn id(&self) -> &'static str {
        "vin"
    }

    fn field_names(&self) -> &'static [&'static str] {
        VIN_FIELDS
    }

    fn generate(
        &self,
        _params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Identifier, GenerationError> {
        let wmi = WMI_CODES[rng.random_range(0..WMI_CODES.len())];
        let vds = random_vin_chars(6, rng);
        let vis = random_vin_chars(8, rng);

        Ok(Identifier::Vin(VinRecord {
            vin: format!("{wmi}{vds}{vis}"),
            wmi: wmi.to_string(),
            vds,
            vis,
        }))
    }
}

fn random_vin_chars(len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .map(|_| char::from(VIN_CHARSET[rng.random_range(0..VIN_CHARSET.len())]))
        .collect()
}
