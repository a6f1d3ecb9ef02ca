use rand::{Rng, RngCore};
use serde_json::Value;

use idforge_core::record::IMEI_FIELDS;
use idforge_core::{Identifier, ImeiRecord};

use crate::checksum::luhn_check_digit;
use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry};

/// Type Allocation Codes sampled for the first 8 digits.
pub const TAC_CODES: &[&str] = &[
    "35328406", "35209006", "35875505", "35328805", "35404906", "35875405", "35328306", "35875305",
    "35404806", "35209106",
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(ImeiGenerator));
}

struct ImeiGenerator;

impl Generator for ImeiGenerator {
    fn id(&self) -> &'static str {
        "imei"
    }

    fn field_names(&self) -> &'static [&'static str] {
        IMEI_FIELDS
    }

    fn generate(
        &self,
        _params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<Identifier, GenerationError> {
        let tac = TAC_CODES[rng.random_range(0..TAC_CODES.len())];
        let fac = format!("{:02}", rng.random_range(0..100u32));
        let snr = format!("{:06}", rng.random_range(0..1_000_000u32));

        let cd = luhn_check_digit(&format!("{tac}{fac}{snr}"))?;

        Ok(Identifier::Imei(ImeiRecord {
            imei: format!("{tac}{fac}{snr}{cd}"),
            tac: tac.to_string(),
            fac,
            snr,
            cd: cd.to_string(),
        }))
    }
}
