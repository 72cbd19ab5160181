//! Identifier batch generator.
//!
//! Produces a deterministic mix of every [`IdentifierType`], a configurable
//! fraction of which is corrupted so that the extended rule profile rejects
//! it.  Uncorrupted identifiers pass both profiles.

pub mod identifiers;

use gs1id_core::{IdentifierType, RequestError, ValidationRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use identifiers::{corrupt, gen_identifier};

/// Configuration for the identifier generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of identifiers to generate.
    pub count: usize,
    /// Fraction of identifiers to corrupt (clamped to 0.0-1.0).
    pub corrupt_fraction: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 1 000 identifiers
    Small,
    /// 10 000 identifiers
    Medium,
    /// 100 000 identifiers
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let count = match self {
            SizeTier::Small => 1_000,
            SizeTier::Medium => 10_000,
            SizeTier::Large => 100_000,
        };
        GeneratorConfig {
            seed,
            count,
            corrupt_fraction: 0.2,
        }
    }
}

/// One generated identifier and whether it was corrupted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIdentifier {
    /// The type the value was generated for.
    pub identifier_type: IdentifierType,
    /// The identifier text.
    pub value: String,
    /// `true` if the value was deliberately broken after generation.
    pub corrupted: bool,
}

impl GeneratedIdentifier {
    /// Builds the validation request for this identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::EmptyValue`] if the value is empty, which the
    /// generator never produces.
    pub fn to_request(&self) -> Result<ValidationRequest, RequestError> {
        ValidationRequest::new(self.value.clone(), self.identifier_type)
    }
}

/// Generates `config.count` identifiers, cycling through every type.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_identifiers(config: &GeneratorConfig) -> Vec<GeneratedIdentifier> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let fraction = config.corrupt_fraction.clamp(0.0, 1.0);
    (0..config.count)
        .map(|i| {
            let identifier_type = IdentifierType::ALL[i % IdentifierType::ALL.len()];
            let mut value = gen_identifier(&mut rng, identifier_type);
            let corrupted = rng.gen_bool(fraction);
            if corrupted {
                value = corrupt(&mut rng, identifier_type, &value);
            }
            GeneratedIdentifier {
                identifier_type,
                value,
                corrupted,
            }
        })
        .collect()
}
