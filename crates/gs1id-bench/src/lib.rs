//! Identifier generator and benchmark utilities for gs1id.
//!
//! This crate provides deterministic generation of well-formed and corrupted
//! GS1 identifiers for benchmarking and testing `gs1id-core`.

pub mod generator;

pub use generator::{GeneratedIdentifier, GeneratorConfig, SizeTier, generate_identifiers};
