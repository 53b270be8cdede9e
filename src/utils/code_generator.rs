//! Short code generation.
//!
//! Generators are pure: they never look at the store. Uniqueness is enforced
//! by the store's compare-and-insert, and the shorten service retries on
//! collision.

use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;
use rand::distr::Alphanumeric;

/// Bitcoin base58 alphabet (no `0`, `O`, `I`, `l`).
const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Smallest id that encodes to six base58 digits (58^5).
const BASE58_MIN_ID: u64 = 656_356_768;

/// Exclusive upper bound for base58 ids (2^63); encodes to at most 11 digits.
const BASE58_MAX_ID: u64 = 1 << 63;

pub const MIN_CODE_LENGTH: usize = 6;
pub const MAX_CODE_LENGTH: usize = 11;

/// Codes that would shadow fixed routes. Never issued.
const RESERVED_CODES: &[&str] = &["health", "shorten", "api", "admin", "stats", "static"];

/// Produces candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Code generation strategy, selected with `CODE_STRATEGY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStrategy {
    /// Random 63-bit id encoded as base58 (6-11 characters).
    Base58,
    /// Fixed-length random `[0-9A-Za-z]` string.
    Alphanumeric,
}

impl FromStr for CodeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base58" => Ok(CodeStrategy::Base58),
            "alphanumeric" | "alnum" => Ok(CodeStrategy::Alphanumeric),
            other => Err(format!(
                "unknown code strategy '{}', expected 'base58' or 'alphanumeric'",
                other
            )),
        }
    }
}

/// Random id generator with base58 output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base58Generator;

impl CodeGenerator for Base58Generator {
    fn generate(&self) -> String {
        let id = rand::rng().random_range(BASE58_MIN_ID..BASE58_MAX_ID);
        encode_base58(id)
    }
}

/// Fixed-length alphanumeric generator.
#[derive(Debug, Clone, Copy)]
pub struct AlphanumericGenerator {
    length: usize,
}

impl AlphanumericGenerator {
    /// Creates a generator; `length` is clamped to the 6-11 range.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl CodeGenerator for AlphanumericGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

/// Builds the generator for a configured strategy.
pub fn build_generator(strategy: CodeStrategy, length: usize) -> Arc<dyn CodeGenerator> {
    match strategy {
        CodeStrategy::Base58 => Arc::new(Base58Generator),
        CodeStrategy::Alphanumeric => Arc::new(AlphanumericGenerator::new(length)),
    }
}

/// Encodes an integer with the base58 alphabet, most significant digit first.
pub fn encode_base58(mut value: u64) -> String {
    if value == 0 {
        return (BASE58_ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::with_capacity(MAX_CODE_LENGTH);
    while value > 0 {
        digits.push(BASE58_ALPHABET[(value % 58) as usize]);
        value /= 58;
    }

    digits.iter().rev().map(|&b| b as char).collect()
}

/// Returns true if the code collides with a fixed route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.iter().any(|r| r.eq_ignore_ascii_case(code))
}

/// Cheap syntactic check applied before any store lookup.
pub fn is_well_formed(code: &str) -> bool {
    !code.is_empty() && code.len() <= 64 && code.chars().all(|c| c.is_ascii_alphanumeric())
}
