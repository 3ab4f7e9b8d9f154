//! Check-in identifiers and the generators that allocate them.

use crate::{UuidError, UuidResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Identifier of a single refill check-in, always in canonical hyphenated lowercase form.
///
/// # Construction
/// - An [`IdGenerator`] allocates new identifiers.
/// - [`CheckinId::parse`] validates an externally supplied identifier.
///
/// # Display format
/// `CheckinId` always displays as `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` in lowercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CheckinId(Uuid);

impl CheckinId {
    /// Wraps an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Validates and parses an identifier that must already be in canonical form.
    ///
    /// Uppercase, simple (unhyphenated), braced and URN forms are rejected rather than
    /// normalised, so that one record never answers to two different strings.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not canonical.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if !Self::is_canonical(input) {
            return Err(UuidError::InvalidInput(format!(
                "check-in id must be a lowercase hyphenated UUID, got: '{}'",
                input
            )));
        }
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| UuidError::InvalidInput(format!("invalid check-in id '{}': {}", input, e)))
    }

    /// Returns the inner `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns true if `input` is a lowercase hyphenated UUID.
    ///
    /// This is a purely syntactic check: 36 bytes, hyphens at offsets 8, 13, 18 and 23, and
    /// `0-9` / `a-f` everywhere else.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 36
            && input.bytes().enumerate().all(|(i, b)| match i {
                8 | 13 | 18 | 23 => b == b'-',
                _ => matches!(b, b'0'..=b'9' | b'a'..=b'f'),
            })
    }
}

impl fmt::Display for CheckinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for CheckinId {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckinId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CheckinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CheckinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CheckinId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Source of new check-in identifiers.
///
/// Record construction takes this as an injected capability instead of calling a global
/// generator.
pub trait IdGenerator: Send + Sync {
    /// Allocates the next identifier.
    fn next_id(&self) -> CheckinId;
}

/// Allocates random RFC 4122 version 4 identifiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> CheckinId {
        CheckinId(Uuid::new_v4())
    }
}

/// Allocates deterministic identifiers from a counter.
///
/// The first identifier is `00000000-0000-4000-8000-000000000001`, the next ends in `...002`,
/// and so on. The version and variant nibbles match a v4 UUID so the output passes the same
/// validation as random identifiers.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    const TEMPLATE: u128 = 0x0000_0000_0000_4000_8000_0000_0000_0000;
    const COUNTER_MASK: u128 = 0xffff_ffff_ffff;

    /// Creates a generator whose first identifier ends in `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> CheckinId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        CheckinId(Uuid::from_u128(Self::TEMPLATE | (u128::from(n) & Self::COUNTER_MASK)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_canonical_v4() {
        let id = RandomIdGenerator.next_id();
        let rendered = id.to_string();

        assert!(CheckinId::is_canonical(&rendered));
        assert_eq!(id.uuid().get_version_num(), 4);
    }

    #[test]
    fn random_ids_differ() {
        let generator = RandomIdGenerator;
        assert_ne!(generator.next_id(), generator.next_id());
    }

    #[test]
    fn sequential_ids_count_up_from_one() {
        let generator = SequentialIdGenerator::default();

        assert_eq!(
            generator.next_id().to_string(),
            "00000000-0000-4000-8000-000000000001"
        );
        assert_eq!(
            generator.next_id().to_string(),
            "00000000-0000-4000-8000-000000000002"
        );
    }

    #[test]
    fn sequential_ids_honour_start() {
        let generator = SequentialIdGenerator::starting_at(0xabc);
        assert_eq!(
            generator.next_id().to_string(),
            "00000000-0000-4000-8000-000000000abc"
        );
    }

    #[test]
    fn parse_accepts_canonical() {
        let canonical = "550e8400-e29b-41d4-a716-446655440000";
        let id = CheckinId::parse(canonical).unwrap();

        assert_eq!(id.to_string(), canonical);
    }

    #[test]
    fn parse_rejects_simple_form() {
        let result = CheckinId::parse("550e8400e29b41d4a716446655440000");

        match result {
            Err(UuidError::InvalidInput(msg)) => {
                assert!(msg.contains("lowercase hyphenated UUID"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn parse_rejects_uppercase() {
        assert!(CheckinId::parse("550E8400-E29B-41D4-A716-446655440000").is_err());
    }

    #[test]
    fn parse_rejects_misplaced_hyphens() {
        assert!(CheckinId::parse("550e840-0e29b-41d4-a716-446655440000").is_err());
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(CheckinId::parse("").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: CheckinId = "00000000-0000-4000-8000-000000000001".parse().unwrap();
        assert_eq!(parsed, SequentialIdGenerator::default().next_id());
    }

    #[test]
    fn serde_uses_canonical_string() {
        let id = SequentialIdGenerator::default().next_id();
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, "\"00000000-0000-4000-8000-000000000001\"");
        let back: CheckinId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_non_canonical() {
        let result: Result<CheckinId, _> = serde_json::from_str("\"not-an-id\"");
        assert!(result.is_err());
    }
}
