//! Duration field type tokens
//!
//! A [`DurationFieldType`] identifies a calendrical unit and nothing more.
//! Tokens are `Copy`, compare by ordinal, and are shared freely.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque identifier of a duration unit
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DurationFieldType {
    ordinal: u8,
    name: &'static str,
}

impl DurationFieldType {
    pub const ERAS: Self = Self::new(1, "eras");
    pub const CENTURIES: Self = Self::new(2, "centuries");
    pub const WEEKYEARS: Self = Self::new(3, "weekyears");
    pub const YEARS: Self = Self::new(4, "years");
    pub const MONTHS: Self = Self::new(5, "months");
    pub const WEEKS: Self = Self::new(6, "weeks");
    pub const DAYS: Self = Self::new(7, "days");
    pub const HALFDAYS: Self = Self::new(8, "halfdays");
    pub const HOURS: Self = Self::new(9, "hours");
    pub const MINUTES: Self = Self::new(10, "minutes");
    pub const SECONDS: Self = Self::new(11, "seconds");
    pub const MILLIS: Self = Self::new(12, "millis");

    const ALL: [Self; 12] = [
        Self::ERAS,
        Self::CENTURIES,
        Self::WEEKYEARS,
        Self::YEARS,
        Self::MONTHS,
        Self::WEEKS,
        Self::DAYS,
        Self::HALFDAYS,
        Self::HOURS,
        Self::MINUTES,
        Self::SECONDS,
        Self::MILLIS,
    ];

    const fn new(ordinal: u8, name: &'static str) -> Self {
        Self { ordinal, name }
    }

    /// All standard types, largest unit first
    pub fn all() -> &'static [DurationFieldType] {
        &Self::ALL
    }

    /// Look up a standard type by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    /// Stable 32-bit hash, one bit per standard type
    pub fn hash_code(&self) -> i32 {
        1i32 << self.ordinal
    }
}

impl fmt::Debug for DurationFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DurationFieldType({})", self.name)
    }
}

impl fmt::Display for DurationFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for DurationFieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for DurationFieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown duration field type: {}", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(DurationFieldType::MONTHS, DurationFieldType::MONTHS);
        assert_ne!(DurationFieldType::MONTHS, DurationFieldType::YEARS);
        assert_eq!(DurationFieldType::SECONDS.name(), "seconds");
        assert_eq!(format!("{}", DurationFieldType::HALFDAYS), "halfdays");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(DurationFieldType::from_name("Months"), Some(DurationFieldType::MONTHS));
        assert_eq!(DurationFieldType::from_name(" millis "), Some(DurationFieldType::MILLIS));
        assert_eq!(DurationFieldType::from_name("fortnights"), None);
    }

    #[test]
    fn test_hash_codes_distinct() {
        let mut seen = std::collections::HashSet::new();
        for t in DurationFieldType::all() {
            assert!(seen.insert(t.hash_code()), "duplicate hash for {}", t);
        }
        assert_eq!(DurationFieldType::ERAS.hash_code(), 2);
    }

    #[test]
    fn test_serde_as_name() {
        let json = serde_json::to_string(&DurationFieldType::WEEKS).unwrap();
        assert_eq!(json, "\"weeks\"");
        let back: DurationFieldType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DurationFieldType::WEEKS);
        assert!(serde_json::from_str::<DurationFieldType>("\"lunar\"").is_err());
    }
}
