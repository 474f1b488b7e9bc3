//! Serde adapter writing `BigUint` as a decimal string.
//!
//! Degrees and hook products overflow every JSON number type long before
//! the enumerations get slow, so they travel as strings.

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<BigUint, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse::<BigUint>().map_err(serde::de::Error::custom)
}
