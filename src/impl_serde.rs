//!
//! Support for serde implementations
//!
//! Values serialize as the compact hexadecimal string of `{:x}`;
//! deserialization accepts anything [`FromStr`] does, including the
//! whitespace-grouped `Display` layout.

use crate::*;
use serde::{de, ser};


impl ser::Serialize for FixedPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&format_args!("{:x}", self))
    }
}

/// Used by SerDe to construct a FixedPoint
struct FixedPointVisitor;

impl<'de> de::Visitor<'de> for FixedPointVisitor {
    type Value = FixedPoint;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string of hexadecimal digits")
    }

    fn visit_str<E>(self, value: &str) -> Result<FixedPoint, E>
    where
        E: de::Error,
    {
        FixedPoint::from_str(value).map_err(|err| E::custom(format_args!("{}", err)))
    }
}

impl<'de> de::Deserialize<'de> for FixedPoint {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_str(FixedPointVisitor)
    }
}
