//! Serde support: identifiers travel as their canonical string

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{UniqueTimestamp, ENCODED_LEN};

impl Serialize for UniqueTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let buf = self.encode();
        let s = std::str::from_utf8(&buf).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

struct UniqueTimestampVisitor;

impl<'de> Visitor<'de> for UniqueTimestampVisitor {
    type Value = UniqueTimestamp;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a {}-character unique timestamp string", ENCODED_LEN)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        UniqueTimestamp::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for UniqueTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(UniqueTimestampVisitor)
    }
}
