use super::Felt;
use serde::{de::Visitor, Deserialize, Serialize};

impl Serialize for Felt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // "0x" prefix and at most 64 digits
        let mut buf = [0u8; 2 + 64];
        let s = self.as_hex_str(&mut buf);
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Felt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FeltVisitor;

        impl<'de> Visitor<'de> for FeltVisitor {
            type Value = Felt;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a hex string of up to 64 digits with an optional '0x' prefix")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Felt::from_hex_str(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(FeltVisitor)
    }
}
