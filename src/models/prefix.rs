//! Address families and the family-agnostic [`Prefix`].

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Ipv4Prefix, Ipv6Prefix};
use crate::error::{CidrError, Field};
use crate::text::StringTokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Address width in bits, which is also the longest valid prefix.
    pub fn max_len(self) -> u8 {
        match self {
            Family::V4 => super::ipv4::MAX_LENGTH,
            Family::V6 => super::ipv6::MAX_LENGTH,
        }
    }

    /// Guess the family of a textual address. Only IPv6 text contains ':'.
    pub fn detect(addr: &str) -> Family {
        if addr.contains(':') {
            Family::V6
        } else {
            Family::V4
        }
    }

    pub(crate) fn address_field(self) -> Field {
        match self {
            Family::V4 => Field::Ipv4Address,
            Family::V6 => Field::Ipv6Address,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// A decoded IPv4 or IPv6 prefix.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum Prefix {
    V4(Ipv4Prefix),
    V6(Ipv6Prefix),
}

impl Prefix {
    pub fn family(&self) -> Family {
        match self {
            Prefix::V4(_) => Family::V4,
            Prefix::V6(_) => Family::V6,
        }
    }

    pub fn len(&self) -> u8 {
        match self {
            Prefix::V4(p) => p.len(),
            Prefix::V6(p) => p.len(),
        }
    }

    /// True for a `/0` prefix, which covers the whole address space.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validate(&self) -> Result<(), CidrError> {
        match self {
            Prefix::V4(p) => p.validate(),
            Prefix::V6(p) => p.validate(),
        }
    }
}

impl From<Ipv4Prefix> for Prefix {
    fn from(p: Ipv4Prefix) -> Self {
        Prefix::V4(p)
    }
}

impl From<Ipv6Prefix> for Prefix {
    fn from(p: Ipv6Prefix) -> Self {
        Prefix::V6(p)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Prefix::V4(p) => fmt::Display::fmt(p, f),
            Prefix::V6(p) => fmt::Display::fmt(p, f),
        }
    }
}

/// Parse `address/len` text. The result is decoded and validated.
impl FromStr for Prefix {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = StringTokenizer::new(s, '/').iter().collect();
        // the tokenizer drops a trailing empty token, so check for it here
        if tokens.len() != 2 || s.ends_with('/') {
            log::warn!("Prefix '{}' is not in address/length form", s);
            return Err(CidrError::invalid(Field::Prefix, s));
        }

        let prefix = crate::decode_prefix(
            Family::detect(tokens[0]),
            Some(tokens[0]),
            Some(tokens[1]),
        )?;
        prefix.validate()?;
        Ok(prefix)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::from_str(&s).map_err(de::Error::custom)
    }
}
