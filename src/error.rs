//! Error types shared by the decoders and validators.
//!
//! Callers should branch on [`CidrError::kind`], the messages are for humans.

use std::fmt;
use thiserror::Error;

use crate::models::Family;

/// The input field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Ipv4Address,
    Ipv6Address,
    PrefixLength,
    Prefix,
    LogLevel,
    LogOutput,
    Ia5String,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Field::Ipv4Address => "IPv4 address",
            Field::Ipv6Address => "IPv6 address",
            Field::PrefixLength => "prefix length",
            Field::Prefix => "prefix",
            Field::LogLevel => "log level",
            Field::LogOutput => "log output",
            Field::Ia5String => "IA5String",
        };
        f.write_str(name)
    }
}

/// Plain error classification, without the diagnostic payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingInput,
    InvalidFormat,
    OutOfRange,
    SuffixBitsSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    /// No text was supplied at all.
    #[error("Null string received, can't decode {field}")]
    MissingInput { field: Field },

    /// Text was supplied but is not in the expected grammar.
    #[error("Invalid {field} '{text}'")]
    InvalidFormat { field: Field, text: String },

    #[error("{field} ({value}) is out of bounds (0-{max})")]
    OutOfRange { field: Field, value: u64, max: u64 },

    /// Address and length are well formed, but host bits are set.
    #[error("{family} prefix {prefix} has enabled suffix bits")]
    SuffixBitsSet { family: Family, prefix: String },
}

impl CidrError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CidrError::MissingInput { .. } => ErrorKind::MissingInput,
            CidrError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            CidrError::OutOfRange { .. } => ErrorKind::OutOfRange,
            CidrError::SuffixBitsSet { .. } => ErrorKind::SuffixBitsSet,
        }
    }

    pub(crate) fn invalid(field: Field, text: &str) -> Self {
        CidrError::InvalidFormat {
            field,
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let err = CidrError::MissingInput {
            field: Field::PrefixLength,
        };
        assert_eq!(err.kind(), ErrorKind::MissingInput);
        assert_eq!(
            CidrError::invalid(Field::LogLevel, "loud").kind(),
            ErrorKind::InvalidFormat
        );
    }

    #[test]
    fn test_messages_name_field_and_value() {
        let err = CidrError::invalid(Field::Ipv4Address, "1.2.3");
        assert_eq!(err.to_string(), "Invalid IPv4 address '1.2.3'");

        let err = CidrError::OutOfRange {
            field: Field::PrefixLength,
            value: 33,
            max: 32,
        };
        assert_eq!(err.to_string(), "prefix length (33) is out of bounds (0-32)");

        let err = CidrError::SuffixBitsSet {
            family: Family::V6,
            prefix: "2001:db8::1/32".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "IPv6 prefix 2001:db8::1/32 has enabled suffix bits"
        );
    }
}
