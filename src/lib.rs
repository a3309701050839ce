//! CIDR prefix decoding and validation.
//!
//! A prefix is decoded from separate address and length text, then validated
//! by checking that none of its suffix (host) bits are set:
//!
//! ```
//! use cidr_validate::{decode_prefix, validate_prefix, ErrorKind, Family};
//!
//! let ok = decode_prefix(Family::V4, Some("192.0.2.0"), Some("24")).unwrap();
//! assert!(validate_prefix(&ok).is_ok());
//!
//! let bad = decode_prefix(Family::V4, Some("192.0.2.1"), Some("24")).unwrap();
//! assert_eq!(validate_prefix(&bad).unwrap_err().kind(), ErrorKind::SuffixBitsSet);
//! ```

pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod text;

use std::net::IpAddr;

pub use error::{CidrError, ErrorKind, Field};
pub use models::{Family, Ipv4Prefix, Ipv6Prefix, Prefix};

/// Decode address and length text into a [`Prefix`] of the given family.
///
/// The two fields are decoded independently; the suffix bits are not checked
/// here, see [`validate_prefix`].
pub fn decode_prefix(
    family: Family,
    address_text: Option<&str>,
    length_text: Option<&str>,
) -> Result<Prefix, CidrError> {
    let addr = decode::parse_address(family, address_text)?;
    let len = decode::parse_length(length_text, family.max_len())?;

    let prefix = match addr {
        IpAddr::V4(addr) => Prefix::V4(Ipv4Prefix::new(addr, len)?),
        IpAddr::V6(addr) => Prefix::V6(Ipv6Prefix::new(addr, len)?),
    };
    log::debug!("Decoded {} prefix {}", family, prefix);
    Ok(prefix)
}

/// Check that the prefix has no suffix bits set.
pub fn validate_prefix(prefix: &Prefix) -> Result<(), CidrError> {
    prefix.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_prefix_v4() {
        let p = decode_prefix(Family::V4, Some("192.0.2.0"), Some("24")).unwrap();
        assert_eq!(p.to_string(), "192.0.2.0/24");
        assert!(validate_prefix(&p).is_ok());
    }

    #[test]
    fn test_decode_prefix_errors() {
        let kind = |a: Option<&str>, l: Option<&str>| {
            decode_prefix(Family::V4, a, l).unwrap_err().kind()
        };
        assert_eq!(kind(None, Some("24")), ErrorKind::MissingInput);
        assert_eq!(kind(Some("192.0.2.0"), None), ErrorKind::MissingInput);
        assert_eq!(kind(Some("192.0.2"), Some("24")), ErrorKind::InvalidFormat);
        assert_eq!(kind(Some("192.0.2.0"), Some("x")), ErrorKind::InvalidFormat);
        assert_eq!(kind(Some("192.0.2.0"), Some("33")), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_decode_prefix_family_mismatch() {
        let err = decode_prefix(Family::V4, Some("2001:db8::"), Some("32")).unwrap_err();
        assert_eq!(
            err,
            CidrError::InvalidFormat {
                field: Field::Ipv4Address,
                text: "2001:db8::".to_string()
            }
        );
    }

    #[test]
    fn test_decode_prefix_v6_uses_128_bound() {
        let p = decode_prefix(Family::V6, Some("2001:db8::1"), Some("128")).unwrap();
        assert!(validate_prefix(&p).is_ok());
        let err = decode_prefix(Family::V6, Some("2001:db8::"), Some("129")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let p = decode_prefix(Family::V6, Some("2001:db8::"), Some("32")).unwrap();
        assert_eq!(validate_prefix(&p), validate_prefix(&p));

        let p = decode_prefix(Family::V6, Some("2001:db8::1"), Some("32")).unwrap();
        assert_eq!(validate_prefix(&p), validate_prefix(&p));
    }
}
