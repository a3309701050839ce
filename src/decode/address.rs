//! Textual address decoding.
//!
//! Accepts the standard presentation formats only: dotted-quad for IPv4
//! (no leading zeros in octets), colon-hex for IPv6 with `::` compression and
//! an optional trailing dotted-quad. Zone indices are rejected.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::CidrError;
use crate::models::Family;

/// Decode the address text of the given family.
///
/// `None` means the caller had no text at all and yields
/// [`CidrError::MissingInput`]; malformed text yields
/// [`CidrError::InvalidFormat`].
pub fn parse_address(family: Family, text: Option<&str>) -> Result<IpAddr, CidrError> {
    match family {
        Family::V4 => parse_ipv4_address(text).map(IpAddr::V4),
        Family::V6 => parse_ipv6_address(text).map(IpAddr::V6),
    }
}

pub fn parse_ipv4_address(text: Option<&str>) -> Result<Ipv4Addr, CidrError> {
    let text = require(Family::V4, text)?;
    Ipv4Addr::from_str(text).map_err(|_| invalid(Family::V4, text))
}

pub fn parse_ipv6_address(text: Option<&str>) -> Result<Ipv6Addr, CidrError> {
    let text = require(Family::V6, text)?;
    Ipv6Addr::from_str(text).map_err(|_| invalid(Family::V6, text))
}

fn require(family: Family, text: Option<&str>) -> Result<&str, CidrError> {
    text.ok_or_else(|| {
        log::warn!("Null string received, can't decode {} prefix", family);
        CidrError::MissingInput {
            field: family.address_field(),
        }
    })
}

fn invalid(family: Family, text: &str) -> CidrError {
    log::warn!("Invalid {} prefix '{}'", family, text);
    CidrError::invalid(family.address_field(), text)
}
