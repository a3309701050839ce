//! IPv4 prefixes and 32-bit suffix masks.
//!
//! Addresses are handled as 32-bit words in network byte order, the same
//! layout the octets have on the wire, so masks are converted with
//! [`u32::to_be`] before being applied.

use std::fmt;
use std::net::Ipv4Addr;

use super::Family;
use crate::error::{CidrError, Field};

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask selecting the suffix (host) bits of a 32-bit number whose prefix is
/// `len` bits long, in host byte order.
///
/// # Examples
/// ```
/// use cidr_validate::models::u32_suffix_mask;
/// assert_eq!(u32_suffix_mask(24), 0x0000_00FF);
/// assert_eq!(u32_suffix_mask(32), 0);
/// ```
pub fn u32_suffix_mask(len: u8) -> u32 {
    // `u32 >> 32` overflows, so a full-length prefix is special-cased.
    if len < MAX_LENGTH {
        u32::MAX >> len
    } else {
        0
    }
}

/// Same as [`u32_suffix_mask`], but in network byte order.
pub fn be32_suffix_mask(len: u8) -> u32 {
    u32_suffix_mask(len).to_be()
}

/// Reinterpret four network-order octets as a word without swapping.
pub(crate) fn be32_word(octets: [u8; 4]) -> u32 {
    u32::from_ne_bytes(octets)
}

/// IPv4 address plus prefix length.
///
/// The length is always within `0..=32`; whether the suffix bits are clear is
/// checked by [`Ipv4Prefix::validate`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Prefix {
    addr: Ipv4Addr,
    len: u8,
}

impl Ipv4Prefix {
    pub fn new(addr: Ipv4Addr, len: u8) -> Result<Ipv4Prefix, CidrError> {
        if len > MAX_LENGTH {
            return Err(CidrError::OutOfRange {
                field: Field::PrefixLength,
                value: len.into(),
                max: MAX_LENGTH.into(),
            });
        }
        Ok(Ipv4Prefix { addr, len })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Suffix mask for this prefix length, in network byte order.
    pub fn suffix_mask(&self) -> u32 {
        be32_suffix_mask(self.len)
    }

    /// Check that no suffix bit of the address is set.
    pub fn validate(&self) -> Result<(), CidrError> {
        if be32_word(self.addr.octets()) & self.suffix_mask() != 0 {
            log::warn!("IPv4 prefix {} has enabled suffix bits.", self);
            return Err(CidrError::SuffixBitsSet {
                family: Family::V4,
                prefix: self.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Ipv4Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}
