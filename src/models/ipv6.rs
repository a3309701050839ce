//! IPv6 prefixes.
//!
//! A 128-bit address is masked as four 32-bit words, each in network byte
//! order, reusing the IPv4 word masks for the word the prefix ends in.

use std::fmt;
use std::net::Ipv6Addr;

use super::ipv4::{be32_suffix_mask, be32_word};
use super::Family;
use crate::error::{CidrError, Field};

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH: u8 = 128;

const ALL_SUFFIX: u32 = 0xFFFF_FFFF;

/// Per-word suffix mask for a 128-bit prefix of `len` bits.
///
/// Words before the one containing the prefix boundary are all prefix (0),
/// words after it are all suffix.
pub fn ipv6_suffix_mask(len: u8) -> [u32; 4] {
    if len < 32 {
        [be32_suffix_mask(len), ALL_SUFFIX, ALL_SUFFIX, ALL_SUFFIX]
    } else if len < 64 {
        [0, be32_suffix_mask(len - 32), ALL_SUFFIX, ALL_SUFFIX]
    } else if len < 96 {
        [0, 0, be32_suffix_mask(len - 64), ALL_SUFFIX]
    } else {
        // len == 128 ends up as be32_suffix_mask(32) == 0
        [0, 0, 0, be32_suffix_mask(len - 96)]
    }
}

/// Split an address into its four network-order words.
pub(crate) fn be32_words(addr: &Ipv6Addr) -> [u32; 4] {
    let o = addr.octets();
    [
        be32_word([o[0], o[1], o[2], o[3]]),
        be32_word([o[4], o[5], o[6], o[7]]),
        be32_word([o[8], o[9], o[10], o[11]]),
        be32_word([o[12], o[13], o[14], o[15]]),
    ]
}

/// IPv6 address plus prefix length (`0..=128`).
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv6Prefix {
    addr: Ipv6Addr,
    len: u8,
}

impl Ipv6Prefix {
    pub fn new(addr: Ipv6Addr, len: u8) -> Result<Ipv6Prefix, CidrError> {
        if len > MAX_LENGTH {
            return Err(CidrError::OutOfRange {
                field: Field::PrefixLength,
                value: len.into(),
                max: MAX_LENGTH.into(),
            });
        }
        Ok(Ipv6Prefix { addr, len })
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn suffix_mask(&self) -> [u32; 4] {
        ipv6_suffix_mask(self.len)
    }

    /// Check that no suffix bit of the address is set, in any word.
    pub fn validate(&self) -> Result<(), CidrError> {
        let words = be32_words(&self.addr);
        let mask = self.suffix_mask();

        if words.iter().zip(mask.iter()).any(|(w, m)| w & m != 0) {
            log::warn!("IPv6 prefix {} has enabled suffix bits.", self);
            return Err(CidrError::SuffixBitsSet {
                family: Family::V6,
                prefix: self.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Ipv6Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::str::FromStr;

    fn prefix(addr: &str, len: u8) -> Ipv6Prefix {
        Ipv6Prefix::new(Ipv6Addr::from_str(addr).unwrap(), len).unwrap()
    }

    fn mask_bytes(len: u8) -> Vec<u8> {
        ipv6_suffix_mask(len)
            .iter()
            .flat_map(|w| w.to_ne_bytes())
            .collect()
    }

    #[test]
    fn test_suffix_mask_word_boundaries() {
        assert_eq!(ipv6_suffix_mask(0), [ALL_SUFFIX; 4]);
        assert_eq!(ipv6_suffix_mask(32), [0, ALL_SUFFIX, ALL_SUFFIX, ALL_SUFFIX]);
        assert_eq!(ipv6_suffix_mask(64), [0, 0, ALL_SUFFIX, ALL_SUFFIX]);
        assert_eq!(ipv6_suffix_mask(96), [0, 0, 0, ALL_SUFFIX]);
        assert_eq!(ipv6_suffix_mask(128), [0, 0, 0, 0]);
    }

    #[test]
    fn test_suffix_mask_inside_words() {
        let mut expected = vec![0xFFu8; 16];
        expected[0] = 0x7F;
        assert_eq!(mask_bytes(1), expected);

        let mut expected = vec![0xFFu8; 16];
        expected[..6].copy_from_slice(&[0, 0, 0, 0, 0, 0x0F]);
        assert_eq!(mask_bytes(44), expected);

        let mut expected = vec![0u8; 16];
        expected[15] = 0x01;
        assert_eq!(mask_bytes(127), expected);
    }

    #[test]
    fn test_validate() {
        assert!(prefix("2001:db8::", 32).validate().is_ok());
        assert!(prefix("::", 0).validate().is_ok());
        assert!(prefix("fe80::", 10).validate().is_ok());

        let err = prefix("2001:db8::1", 32).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SuffixBitsSet);
        assert_eq!(
            err.to_string(),
            "IPv6 prefix 2001:db8::1/32 has enabled suffix bits"
        );
    }

    #[test]
    fn test_validate_around_word_boundaries() {
        // last bit of word 0 set
        let p = "2001:db9::";
        assert!(prefix(p, 31).validate().is_err());
        assert!(prefix(p, 32).validate().is_ok());
        assert!(prefix(p, 33).validate().is_ok());

        // last bit of word 1 set
        let p = "2001:db8:0:1::";
        assert!(prefix(p, 63).validate().is_err());
        assert!(prefix(p, 64).validate().is_ok());
        assert!(prefix(p, 65).validate().is_ok());

        // last bit of word 2 set
        let p = "2001:db8:0:0:0:1::";
        assert!(prefix(p, 95).validate().is_err());
        assert!(prefix(p, 96).validate().is_ok());
        assert!(prefix(p, 97).validate().is_ok());

        // first bit of word 3 set
        let p = "::8000:0";
        assert!(prefix(p, 96).validate().is_err());
        assert!(prefix(p, 97).validate().is_ok());
    }

    #[test]
    fn test_validate_host_route() {
        let all = "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff";
        assert!(prefix(all, 128).validate().is_ok());
        assert!(prefix(all, 127).validate().is_err());
        assert!(prefix("2001:db8::1", 128).validate().is_ok());
    }

    #[test]
    fn test_new_rejects_long_length() {
        let err = Ipv6Prefix::new(Ipv6Addr::UNSPECIFIED, 129).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_is_empty() {
        assert!(prefix("::", 0).is_empty());
        assert!(!prefix("2001:db8::", 32).is_empty());
    }
}
