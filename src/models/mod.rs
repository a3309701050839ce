//! Prefix value types and suffix-mask validation.
//!
//! - [`Ipv4Prefix`] - IPv4 address with prefix length, 32-bit masks
//! - [`Ipv6Prefix`] - IPv6 address with prefix length, per-word masks
//! - [`Prefix`] and [`Family`] - family-agnostic wrappers

pub mod ipv4;
pub mod ipv6;
mod prefix;

// Re-export public types
pub use ipv4::{be32_suffix_mask, u32_suffix_mask, Ipv4Prefix};
pub use ipv6::{ipv6_suffix_mask, Ipv6Prefix};
pub use prefix::{Family, Prefix};
