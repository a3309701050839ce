//! Decoding of prefix sub-fields from text.
//!
//! - [`address`] - address text of either family
//! - [`length`] - prefix length text

mod address;
mod length;

pub use address::{parse_address, parse_ipv4_address, parse_ipv6_address};
pub use length::parse_length;
