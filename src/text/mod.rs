//! Small text helpers used around the decoders.
//!
//! - [`tokenizer`] - separator-delimited tokens
//! - [`ia5`] - IA5String byte decoding

mod ia5;
mod tokenizer;

pub use ia5::ia5_to_string;
pub use tokenizer::{StringTokenizer, Tokens};
