//! IA5String (ASCII) decoding.

use crate::error::{CidrError, Field};

/// Copy the bytes of an IA5String into an owned `String`.
///
/// `unused_bits` is set when the encoding declared bits left over in its last
/// byte; such strings are rejected, as are bytes outside 7-bit ASCII.
pub fn ia5_to_string(data: &[u8], unused_bits: bool) -> Result<String, CidrError> {
    let lossy = || String::from_utf8_lossy(data).into_owned();

    if unused_bits {
        log::warn!("IA5String has unused bits.");
        return Err(CidrError::InvalidFormat {
            field: Field::Ia5String,
            text: lossy(),
        });
    }
    if !data.is_ascii() {
        log::warn!("IA5String contains non-ASCII bytes.");
        return Err(CidrError::InvalidFormat {
            field: Field::Ia5String,
            text: lossy(),
        });
    }

    // ASCII is always valid UTF-8
    Ok(data.iter().map(|&b| char::from(b)).collect())
}
