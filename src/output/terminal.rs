//! Terminal output utilities.

use colored::Colorize;

use crate::error::CidrError;
use crate::models::Prefix;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Outcome of validating one command-line prefix.
#[derive(Debug)]
pub struct ResultRow {
    pub input: String,
    pub result: Result<Prefix, CidrError>,
}

impl ResultRow {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Render as `status,input,detail` with aligned fields.
    pub fn format(&self) -> String {
        let (status, detail) = match &self.result {
            Ok(prefix) => (
                format_field("ok", 15).green().to_string(),
                format!("{}_{}", prefix.family(), prefix.len()),
            ),
            Err(e) => (
                format_field(format!("{:?}", e.kind()), 15).red().to_string(),
                e.to_string(),
            ),
        };
        format!(
            "{status},{input},{detail}",
            input = format_field(&self.input, 45),
            detail = format_field(detail, 0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_result_row() {
        colored::control::set_override(false);

        let row = ResultRow {
            input: "192.0.2.0/24".to_string(),
            result: "192.0.2.0/24".parse(),
        };
        assert!(row.is_ok());
        assert!(row.format().ends_with(r#""192.0.2.0/24","IPv4_24""#));

        let row = ResultRow {
            input: "192.0.2.1/24".to_string(),
            result: "192.0.2.1/24".parse(),
        };
        assert!(!row.is_ok());
        let line = row.format();
        assert!(line.starts_with(r#""SuffixBitsSet""#));
        assert!(line.ends_with(r#""IPv4 prefix 192.0.2.1/24 has enabled suffix bits""#));
    }
}
