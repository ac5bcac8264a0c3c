//! Numeric input parsing helpers.

use anyhow::Result;

/// Parse a decimal string into an `i32`.
///
/// The parse error is propagated as-is; callers decide how to surface it.
pub fn parse_number(input: &str) -> Result<i32> {
    let data: i32 = input.parse()?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_decimals() {
        assert_eq!(parse_number("42").unwrap(), 42);
        assert_eq!(parse_number("-7").unwrap(), -7);
        assert_eq!(parse_number("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert!(parse_number("not a number").is_err());
        assert!(parse_number("").is_err());
        assert!(parse_number("4.2").is_err());
    }
}
