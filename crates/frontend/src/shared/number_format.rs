//! Number formatting for cards and tables.

/// Insert `separator` every three digits of the integer part.
///
/// ```
/// use frontend::shared::number_format::group_digits;
/// assert_eq!(group_digits("-1234567.5", ','), "-1,234,567.5");
/// ```
pub fn group_digits(formatted: &str, separator: char) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (unsigned, None),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    let grouped: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Count with en-US thousands separators, e.g. `3,051`
pub fn format_thousands(value: u32) -> String {
    group_digits(&value.to_string(), ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(447), "447");
        assert_eq!(format_thousands(3051), "3,051");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(u32::MAX), "4,294,967,295");
    }

    #[test]
    fn test_group_digits_with_decimals() {
        assert_eq!(group_digits("1234.567", ','), "1,234.567");
        assert_eq!(group_digits("999.9", ','), "999.9");
    }

    #[test]
    fn test_group_digits_keeps_sign_out_of_groups() {
        assert_eq!(group_digits("-123", ','), "-123");
        assert_eq!(group_digits("-123456", ' '), "-123 456");
    }
}
