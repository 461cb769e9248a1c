use crate::config::NumericParsePolicy;

/// Parse a non-negative whole number typed into the form.
///
/// `Err` carries nothing: the caller knows which field it asked about.
pub fn parse_count(text: &str, policy: NumericParsePolicy) -> Result<Option<u32>, ()> {
    match policy {
        NumericParsePolicy::Reject => text.trim().parse::<u32>().map(Some).map_err(|_| ()),
        NumericParsePolicy::Lenient => Ok(leading_integer(text)),
    }
}

/// Price stays text; under `Reject` it must still read as a non-negative amount.
pub fn check_price(text: &str, policy: NumericParsePolicy) -> Result<(), ()> {
    match policy {
        NumericParsePolicy::Reject => match text.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(()),
            _ => Err(()),
        },
        NumericParsePolicy::Lenient => Ok(()),
    }
}

pub fn price_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}

// "45abc" -> 45, "abc" -> None, "-3" -> None
fn leading_integer(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_requires_whole_number() {
        assert_eq!(parse_count("45", NumericParsePolicy::Reject), Ok(Some(45)));
        assert_eq!(parse_count(" 120 ", NumericParsePolicy::Reject), Ok(Some(120)));
        assert_eq!(parse_count("abc", NumericParsePolicy::Reject), Err(()));
        assert_eq!(parse_count("4.5", NumericParsePolicy::Reject), Err(()));
        assert_eq!(parse_count("-3", NumericParsePolicy::Reject), Err(()));
    }

    #[test]
    fn lenient_takes_leading_digits() {
        assert_eq!(parse_count("45abc", NumericParsePolicy::Lenient), Ok(Some(45)));
        assert_eq!(parse_count("3.7", NumericParsePolicy::Lenient), Ok(Some(3)));
        assert_eq!(parse_count("abc", NumericParsePolicy::Lenient), Ok(None));
        assert_eq!(parse_count("-3", NumericParsePolicy::Lenient), Ok(None));
    }

    #[test]
    fn price_check() {
        assert!(check_price("80000", NumericParsePolicy::Reject).is_ok());
        assert!(check_price("1250.50", NumericParsePolicy::Reject).is_ok());
        assert!(check_price("cheap", NumericParsePolicy::Reject).is_err());
        assert!(check_price("cheap", NumericParsePolicy::Lenient).is_ok());
        assert_eq!(price_amount("2600"), Some(2600.0));
        assert_eq!(price_amount("n/a"), None);
    }
}
