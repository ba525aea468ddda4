//! Splitting time strings into raw hour and minute components.
//!
//! Both grammars only extract the numbers. Folding of minute
//! overflow is left to [`Time::new`](crate::Time::new).

use crate::TimeError;

const MERIDIEM_MARKERS: [&str; 4] = ["a.m.", "p.m.", "am", "pm"];

/// Parse a non-negative decimal integer.
///
/// Only ASCII digits are accepted: no sign, no whitespace.
fn parse_component(field: &str, text: &str) -> Result<i64, TimeError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::invalid(format!(
            "{text:?}: {field:?} is not a number"
        )));
    }
    field
        .parse::<i64>()
        .map_err(|_| TimeError::invalid(format!("{text:?}: {field:?} is too large")))
}

/// `H:M` and nothing else.
pub(crate) fn strict(text: &str) -> Result<(i64, i64), TimeError> {
    match text.split_once(':') {
        Some((hours, minutes)) if !minutes.contains(':') => Ok((
            parse_component(hours, text)?,
            parse_component(minutes, text)?,
        )),
        _ => Err(TimeError::invalid(format!("{text:?} is not of the form HH:MM"))),
    }
}

/// `H:M`, `H:M:S`, each optionally followed by a meridiem marker,
/// or a bare `H` when a marker is present.
///
/// The marker is recognized but never applied to the hour.
pub(crate) fn loose(text: &str) -> Result<(i64, i64), TimeError> {
    let trimmed = text.trim();
    let (body, has_meridiem) = match strip_meridiem(trimmed) {
        Some(body) => (body, true),
        None => (trimmed, false),
    };
    let fields = body.split(':').collect::<Vec<_>>();
    match fields.as_slice() {
        [hours] if has_meridiem => Ok((parse_component(hours, text)?, 0)),
        [hours, minutes] => Ok((
            parse_component(hours, text)?,
            parse_component(minutes, text)?,
        )),
        [hours, minutes, seconds] => {
            parse_component(seconds, text)?;
            Ok((
                parse_component(hours, text)?,
                parse_component(minutes, text)?,
            ))
        }
        _ => Err(TimeError::invalid(format!("{text:?} is not a recognized time"))),
    }
}

fn strip_meridiem(text: &str) -> Option<&str> {
    MERIDIEM_MARKERS.iter().find_map(|marker| {
        let split = text.len().checked_sub(marker.len())?;
        // The suffix is compared byte-wise against ASCII, so `split`
        // lands on a char boundary whenever it matches.
        if text.as_bytes()[split..].eq_ignore_ascii_case(marker.as_bytes()) {
            Some(text[..split].trim_end())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component() {
        assert_eq!(parse_component("07", "").unwrap(), 7);
        assert_eq!(parse_component("0", "").unwrap(), 0);
        assert!(parse_component("", "").is_err());
        assert!(parse_component("-1", "").is_err());
        assert!(parse_component("+1", "").is_err());
        assert!(parse_component(" 1", "").is_err());
        assert!(parse_component("1a", "").is_err());
        assert!(parse_component("99999999999999999999", "").is_err());
    }

    #[test]
    fn test_strict() {
        assert_eq!(strict("18:00").unwrap(), (18, 0));
        assert_eq!(strict("2:2").unwrap(), (2, 2));
        assert_eq!(strict("25:65").unwrap(), (25, 65));
        for bad in ["", "test", "a:90", "13:b", "aa:bb", "13:25:10", "9 AM", " 1:00", ":", "1:"] {
            assert!(strict(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_strip_meridiem() {
        assert_eq!(strip_meridiem("9 AM"), Some("9"));
        assert_eq!(strip_meridiem("9pm"), Some("9"));
        assert_eq!(strip_meridiem("11:30 p.m."), Some("11:30"));
        assert_eq!(strip_meridiem("Am"), Some(""));
        assert_eq!(strip_meridiem("13:25"), None);
        assert_eq!(strip_meridiem("m"), None);
        assert_eq!(strip_meridiem("é pm"), Some("é"));
    }

    #[test]
    fn test_loose() {
        assert_eq!(loose("18:00").unwrap(), (18, 0));
        assert_eq!(loose("9 AM").unwrap(), (9, 0));
        assert_eq!(loose(" 13:25:10 ").unwrap(), (13, 25));
        assert_eq!(loose("13:25:59").unwrap(), (13, 25));
        assert_eq!(loose("10:65").unwrap(), (10, 65));
        assert_eq!(loose("2:2").unwrap(), (2, 2));
        assert_eq!(loose("4:15 pm").unwrap(), (4, 15));
    }

    #[test]
    fn test_loose_ignores_meridiem() {
        assert_eq!(loose("9 PM").unwrap(), loose("9 AM").unwrap());
    }

    #[test]
    fn test_loose_rejects() {
        for bad in [
            "", "test", "a:90", "13:b", "aa:bb", "9", "AM", "1:2:3:4", "13:25:xx", "9 : 30",
        ] {
            assert!(loose(bad).is_err(), "{bad:?}");
        }
    }
}
