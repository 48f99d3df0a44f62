//! Command-line date/time parsing.
//!
//! Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` and the same with a trailing
//! `Z`. A space may replace the `T`. Values are range-checked by the
//! calendar crate after the shape is accepted.

use anyhow::{Context, Result, bail};

use utctime_calendar::CivilDateTime;

/// Parses and validates a date/time argument.
pub fn parse_datetime(s: &str) -> Result<CivilDateTime> {
    let dt = parse_shape(s.trim()).with_context(|| {
        format!("invalid date/time {s:?}: expected YYYY-MM-DD[THH:MM:SS][Z]")
    })?;
    dt.validate().with_context(|| format!("invalid date/time {s:?}"))
}

fn parse_shape(s: &str) -> Result<CivilDateTime> {
    let s = s.strip_suffix('Z').unwrap_or(s);
    let (date, time) = match s.split_once(['T', ' ']) {
        Some((d, t)) => (d, Some(t)),
        None => (s, None),
    };

    let [year, month, day] = split_fields(date, '-', [4, 2, 2])?;
    let [hour, minute, second] = match time {
        Some(t) => split_fields(t, ':', [2, 2, 2])?,
        None => [0, 0, 0],
    };
    Ok(CivilDateTime::new(year, month, day, hour, minute, second))
}

/// Splits `s` on `sep` into exactly three all-digit fields of the given widths.
fn split_fields(s: &str, sep: char, widths: [usize; 3]) -> Result<[i32; 3]> {
    let mut out = [0; 3];
    let mut parts = s.split(sep);
    for (slot, width) in out.iter_mut().zip(widths) {
        let Some(part) = parts.next() else {
            bail!("missing field in {s:?}");
        };
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            bail!("field {part:?} must be {width} digits");
        }
        *slot = part.parse()?;
    }
    if parts.next().is_some() {
        bail!("too many fields in {s:?}");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_form() {
        assert_eq!(
            parse_datetime("2024-02-29T12:34:56Z").unwrap(),
            CivilDateTime::new(2024, 2, 29, 12, 34, 56)
        );
    }

    #[test]
    fn without_zone_suffix_or_with_space() {
        let expected = CivilDateTime::new(1969, 7, 20, 20, 17, 40);
        assert_eq!(parse_datetime("1969-07-20T20:17:40").unwrap(), expected);
        assert_eq!(parse_datetime("1969-07-20 20:17:40").unwrap(), expected);
    }

    #[test]
    fn date_only_is_midnight() {
        assert_eq!(
            parse_datetime("0000-01-01").unwrap(),
            CivilDateTime::midnight(0, 1, 1)
        );
        assert_eq!(
            parse_datetime("9999-12-31Z").unwrap(),
            CivilDateTime::midnight(9999, 12, 31)
        );
    }

    #[test]
    fn rejects_bad_shapes() {
        for s in [
            "",
            "2024",
            "2024-1-01",
            "24-01-01",
            "2024-01-01T1:00:00",
            "2024-01-01T00:00",
            "2024-01-01T00:00:00:00",
            "+2024-01-01",
            "2024-01-01T00:00:00+01:00",
        ] {
            assert!(parse_datetime(s).is_err(), "{s:?} should be rejected");
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(parse_datetime("2023-02-29").is_err());
        assert!(parse_datetime("2024-13-01").is_err());
        assert!(parse_datetime("2016-12-31T23:59:60Z").is_err());
    }
}
