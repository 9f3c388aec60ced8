//! Low-level nom parser functions for style values.
//!
//! Lengths are written the way a stylesheet author would write them:
//! a number with an optional unit (`12pt`, `0.25in`, `10mm`). A bare number
//! is taken as points.

use crate::dimension::{CM, INCH, MM};
use crate::error::StyleError;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit0, digit1, space0};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::sequence::delimited;
use nom::{IResult, Parser};

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit0)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

/// Returns the number of points in one of the given unit.
fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        map(tag_no_case("pt"), |_| 1.0),
        map(tag_no_case("px"), |_| 1.0), // Treat px as pt
        map(tag_no_case("in"), |_| INCH),
        map(tag_no_case("cm"), |_| CM),
        map(tag_no_case("mm"), |_| MM),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm"),
/// returning the value in points.
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    map(
        delimited(space0, (parse_f32, opt(parse_unit)), space0),
        |(value, unit)| value * unit.unwrap_or(1.0),
    )
    .parse(input)
}

/// Parses a complete length string; trailing garbage is an error.
pub fn length_from_str(input: &str) -> Result<f32, StyleError> {
    all_consuming(parse_length)
        .parse(input)
        .map(|(_, pts)| pts)
        .map_err(|_| StyleError::InvalidValue {
            property: "length".to_string(),
            value: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_parser<'a, O>(
        parser: impl Fn(&'a str) -> IResult<&'a str, O>,
        input: &'a str,
    ) -> Result<O, String> {
        match parser(input) {
            Ok(("", value)) => Ok(value),
            Ok((rest, _)) => Err(format!("unconsumed input: '{}'", rest)),
            Err(e) => Err(e.to_string()),
        }
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(run_parser(parse_length, "12pt").unwrap(), 12.0);
        assert_eq!(run_parser(parse_length, " 1in ").unwrap(), 72.0);
        assert_eq!(run_parser(parse_length, "0.25in").unwrap(), 18.0);
        assert_eq!(run_parser(parse_length, "10").unwrap(), 10.0);
        assert_eq!(run_parser(parse_length, ".5IN").unwrap(), 36.0);
        assert!(run_parser(parse_length, "abc").is_err());
    }

    #[test]
    fn test_metric_units() {
        let mm = run_parser(parse_length, "10mm").unwrap();
        assert!((mm - 28.346).abs() < 0.01);
        let cm = run_parser(parse_length, "1cm").unwrap();
        assert!((cm - mm).abs() < 0.001);
    }

    #[test]
    fn test_length_from_str_rejects_trailing_input() {
        assert_eq!(length_from_str("6pt").unwrap(), 6.0);
        assert!(matches!(
            length_from_str("6pt wide"),
            Err(StyleError::InvalidValue { .. })
        ));
    }
}
