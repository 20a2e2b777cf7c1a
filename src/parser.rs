//! Line-oriented parser for equations of the form `[c1]x[c2]y[c3]z = c4`.
//!
//! Whitespace anywhere in a line is ignored. The x coefficient may be omitted entirely;
//! the y and z coefficients need at least a sign. A bare sign stands for a magnitude of
//! one. Matching is anchored at the start of the line only, so text after the constant
//! (a trailing comment, say) is ignored. Lines that do not match are skipped, never
//! reported as errors; `parse_system_with_diagnostics` records why each one was skipped.

use std::fmt;
use std::fs;
use std::path::Path;

use nom::IResult;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{map, opt, recognize};
use nom::error::VerboseError;
use nom::sequence::{pair, preceded, terminated, tuple};

use num_bigint::BigInt;
use num_traits::One;

use crate::error::{LinalgError, Result};
use crate::system::ParsedSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    NoMatch,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Blank => write!(f, "blank line"),
            SkipReason::NoMatch => write!(f, "not an equation in x, y, z"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based.
    pub line_number: usize,
    pub text: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseDiagnostics {
    pub skipped: Vec<SkippedLine>,
}

impl ParseDiagnostics {
    /// Skipped lines that carried some content.
    pub fn reportable(&self) -> impl Iterator<Item = &SkippedLine> {
        self.skipped
            .iter()
            .filter(|line| line.reason != SkipReason::Blank)
    }
}

/// Parse a single equation line into its coefficient row and constant.
pub fn parse_equation(line: &str) -> Option<([BigInt; 3], BigInt)> {
    classify_line(line).ok()
}

pub fn parse_system<'a, I>(lines: I) -> ParsedSystem
where
    I: IntoIterator<Item = &'a str>,
{
    parse_system_with_diagnostics(lines).0
}

pub fn parse_system_with_diagnostics<'a, I>(lines: I) -> (ParsedSystem, ParseDiagnostics)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut system = ParsedSystem::default();
    let mut diagnostics = ParseDiagnostics::default();

    for (idx, line) in lines.into_iter().enumerate() {
        match classify_line(line) {
            Ok((row, constant)) => system.push(row, constant),
            Err(reason) => {
                tracing::debug!(line = idx + 1, %reason, "skipping line");
                diagnostics.skipped.push(SkippedLine {
                    line_number: idx + 1,
                    text: line.to_string(),
                    reason,
                });
            }
        }
    }

    (system, diagnostics)
}

/// Read the whole file and parse it line by line.
pub fn parse_system_from_file(path: impl AsRef<Path>) -> Result<(ParsedSystem, ParseDiagnostics)> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LinalgError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_system_with_diagnostics(source.lines()))
}

fn classify_line(line: &str) -> std::result::Result<([BigInt; 3], BigInt), SkipReason> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(SkipReason::Blank);
    }

    let (_, ([x, y, z], constant)) = equation(&compact).map_err(|_| SkipReason::NoMatch)?;
    let decode = |token| decode_coefficient(token).ok_or(SkipReason::NoMatch);
    let row = [decode(x)?, decode(y)?, decode(z)?];
    let constant = constant.parse().map_err(|_| SkipReason::NoMatch)?;
    Ok((row, constant))
}

/// Empty or sign-only tokens mean a magnitude of one. Digits are never truncated.
fn decode_coefficient(token: &str) -> Option<BigInt> {
    match token {
        "" | "+" => Some(BigInt::one()),
        "-" => Some(-BigInt::one()),
        _ => token.parse().ok(),
    }
}

fn equation(input: &str) -> IResult<&str, ([&str; 3], &str), VerboseError<&str>> {
    map(
        tuple((
            terminated(leading_coefficient, char('x')),
            terminated(signed_coefficient, char('y')),
            terminated(signed_coefficient, char('z')),
            preceded(char('='), constant),
        )),
        |(x, y, z, c)| ([x, y, z], c),
    )(input)
}

fn leading_coefficient(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(pair(opt(one_of("+-")), digit0))(input)
}

fn signed_coefficient(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(pair(one_of("+-"), digit0))(input)
}

fn constant(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_tokens_decode_with_implicit_one() {
        let decoded = |token| decode_coefficient(token).map(|v| v.to_string());
        assert_eq!(decoded("").as_deref(), Some("1"));
        assert_eq!(decoded("+").as_deref(), Some("1"));
        assert_eq!(decoded("-").as_deref(), Some("-1"));
        assert_eq!(decoded("+12").as_deref(), Some("12"));
        assert_eq!(decoded("-007").as_deref(), Some("-7"));
        assert_eq!(
            decoded("-123456789012345678901234567890").as_deref(),
            Some("-123456789012345678901234567890")
        );
    }

    #[test]
    fn equation_leaves_trailing_text() {
        let (rest, (coeffs, constant)) = equation("2x-y+3z=4#note").unwrap();
        assert_eq!(coeffs, ["2", "-", "+3"]);
        assert_eq!(constant, "4");
        assert_eq!(rest, "#note");
    }

    #[test]
    fn y_and_z_require_a_sign() {
        assert!(equation("x2y+z=1").is_err());
        assert!(equation("x+yz=1").is_err());
    }
}
