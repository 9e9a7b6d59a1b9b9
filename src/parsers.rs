// src/parsers.rs
use std::str::FromStr;

/// Wrapper type to parse a single-character flag value (e.g. `--delete=X`).
///
/// Only the first byte is kept; the stream filter operates on raw bytes.
#[derive(Debug, Clone, Copy)]
pub struct CharArg(pub u8);

impl FromStr for CharArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.bytes()
            .next()
            .map(Self)
            .ok_or_else(|| "expected one character, got an empty value".to_string())
    }
}

/// Wrapper type to parse a two-character replace pair (e.g. `--replace=XY`).
///
/// First byte is the search target, second byte the substitute. Anything
/// past the second byte is ignored.
#[derive(Debug, Clone, Copy)]
pub struct ReplacePairArg(pub u8, pub u8);

impl FromStr for ReplacePairArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = s.bytes();
        match (bytes.next(), bytes.next()) {
            (Some(from), Some(to)) => Ok(Self(from, to)),
            _ => Err(format!("expected two characters, got: {s:?}")),
        }
    }
}

/// Wrapper type to parse a tab width with `atoi` semantics: the leading
/// digit run is the value, and a string with no leading digits is 0.
#[derive(Debug, Clone, Copy)]
pub struct TabWidthArg(pub u32);

impl FromStr for TabWidthArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s
            .trim_start()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        Ok(Self(digits.parse().unwrap_or(0)))
    }
}
