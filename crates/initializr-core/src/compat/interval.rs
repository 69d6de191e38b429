//! Version interval notation used by the generator to declare which platform
//! versions an add-on component supports
//!
//! Accepted shapes:
//! - empty string: every version
//! - `3.2.0`: at least `3.2.0`, no upper bound
//! - `[3.2.0,4.0.0)`: `[`/`]` are inclusive, `(`/`)` exclusive; either side may be empty

use super::version::parse_version;
use semver::Version;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A range of platform versions, unbounded on any side without a bound
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionInterval {
    lower: Option<Version>,
    upper: Option<Version>,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

/// Outcome of parsing interval notation
///
/// Unusable input never fails: it degrades the affected bound (or the whole
/// interval) to unbounded and records why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInterval {
    Exact(VersionInterval),
    Degraded {
        interval: VersionInterval,
        reason: String,
    },
}

impl ParsedInterval {
    pub fn into_interval(self) -> VersionInterval {
        match self {
            ParsedInterval::Exact(interval) => interval,
            ParsedInterval::Degraded { interval, .. } => interval,
        }
    }

    pub fn interval(&self) -> &VersionInterval {
        match self {
            ParsedInterval::Exact(interval) => interval,
            ParsedInterval::Degraded { interval, .. } => interval,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ParsedInterval::Degraded { .. })
    }

    /// Why the source notation could not be honoured in full, if it was not
    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            ParsedInterval::Exact(_) => None,
            ParsedInterval::Degraded { reason, .. } => Some(reason.as_str()),
        }
    }
}

impl Default for ParsedInterval {
    fn default() -> Self {
        ParsedInterval::Exact(VersionInterval::universal())
    }
}

impl<'de> Deserialize<'de> for ParsedInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(VersionInterval::parse(&raw))
    }
}

impl VersionInterval {
    /// The interval matching every version
    pub fn universal() -> Self {
        Self::default()
    }

    /// `[version, )`
    pub fn at_least(version: Version) -> Self {
        Self {
            lower: Some(version),
            lower_inclusive: true,
            ..Self::default()
        }
    }

    pub fn new(
        lower: Option<Version>,
        lower_inclusive: bool,
        upper: Option<Version>,
        upper_inclusive: bool,
    ) -> Self {
        Self {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
        }
    }

    /// Parse interval notation, degrading instead of failing on bad input
    pub fn parse(raw: &str) -> ParsedInterval {
        let raw = raw.trim();
        if raw.is_empty() {
            return ParsedInterval::Exact(Self::universal());
        }

        let mut cursor = Cursor::new(raw);
        match cursor.peek() {
            Some('[') | Some('(') => parse_bracketed(&mut cursor),
            _ => match parse_version(raw) {
                Ok(version) => ParsedInterval::Exact(Self::at_least(version)),
                Err(e) => ParsedInterval::Degraded {
                    interval: Self::universal(),
                    reason: e.to_string(),
                },
            },
        }
    }

    pub fn lower(&self) -> Option<&Version> {
        self.lower.as_ref()
    }

    pub fn upper(&self) -> Option<&Version> {
        self.upper.as_ref()
    }

    pub fn lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    pub fn upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }

    pub fn is_universal(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    /// Whether `version` falls inside the interval
    pub fn contains(&self, version: &Version) -> bool {
        if let Some(lower) = &self.lower {
            if version < lower || (!self.lower_inclusive && version == lower) {
                return false;
            }
        }
        if let Some(upper) = &self.upper {
            if version > upper || (!self.upper_inclusive && version == upper) {
                return false;
            }
        }
        true
    }
}

/// Renders `>=3.2.0 and <4.0.0`. Intervals without a lower bound render empty;
/// the output is for display only and is not valid interval notation.
impl fmt::Display for VersionInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(lower) = &self.lower else {
            return Ok(());
        };
        let op = if self.lower_inclusive { ">=" } else { ">" };
        write!(f, "{}{}", op, lower)?;
        if let Some(upper) = &self.upper {
            let op = if self.upper_inclusive { "<=" } else { "<" };
            write!(f, " and {}{}", op, upper)?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for VersionInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw).into_interval())
    }
}

/// Character cursor over the notation; all splits happen on char boundaries
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    fn take_until(&mut self, stop: impl Fn(char) -> bool) -> &'a str {
        let end = self.rest.find(stop).unwrap_or(self.rest.len());
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }

    fn rest(&self) -> &'a str {
        self.rest
    }
}

fn is_close(c: char) -> bool {
    c == ']' || c == ')'
}

fn parse_bracketed(cursor: &mut Cursor<'_>) -> ParsedInterval {
    let lower_inclusive = cursor.bump() == Some('[');

    let lower_text = cursor.take_until(|c| c == ',' || is_close(c));
    if cursor.bump() != Some(',') {
        return malformed("missing ',' between bounds");
    }

    let upper_text = cursor.take_until(is_close);
    let upper_inclusive = match cursor.bump() {
        Some(']') => true,
        Some(')') => false,
        _ => return malformed("missing closing bracket"),
    };

    if !cursor.rest().trim().is_empty() {
        return malformed("unexpected input after closing bracket");
    }

    let mut problems = Vec::new();
    let lower = parse_bound(lower_text, &mut problems);
    let upper = parse_bound(upper_text, &mut problems);
    let interval = VersionInterval::new(lower, lower_inclusive, upper, upper_inclusive);

    if problems.is_empty() {
        ParsedInterval::Exact(interval)
    } else {
        ParsedInterval::Degraded {
            interval,
            reason: problems.join("; "),
        }
    }
}

/// Empty bounds are unbounded; unparsable bounds are dropped with a note
fn parse_bound(text: &str, problems: &mut Vec<String>) -> Option<Version> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match parse_version(text) {
        Ok(version) => Some(version),
        Err(e) => {
            problems.push(e.to_string());
            None
        }
    }
}

fn malformed(reason: &str) -> ParsedInterval {
    ParsedInterval::Degraded {
        interval: VersionInterval::universal(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        parse_version(s).unwrap()
    }

    fn interval(raw: &str) -> VersionInterval {
        VersionInterval::parse(raw).into_interval()
    }

    #[test]
    fn test_universal_contains_everything() {
        let universal = interval("");
        assert!(universal.is_universal());
        for version in ["0.0.1", "1.5.22", "3.2.0", "3.4.0-M1", "99.0.0"] {
            assert!(universal.contains(&v(version)));
        }
        assert!(interval("[,]").contains(&v("2.0.0")));
    }

    #[test]
    fn test_lower_inclusive() {
        let range = interval("[3.2.0,)");
        assert!(range.contains(&v("3.2.0")));
        assert!(!range.contains(&v("3.1.9")));
        assert!(range.contains(&v("10.0.0")));
    }

    #[test]
    fn test_lower_exclusive() {
        let range = interval("(3.2.0,)");
        assert!(!range.contains(&v("3.2.0")));
        assert!(range.contains(&v("3.2.1")));
    }

    #[test]
    fn test_closed_interval() {
        let range = interval("[1.0.0,2.0.0]");
        assert!(range.contains(&v("1.0.0")));
        assert!(range.contains(&v("1.5.0")));
        assert!(range.contains(&v("2.0.0")));
        assert!(!range.contains(&v("0.9.9")));
        assert!(!range.contains(&v("2.0.1")));
    }

    #[test]
    fn test_open_upper_interval() {
        let range = interval("[1.0.0,2.0.0)");
        assert!(!range.contains(&v("2.0.0")));
        assert!(range.contains(&v("1.9.9")));
    }

    #[test]
    fn test_upper_only() {
        let range = interval("(,3.0.0)");
        assert!(range.lower().is_none());
        assert!(range.contains(&v("2.7.18")));
        assert!(!range.contains(&v("3.0.0")));
    }

    #[test]
    fn test_bare_version_is_minimum() {
        let parsed = VersionInterval::parse("3.2.0");
        assert!(!parsed.is_degraded());
        let range = parsed.into_interval();
        assert_eq!(range, VersionInterval::at_least(v("3.2.0")));
        assert!(range.contains(&v("3.2.0")));
        assert!(range.contains(&v("4.0.0")));
        assert!(!range.contains(&v("3.1.12")));
    }

    #[test]
    fn test_milestone_upper_bound_excludes_release_line() {
        // Typical generator metadata: supported up to, not including, the next milestone
        let range = interval("[3.2.0,3.4.0-M1)");
        assert!(range.contains(&v("3.3.5")));
        assert!(!range.contains(&v("3.4.0-M1")));
        assert!(!range.contains(&v("3.4.0")));
    }

    #[test]
    fn test_parse_matches_bound_rules_for_every_shape() {
        let candidates = ["0.9.9", "1.0.0", "1.5.0", "2.0.0", "2.0.1"];
        let shapes: &[(&str, Option<&str>, bool, Option<&str>, bool)] = &[
            ("", None, false, None, false),
            ("1.0.0", Some("1.0.0"), true, None, false),
            ("[1.0.0,2.0.0]", Some("1.0.0"), true, Some("2.0.0"), true),
            ("[1.0.0,2.0.0)", Some("1.0.0"), true, Some("2.0.0"), false),
            ("(1.0.0,2.0.0]", Some("1.0.0"), false, Some("2.0.0"), true),
            ("(1.0.0,2.0.0)", Some("1.0.0"), false, Some("2.0.0"), false),
            ("[1.0.0,)", Some("1.0.0"), true, None, false),
            ("(,2.0.0]", None, false, Some("2.0.0"), true),
        ];

        for (raw, lower, lower_inclusive, upper, upper_inclusive) in shapes {
            let range = interval(raw);
            for candidate in candidates {
                let c = v(candidate);
                let above = lower.map_or(true, |l| {
                    let l = v(l);
                    c > l || (*lower_inclusive && c == l)
                });
                let below = upper.map_or(true, |u| {
                    let u = v(u);
                    c < u || (*upper_inclusive && c == u)
                });
                assert_eq!(
                    range.contains(&c),
                    above && below,
                    "{} contains {}",
                    raw,
                    candidate
                );
            }
        }
    }

    #[test]
    fn test_unparsable_bound_is_dropped() {
        let parsed = VersionInterval::parse("[3.2.0,next)");
        assert!(parsed.is_degraded());
        let range = parsed.into_interval();
        assert_eq!(range.lower(), Some(&v("3.2.0")));
        assert!(range.upper().is_none());
        assert!(range.contains(&v("9.0.0")));

        let bare = VersionInterval::parse("latest");
        assert!(bare.is_degraded());
        assert!(bare.interval().is_universal());
    }

    #[test]
    fn test_malformed_structure_degrades_to_universal() {
        for raw in ["[]", "[3.2.0]", "[3.2.0,4.0.0", "[3.2.0,4.0.0)x", "(", "[é,ü"] {
            let parsed = VersionInterval::parse(raw);
            assert!(parsed.is_degraded(), "{} should degrade", raw);
            assert!(parsed.interval().is_universal(), "{} should be universal", raw);
        }
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        let range = interval("  [ 1.0.0 , 2.0.0 )  ");
        assert_eq!(range, interval("[1.0.0,2.0.0)"));
    }

    #[test]
    fn test_render() {
        assert_eq!(interval("[3.2.0,4.0.0)").to_string(), ">=3.2.0 and <4.0.0");
        assert_eq!(interval("(3.2.0,4.0.0]").to_string(), ">3.2.0 and <=4.0.0");
        assert_eq!(interval("3.2.0").to_string(), ">=3.2.0");
        assert_eq!(interval("(,4.0.0)").to_string(), "");
        assert_eq!(interval("").to_string(), "");
    }

    #[test]
    fn test_deserialize_keeps_degraded_reason() {
        let parsed: ParsedInterval = serde_json::from_str("\"[3.2.0,next)\"").unwrap();
        assert!(parsed.degraded_reason().unwrap().contains("next"));
        assert_eq!(parsed.interval().lower(), Some(&v("3.2.0")));

        let exact: ParsedInterval = serde_json::from_str("\"3.2.0\"").unwrap();
        assert_eq!(exact.degraded_reason(), None);
    }

    #[test]
    fn test_deserialize_from_string() {
        let range: VersionInterval = serde_json::from_str("\"[3.2.0,3.5.0-M1)\"").unwrap();
        assert_eq!(range, interval("[3.2.0,3.5.0-M1)"));
    }
}
