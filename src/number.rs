//! Parsing numbers out of decorated figures (`"~$45B (est.)"`, `"+112.5%"`, `"$25,500"`) and
//! formatting typed numbers back into display strings.
//!
//! The parsing functions here never fail and never produce NaN, so their results can be fed
//! straight into sort comparators.
use crate::units::{Dollars, Percent};
use std::fmt::Write;

/// The value returned by [`parse_decorated_number`] when a string has no numeric content
pub const PARSE_SENTINEL: f64 = 0.0;

/// An inclusive range of values, e.g. `"150,000 - 400,000 DWT"`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    /// The lower bound
    pub min: f64,
    /// The upper bound
    pub max: f64,
}

/// Characters which may sit between a minus sign and the digits it applies to
fn is_decoration(c: char) -> bool {
    matches!(c, '$' | '~' | '≈' | '£' | '€' | '¥') || c.is_whitespace()
}

/// Whether `c` is a minus sign (ASCII hyphen or the Unicode minus)
fn is_minus(c: char) -> bool {
    c == '-' || c == '\u{2212}'
}

/// Find the first numeric token in `s`.
///
/// A token is a run of digits, optionally with thousands separators (a comma followed by a digit)
/// and a decimal part. It is negated if a minus sign precedes it with only decorations in between.
///
/// # Returns
///
/// The value of the token and the remainder of the string following it, or `None` if `s` has no
/// digits.
fn find_number(s: &str) -> Option<(f64, &str)> {
    // A number starts at a digit, or at a decimal point followed by one (e.g. `".5"`)
    let start = s.char_indices().find_map(|(i, c)| {
        let starts_number = c.is_ascii_digit()
            || (c == '.' && s[i + 1..].starts_with(|next: char| next.is_ascii_digit()));
        starts_number.then_some(i)
    })?;

    let negative = s[..start]
        .chars()
        .rev()
        .find(|c| !is_decoration(*c))
        .is_some_and(is_minus);

    let mut digits = String::from("0");
    let mut end = start;
    let mut seen_point = false;
    let mut chars = s[start..].char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        let next_is_digit = chars.peek().is_some_and(|(_, next)| next.is_ascii_digit());
        match c {
            '0'..='9' => digits.push(c),
            ',' if !seen_point && next_is_digit => {}
            '.' if !seen_point && next_is_digit => {
                seen_point = true;
                digits.push(c);
            }
            _ => break,
        }
        end = start + offset + c.len_utf8();
    }

    let value: f64 = digits.parse().ok().filter(|v: &f64| v.is_finite())?;
    Some((if negative { -value } else { value }, &s[end..]))
}

/// Extract a number from a decorated string, returning `None` if there is no numeric content.
pub fn try_parse_decorated_number(s: &str) -> Option<f64> {
    find_number(s).map(|(value, _)| value)
}

/// Extract a comparable number from a decorated string such as `"~$45B (est.)"` or `"-26.7%"`.
///
/// Currency symbols, thousands separators, tildes, parenthetical notes and unit suffixes are
/// ignored; a leading minus sign is kept. Strings without numeric content yield
/// [`PARSE_SENTINEL`] rather than NaN.
pub fn parse_decorated_number(s: &str) -> f64 {
    try_parse_decorated_number(s).unwrap_or(PARSE_SENTINEL)
}

/// The multiplier for a magnitude word (or abbreviation) at the start of `rest`
fn magnitude_multiplier(rest: &str) -> f64 {
    const WORDS: [(&str, f64); 4] = [
        ("thousand", 1e3),
        ("million", 1e6),
        ("billion", 1e9),
        ("trillion", 1e12),
    ];
    const SUFFIXES: [(&str, f64); 6] = [
        ("k", 1e3),
        ("K", 1e3),
        ("M", 1e6),
        ("bn", 1e9),
        ("B", 1e9),
        ("T", 1e12),
    ];

    let rest = rest.trim_start();
    let followed_by_letter =
        |len: usize| rest[len..].chars().next().is_some_and(char::is_alphabetic);

    for (word, multiplier) in WORDS {
        if rest
            .get(..word.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(word))
            && !followed_by_letter(word.len())
        {
            return multiplier;
        }
    }

    for (suffix, multiplier) in SUFFIXES {
        if rest.starts_with(suffix) && !followed_by_letter(suffix.len()) {
            return multiplier;
        }
    }

    1.0
}

/// Extract a number from a decorated string, applying any magnitude suffix which follows it.
///
/// `"$5.3 trillion/year"` gives `5.3e12` and `"16M bbl/day"` gives `16e6`. Returns `None` if there
/// is no numeric content.
pub fn parse_magnitude(s: &str) -> Option<f64> {
    let (value, rest) = find_number(s)?;
    Some(value * magnitude_multiplier(rest))
}

/// Parse a range such as `"150,000 - 400,000 DWT"` or `"28-35 days"`.
///
/// A lone figure (`"15 knots"`) gives a range with equal bounds. Returns `None` if there is no
/// numeric content.
pub fn parse_range(s: &str) -> Option<NumericRange> {
    let (first, rest) = find_number(s)?;
    let rest = rest.trim_start();

    let second = rest
        .strip_prefix(['-', '\u{2013}', '\u{2014}'])
        .or_else(|| rest.strip_prefix("to "))
        .and_then(find_number)
        .map(|(value, _)| value.abs());

    let Some(second) = second else {
        return Some(NumericRange {
            min: first,
            max: first,
        });
    };

    Some(NumericRange {
        min: first.min(second),
        max: first.max(second),
    })
}

/// Format a number with thousands separators and the given number of decimal places
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = formatted
        .split_once('.')
        .map_or((formatted.as_str(), None), |(i, f)| (i, Some(f)));

    let mut out = String::new();
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(fraction) = fraction {
        write!(&mut out, ".{fraction}").unwrap();
    }

    out
}

/// Format a percentage with an explicit sign, e.g. `+112.5%`
pub fn format_signed_percent(value: Percent) -> String {
    let rounded = (value.value() * 10.0).round() / 10.0;
    if rounded > 0.0 {
        format!("+{rounded:.1}%")
    } else if rounded < 0.0 {
        format!("{rounded:.1}%")
    } else {
        "0.0%".to_string()
    }
}

/// Format a share, dropping a trailing `.0` (e.g. `42%`, `49.2%`)
pub fn format_share(value: Percent) -> String {
    format!("{}%", trim_trailing_zero(value.value(), 1))
}

/// Format an amount of money, e.g. `$25,500` or `$17.40`.
///
/// Amounts under $1,000 are shown with cents.
pub fn format_dollars(value: Dollars) -> String {
    let amount = value.value();
    let decimals = if amount.abs() < 1000.0 { 2 } else { 0 };
    let formatted = format_thousands(amount.abs(), decimals);
    if amount < 0.0 {
        format!("-${formatted}")
    } else {
        format!("${formatted}")
    }
}

/// Format an amount of money compactly using a magnitude suffix, e.g. `$80B` or `$5.3T`
pub fn format_compact_dollars(value: Dollars) -> String {
    const SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    let amount = value.value();
    let sign = if amount < 0.0 { "-" } else { "" };
    for (scale, suffix) in SUFFIXES {
        if amount.abs() >= scale {
            let scaled = trim_trailing_zero(amount.abs() / scale, 1);
            return format!("{sign}${scaled}{suffix}");
        }
    }

    format!("{sign}${}", trim_trailing_zero(amount.abs(), 2))
}

/// Format `value` with up to `decimals` decimal places, removing trailing zeros
fn trim_trailing_zero(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
