//! Transforms over sequences of strings.
//!
//! Numeric conversions use integer-prefix parsing: skip leading
//! whitespace, take an optional sign and the leading run of decimal
//! digits, and ignore any trailing content. Strings with no leading
//! digits convert to 0 rather than failing. Results are always whole
//! numbers.

/// Parse each string as an integer using integer-prefix parsing;
/// unparsable strings become 0.
pub fn strings_to_integers<S: AsRef<str>>(strings: &[S]) -> Vec<f64> {
    strings
        .iter()
        .map(|s| parse_int_prefix(s.as_ref()).unwrap_or(0.0))
        .collect()
}

/// Strip one leading `$` from each string if present, then parse as an
/// integer using integer-prefix parsing; unparsable strings become 0.
pub fn remove_dollars<S: AsRef<str>>(amounts: &[S]) -> Vec<f64> {
    amounts
        .iter()
        .map(|s| {
            let s = s.as_ref();
            let amount = s.strip_prefix('$').unwrap_or(s);
            parse_int_prefix(amount).unwrap_or(0.0)
        })
        .collect()
}

/// Drop strings ending in `?`, uppercase strings ending in `!`, and pass
/// everything else through unchanged. Relative order is preserved.
pub fn shout_if_exclaiming<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    messages
        .iter()
        .map(|m| m.as_ref())
        .filter(|m| !m.ends_with('?'))
        .map(|m| {
            if m.ends_with('!') {
                m.to_uppercase()
            } else {
                m.to_string()
            }
        })
        .collect()
}

/// Count the strings that are fewer than 4 characters long.
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .filter(|w| w.as_ref().chars().count() < 4)
        .count()
}

/// True if every element is `"red"`, `"blue"`, or `"green"`. Vacuously
/// true for an empty sequence.
pub fn all_rgb<S: AsRef<str>>(colors: &[S]) -> bool {
    colors
        .iter()
        .all(|c| matches!(c.as_ref(), "red" | "blue" | "green"))
}

/// Integer-prefix parse: optional sign, leading decimal digits, trailing
/// content ignored. `None` when no leading digits exist.
///
/// The result is always a whole number. Parsing into `f64` keeps the
/// magnitude of digit runs longer than any machine integer.
fn parse_int_prefix(input: &str) -> Option<f64> {
    let signed = input.trim_start();
    let unsigned = signed.strip_prefix(['+', '-']).unwrap_or(signed);
    let digits = unsigned
        .as_bytes()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    let prefix = &signed[..signed.len() - unsigned.len() + digits];
    prefix.parse().ok()
}
