use lazy_static::lazy_static;
use regex::Regex;

/// Substitutions applied to a unit name, in order. Later entries see the
/// output of earlier ones, so this must stay a sequence.
pub const UNIT_KEY_REPLACEMENTS: &[(&str, &str)] = &[
    (" ", "_"),
    (",", "_"),
    (".", "_"),
    ("-", "_"),
    ("/", "_PER_"),
    ("%", "PERCENT"),
    ("[", ""),
    ("]", ""),
    ("(", ""),
    (")", ""),
    ("'", ""),
    ("8", "EIGHT"),
    ("15", "FIFTEEN"),
    ("30", "THIRTY"),
    ("\\", "_"),
    ("\u{a0}", "_"),
    ("\u{b0}", "DEG_"),
    ("\u{ba}", "DEG_"),
    ("\u{2013}", "_"),
];

lazy_static! {
    /// Anything left that a Rust identifier cannot hold
    static ref NON_IDENT: Regex = Regex::new(r"[^A-Z0-9_]").unwrap();
    static ref UNDERSCORE_RUN: Regex = Regex::new(r"_+").unwrap();
}

/// Derive an uppercase identifier from a unit's display name.
///
/// "metre per second" -> "METRE_PER_SECOND", "m/s" -> "M_PER_S".
/// Returns an empty string for a blank name.
pub fn unit_key_from_name(name: &str) -> String {
    if name.trim().is_empty() {
        return String::new();
    }

    let mut result = name.to_string();

    for &(old, new) in UNIT_KEY_REPLACEMENTS {
        result = result.replace(old, new);
    }

    let result = result.to_uppercase();
    let result = NON_IDENT.replace_all(&result, "_");
    let result = UNDERSCORE_RUN.replace_all(&result, "_").into_owned();

    match result.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{}", result),
        _ => result,
    }
}
