//! The fixed suffix catalog and the rules for appending to an expression.

/// Root selector; also the default base expression.
pub const ROOT: &str = ".";

/// Suffixes tried against every base expression, in the order they are tested.
pub const SUFFIXES: &[&str] = &[
    // Iteration and selection
    ".[]",
    ".[0]",
    ".[*]",
    ".select()",
    // Transformation
    ".map()",
    ".flatten()",
    ".sort()",
    ".reverse()",
    // Coercion
    ".to_string()",
    ".to_json()",
    ".to_yaml()",
    // Size, keys and membership
    "| length",
    "| keys",
    "| has()",
    // Predicates
    "| contains()",
    "| any()",
    "| all()",
];

/// Appends `suffix` to `base`.
///
/// Pipes and brackets are appended as-is. A bare key gets a `.` separator,
/// except that the root selector never produces `..`.
///
/// # Examples
///
/// ```
/// use yq_continuations::continuation::catalog::join;
///
/// assert_eq!(join(".", "foo"), ".foo");
/// assert_eq!(join(".", ".bar"), ".bar");
/// assert_eq!(join(".a", "b"), ".a.b");
/// assert_eq!(join(".a", "| length"), ".a| length");
/// ```
pub fn join(base: &str, suffix: &str) -> String {
    if suffix.starts_with('|') || suffix.starts_with('[') {
        return format!("{}{}", base, suffix);
    }

    if base == ROOT {
        if suffix.starts_with('.') {
            return suffix.to_string();
        }
        return format!("{}{}", base, suffix);
    }

    if !suffix.starts_with('.') {
        return format!("{}.{}", base, suffix);
    }

    format!("{}{}", base, suffix)
}

/// Quotes `key` as a double-quoted string literal.
///
/// Backslashes, quotes and control characters are escaped so that keys with
/// special characters can be used in bracket access and `has(...)`.
///
/// Control characters other than `\n`, `\r` and `\t` (DEL included) become
/// `\u00XX`, which yq's string literals accept. Other non-printable Unicode,
/// such as U+00A0, is passed through unescaped.
pub fn quote_key(key: &str) -> String {
    let mut quoted = String::with_capacity(key.len() + 2);
    quoted.push('"');
    for c in key.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
