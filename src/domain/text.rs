// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format tokens and quoting helpers shared by the tree and the format adapters.

/// Operators carried by a section that renders as a mapping.
pub const OBJECT_SEPARATOR: [&str; 2] = ["{", "}"];

/// Operators carried by a section that renders as a sequence.
pub const ARRAY_SEPARATOR: [&str; 2] = ["[", "]"];

/// Quote characters that may wrap a raw entry value.
pub const STRING_OPERATORS: [char; 3] = ['"', '\'', '`'];

/// Removes the quote wrappers from a raw entry value.
///
/// A value wrapped in a matching pair of `"`, `'` or `` ` `` loses that pair, and
/// stripping repeats until the value is no longer wrapped, so applying the
/// function twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use cdncfg::domain::text::destringify;
///
/// assert_eq!(destringify("\"localhost\""), "localhost");
/// assert_eq!(destringify("'a b'"), "a b");
/// assert_eq!(destringify("plain"), "plain");
/// assert_eq!(destringify("\"unbalanced'"), "\"unbalanced'");
/// ```
pub fn destringify(value: &str) -> &str {
    let mut current = value;
    while let Some(inner) = strip_wrapper(current) {
        current = inner;
    }
    current
}

/// Wraps a value in double quotes.
///
/// `destringify(&stringify(s)) == destringify(s)` for every `s`.
///
/// # Examples
///
/// ```
/// use cdncfg::domain::text::{destringify, stringify};
///
/// let quoted = stringify("MyApp");
/// assert_eq!(quoted, "\"MyApp\"");
/// assert_eq!(destringify(&quoted), "MyApp");
/// ```
pub fn stringify(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Returns true if the value is wrapped in a matching quote pair.
pub fn is_stringified(value: &str) -> bool {
    strip_wrapper(value).is_some()
}

fn strip_wrapper(value: &str) -> Option<&str> {
    let first = value.chars().next()?;
    if value.len() < 2 || !STRING_OPERATORS.contains(&first) || !value.ends_with(first) {
        return None;
    }
    // every quote character is one byte wide
    Some(&value[1..value.len() - 1])
}
