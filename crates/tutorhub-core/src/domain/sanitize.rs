//! Field normalization helpers shared by the entity setters.
//!
//! Every string field is normalized before its emptiness/length/format
//! checks run: free text is trimmed and stripped of markup, emails are
//! reduced to their legal character set, hex-encoded fields are trimmed
//! and lowercased.

/// Strip `<...>` tag spans and control characters, then trim.
pub fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if in_tag => {
                let _ = c;
            }
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out.trim().to_string()
}

/// Retain only characters legal in an email address, then trim.
pub fn clean_email(raw: &str) -> String {
    const EXTRA: &str = "!#$%&'*+-/=?^_`{|}~@.[]";
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || EXTRA.contains(*c))
        .collect()
}

/// Trim and lowercase a hex-encoded field.
pub fn clean_hex(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when the whole string is ASCII hex digits (and non-empty).
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}
