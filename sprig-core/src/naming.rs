//! Name derivation helpers for generated artifacts.
//!
//! Behavior on empty or whitespace-only input is undefined; callers are
//! expected to validate names before deriving anything from them.

/// Convert a string to dash-case (e.g., "FooBar" -> "foo-bar")
pub fn dasherize(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
            prev_lower = false;
        } else if c.is_uppercase() {
            if prev_lower && !result.ends_with('-') {
                result.push('-');
            }
            result.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    result.trim_matches('-').to_string()
}

/// Convert a string to a PascalCase identifier (e.g., "foo-bar" -> "FooBar")
pub fn classify(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || c == '.' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

/// Convert a string to camelCase (e.g., "foo-bar" -> "fooBar")
pub fn camelize(s: &str) -> String {
    let classified = classify(s);
    let mut chars = classified.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
