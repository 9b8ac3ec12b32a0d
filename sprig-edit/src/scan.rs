//! Shallow structural scanning of descriptor source text.
//!
//! This is deliberately not a full parser. Statement boundaries are found by
//! tracking paired delimiters, string literals, and comments; that is enough
//! to tell top-level statements apart, which is all the editing operations
//! need.

/// End offset (past the `;`) of the last top-level `import` statement.
///
/// Only outermost statements count; anything nested inside delimiters is
/// ignored. Returns `None` if the file has no top-level imports.
pub fn last_import_end(src: &str) -> Option<usize> {
    let bytes = src.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    let mut depth = 0usize;
    let mut stmt_start: Option<usize> = None;
    let mut last_end = None;

    while i < len {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < len && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < len && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i = if i + 1 < len { i + 2 } else { len };
            }
            quote @ (b'\'' | b'"' | b'`') => {
                if depth == 0 && stmt_start.is_none() {
                    stmt_start = Some(i);
                }
                i = skip_string(bytes, i, quote);
            }
            b'(' | b'[' | b'{' => {
                if depth == 0 && stmt_start.is_none() {
                    stmt_start = Some(i);
                }
                depth += 1;
                i += 1;
            }
            b')' | b']' | b'}' => {
                let closing_brace = bytes[i] == b'}';
                depth = depth.saturating_sub(1);
                // A brace closing back to top level ends a body-style
                // statement (class, function) that carries no `;`. Import
                // clauses also contain braces, so those statements keep
                // running until their `;`.
                if depth == 0
                    && closing_brace
                    && !stmt_start.is_some_and(|start| is_import_at(src, start))
                {
                    stmt_start = None;
                }
                i += 1;
            }
            b';' if depth == 0 => {
                if stmt_start.is_some_and(|start| is_import_at(src, start)) {
                    last_end = Some(i + 1);
                }
                stmt_start = None;
                i += 1;
            }
            b => {
                if depth == 0 && stmt_start.is_none() && !b.is_ascii_whitespace() {
                    stmt_start = Some(i);
                }
                i += 1;
            }
        }
    }

    last_end
}

/// Offsets of the first `[` at or after `from` and the first `]` after it.
///
/// Not nesting-aware: registration arrays hold plain identifiers, never
/// nested brackets, so the first close is the right one.
pub fn naive_bracket_span(src: &str, from: usize) -> Option<(usize, usize)> {
    let open = src[from..].find('[')? + from;
    let close = src[open + 1..].find(']')? + open + 1;
    Some((open, close))
}

fn skip_string(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn is_import_at(src: &str, start: usize) -> bool {
    let rest = &src[start..];
    rest.starts_with("import")
        && !rest[6..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
