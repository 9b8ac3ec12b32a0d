use crate::scan::last_import_end;

/// Build a single-symbol import statement.
pub fn import_statement(symbol: &str, path: &str) -> String {
    format!("import {{ {} }} from '{}';", symbol, path)
}

/// Ensure an exact import statement is present in the source, exactly once.
///
/// If the statement already occurs, the text is returned unchanged. Otherwise
/// it is spliced in right after the last existing top-level import, with a
/// newline on each side so it never merges with code sharing the last
/// import's line, or prepended when the file has no imports at all. Existing
/// imports are never reordered.
pub fn ensure_import(src: &str, statement: &str) -> String {
    if src.contains(statement) {
        return src.to_string();
    }
    match last_import_end(src) {
        Some(pos) => format!("{}\n{}\n{}", &src[..pos], statement, &src[pos..]),
        None => format!("{}\n{}", statement, src),
    }
}
