use regex::Regex;

use crate::{
    error::{Error, Result},
    registry::clean_array_content,
    scan::naive_bracket_span,
};

/// Drop every import line that references `symbol`.
///
/// A line counts when it starts with `import` (after leading whitespace) and
/// mentions the symbol as a whole word. The rest of the file is untouched.
pub fn remove_import_lines(src: &str, symbol: &str) -> String {
    let word = word_regex(symbol);
    let kept: Vec<&str> = src
        .lines()
        .filter(|line| !(line.trim_start().starts_with("import") && word.is_match(line)))
        .collect();

    let mut result = kept.join("\n");
    if src.ends_with('\n') && !result.is_empty() {
        result.push('\n');
    }
    result
}

/// Remove `symbol` from the `field` array of the declaration block.
///
/// A missing field means there is nothing to remove and the text is returned
/// unchanged. Removal is delimiter-safe: the symbol is matched on word
/// boundaries together with at most one adjacent comma, and stray leading or
/// trailing commas are cleaned afterwards.
pub fn remove_entry(
    src: &str,
    marker: &str,
    field: &str,
    symbol: &str,
    file_name: &str,
) -> Result<String> {
    let block_start = match src.find(marker) {
        Some(idx) => idx,
        None => return Ok(src.to_string()),
    };
    let Some(field_idx) = src[block_start..].find(field).map(|i| i + block_start) else {
        return Ok(src.to_string());
    };
    let (open, close) = naive_bracket_span(src, field_idx)
        .ok_or_else(|| Error::missing_field_brackets(src, file_name, field, field_idx))?;

    let content = &src[open + 1..close];
    let pattern = Regex::new(&format!(r",?\s*\b{}\b\s*,?", regex::escape(symbol)))
        .expect("escaped symbol always forms a valid pattern");
    let replaced = pattern.replace(content, ",");
    let cleaned = clean_array_content(&replaced);

    Ok(format!("{} {} {}", &src[..=open], cleaned, &src[close..]))
}

fn word_regex(symbol: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(symbol)))
        .expect("escaped symbol always forms a valid pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "@Module(";

    #[test]
    fn test_remove_import_lines() {
        let src = "import { Module } from '@nestjs/common';\nimport { FooService } from 'src/foo/foo.service';\n\n@Module({})\n";
        let out = remove_import_lines(src, "FooService");

        assert!(!out.contains("FooService"));
        assert!(out.contains("import { Module }"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_remove_import_lines_is_word_bounded() {
        let src = "import { FooServiceV2 } from 'src/foo-v2/foo-v2.service';\n";
        let out = remove_import_lines(src, "FooService");

        assert_eq!(out, src);
    }

    #[test]
    fn test_remove_import_lines_leaves_non_imports() {
        let src = "const FooService = 1;\n";
        assert_eq!(remove_import_lines(src, "FooService"), src);
    }

    #[test]
    fn test_remove_entry_middle() {
        let src = "@Module({ providers: [A, FooService, B] })";
        let out = remove_entry(src, MARKER, "providers:", "FooService", "app.module.ts").unwrap();

        assert!(out.contains("A, B"));
        assert!(!out.contains("FooService"));
    }

    #[test]
    fn test_remove_entry_first_and_last() {
        let first = remove_entry(
            "@Module({ providers: [FooService, B] })",
            MARKER,
            "providers:",
            "FooService",
            "app.module.ts",
        )
        .unwrap();
        assert!(first.contains("[ B ]"));

        let last = remove_entry(
            "@Module({ providers: [A, FooService] })",
            MARKER,
            "providers:",
            "FooService",
            "app.module.ts",
        )
        .unwrap();
        assert!(last.contains("[ A ]"));
    }

    #[test]
    fn test_remove_entry_only_member() {
        let out = remove_entry(
            "@Module({ providers: [FooService] })",
            MARKER,
            "providers:",
            "FooService",
            "app.module.ts",
        )
        .unwrap();

        assert!(!out.contains("FooService"));
        assert!(out.contains("providers: ["));
    }

    #[test]
    fn test_remove_entry_word_bounded() {
        let src = "@Module({ providers: [FooServiceV2] })";
        let out = remove_entry(src, MARKER, "providers:", "FooService", "app.module.ts").unwrap();

        assert!(out.contains("FooServiceV2"));
    }

    #[test]
    fn test_remove_entry_missing_field_is_noop() {
        let src = "@Module({ controllers: [] })";
        let out = remove_entry(src, MARKER, "providers:", "FooService", "app.module.ts").unwrap();

        assert_eq!(out, src);
    }

    #[test]
    fn test_remove_entry_missing_marker_is_noop() {
        let src = "const x = 1;";
        assert_eq!(remove_entry(src, MARKER, "providers:", "X", "app.module.ts").unwrap(), src);
    }
}
