use crate::{
    error::{Error, Result},
    scan::naive_bracket_span,
};

/// Trim an array body and strip stray leading/trailing commas.
pub fn clean_array_content(content: &str) -> String {
    let trimmed = content.trim();
    let trimmed = trimmed.strip_prefix(',').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed);
    trimmed.trim().to_string()
}

/// Ensure `entry` is registered in the `field` array of the declaration block.
///
/// The block is located by the first occurrence of `marker`. A missing field
/// is created as a singleton array before the block's first closing brace; an
/// existing field has the entry appended unless it is already present.
/// Membership is an exact comma-separated comparison, so an entry is never
/// mistaken for a longer name it happens to prefix.
///
/// Only the field's bracket span is touched; surrounding formatting is left
/// for the formatter pass.
pub fn sync_entry(
    src: &str,
    marker: &str,
    field: &str,
    entry: &str,
    file_name: &str,
) -> Result<String> {
    let block_start = src
        .find(marker)
        .ok_or_else(|| Error::missing_marker(src, file_name, marker))?;

    let Some(field_idx) = src[block_start..].find(field).map(|i| i + block_start) else {
        // No such field yet: create it just before the block closes.
        let block_close = src[block_start..]
            .find('}')
            .map(|i| i + block_start)
            .ok_or_else(|| Error::missing_block_end(src, file_name, marker, block_start))?;
        return Ok(format!(
            "{}\n  {} [{}],{}",
            &src[..block_close],
            field,
            entry,
            &src[block_close..]
        ));
    };

    let (open, close) = naive_bracket_span(src, field_idx)
        .ok_or_else(|| Error::missing_field_brackets(src, file_name, field, field_idx))?;

    let current = clean_array_content(&src[open + 1..close]);
    if contains_entry(&current, entry) {
        return Ok(src.to_string());
    }

    let merged = if current.is_empty() {
        entry.to_string()
    } else {
        format!("{}, {}", current, entry)
    };
    Ok(format!("{} {} {}", &src[..=open], merged, &src[close..]))
}

fn contains_entry(cleaned: &str, entry: &str) -> bool {
    cleaned.split(',').any(|item| item.trim() == entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "@Module(";

    fn sync(src: &str, field: &str, entry: &str) -> String {
        sync_entry(src, MARKER, field, entry, "app.module.ts").unwrap()
    }

    #[test]
    fn test_appends_to_empty_array() {
        let src = "@Module({ controllers: [] })";
        let out = sync(src, "controllers:", "FooController");

        assert!(out.contains("FooController"));
        assert_eq!(out.matches("FooController").count(), 1);
    }

    #[test]
    fn test_appends_to_populated_array() {
        let src = "@Module({ providers: [AppService] })";
        let out = sync(src, "providers:", "FooService");

        assert!(out.contains("AppService, FooService"));
    }

    #[test]
    fn test_creates_missing_field() {
        let src = "@Module({\n  controllers: [AppController],\n})\nexport class AppModule {}\n";
        let out = sync(src, "providers:", "FooService");

        assert!(out.contains("providers: [FooService],"));
        assert!(out.contains("controllers: [AppController],"));
    }

    #[test]
    fn test_idempotent() {
        let src = "@Module({ providers: [] })";
        let once = sync(src, "providers:", "FooService");
        let twice = sync(&once, "providers:", "FooService");

        assert_eq!(once, twice);
        assert_eq!(twice.matches("FooService").count(), 1);
    }

    #[test]
    fn test_entry_not_shadowed_by_longer_name() {
        // "Foo" must not count as present just because "FooBar" is registered.
        let src = "@Module({ providers: [FooBarService] })";
        let out = sync(src, "providers:", "FooService");

        assert!(out.contains("FooBarService, FooService"));
    }

    #[test]
    fn test_cleans_stray_commas_before_append() {
        let src = "@Module({ providers: [AppService, ] })";
        let out = sync(src, "providers:", "FooService");

        assert!(out.contains("AppService, FooService"));
        assert!(!out.contains(", ,"));
    }

    #[test]
    fn test_missing_marker_errors() {
        let err = sync_entry("const x = 1;", MARKER, "providers:", "X", "app.module.ts")
            .unwrap_err();
        assert!(matches!(*err, Error::MissingMarker { .. }));
    }

    #[test]
    fn test_missing_block_end_errors() {
        let err = sync_entry("@Module({", MARKER, "providers:", "X", "app.module.ts")
            .unwrap_err();
        assert!(matches!(*err, Error::MissingBlockEnd { .. }));
    }

    #[test]
    fn test_missing_field_brackets_errors() {
        let err = sync_entry(
            "@Module({ providers: nope })",
            MARKER,
            "providers:",
            "X",
            "app.module.ts",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::MissingFieldBrackets { .. }));
    }

    #[test]
    fn test_field_before_marker_is_ignored() {
        let src = "// providers: [Old]\n@Module({ providers: [] })";
        let out = sync(src, "providers:", "FooService");

        assert!(out.contains("[ FooService ]"));
        assert!(out.contains("// providers: [Old]"));
    }

    #[test]
    fn test_clean_array_content() {
        assert_eq!(clean_array_content("  A, B  "), "A, B");
        assert_eq!(clean_array_content(", A,"), "A");
        assert_eq!(clean_array_content("   "), "");
    }
}
