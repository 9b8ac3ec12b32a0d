use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for descriptor edits (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("declaration block marker '{marker}' not found")]
    #[diagnostic(
        code(sprig::missing_marker),
        help("the descriptor must contain exactly one declaration block")
    )]
    MissingMarker {
        #[source_code]
        src: NamedSource<String>,
        marker: String,
    },

    #[error("could not find the end of the declaration block")]
    #[diagnostic(code(sprig::missing_block_end))]
    MissingBlockEnd {
        #[source_code]
        src: NamedSource<String>,
        #[label("block opened by this marker never closes")]
        span: SourceSpan,
        marker: String,
    },

    #[error("could not parse the '{field}' array")]
    #[diagnostic(
        code(sprig::missing_field_brackets),
        help("the field must be followed by a bracket-delimited list")
    )]
    MissingFieldBrackets {
        #[source_code]
        src: NamedSource<String>,
        #[label("no bracket pair after this field")]
        span: SourceSpan,
        field: String,
    },
}

impl Error {
    pub(crate) fn missing_marker(src: &str, file_name: &str, marker: &str) -> Box<Self> {
        Box::new(Error::MissingMarker {
            src: NamedSource::new(file_name, src.to_string()),
            marker: marker.to_string(),
        })
    }

    pub(crate) fn missing_block_end(
        src: &str,
        file_name: &str,
        marker: &str,
        at: usize,
    ) -> Box<Self> {
        Box::new(Error::MissingBlockEnd {
            src: NamedSource::new(file_name, src.to_string()),
            span: (at, marker.len()).into(),
            marker: marker.to_string(),
        })
    }

    pub(crate) fn missing_field_brackets(
        src: &str,
        file_name: &str,
        field: &str,
        at: usize,
    ) -> Box<Self> {
        Box::new(Error::MissingFieldBrackets {
            src: NamedSource::new(file_name, src.to_string()),
            span: (at, field.len()).into(),
            field: field.to_string(),
        })
    }
}
