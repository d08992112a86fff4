// File: crates/boostlog-core/src/error.rs
// Summary: Error types for ingestion, configuration, colors, and the load session.

use thiserror::Error;

/// Fatal outcomes of [`crate::ingest::parse`]. Bad cells are not errors; they
/// are counted in [`crate::ingest::ColumnStats`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no usable rows: input is empty, has no header, or has no data rows")]
    Empty,
    #[error("none of the expected columns [{}] appear in the header [{}]", expected.join(", "), found.join(", "))]
    NoMatchingColumns {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("series '{series}' targets unknown axis '{axis}'")]
    UnknownAxis { series: String, axis: String },
    #[error("{what} reads column '{column}', which is not declared in columns")]
    UnknownColumn { what: String, column: String },
    #[error("axis '{axis}' has fixed max {max} below its min {min}")]
    InvertedBounds { axis: String, min: f64, max: f64 },
    #[error("axis id '{0}' is declared more than once")]
    DuplicateAxis(String),
    #[error("axis '{axis}' has invalid headroom {headroom} (must be finite and > 0)")]
    InvalidHeadroom { axis: String, headroom: f64 },
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("decoding config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unrecognized color syntax '{0}'")]
    Syntax(String),
    #[error("color component '{0}' is out of range")]
    Component(String),
}

/// Outcomes of the load session that leave the displayed chart untouched.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("'{0}' is not a .csv file")]
    UnsupportedFile(String),
    #[error("a read of '{0}' is still in flight")]
    Busy(String),
    #[error("load of '{0}' was superseded by a newer file")]
    Superseded(String),
    #[error("no read is outstanding for ticket {0}")]
    UnknownTicket(u64),
    #[error("reading '{file}' failed: {reason}")]
    Read { file: String, reason: String },
    #[error("parsing '{file}' failed: {source}")]
    Parse {
        file: String,
        #[source]
        source: ParseError,
    },
}
