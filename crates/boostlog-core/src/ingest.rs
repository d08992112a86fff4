// File: crates/boostlog-core/src/ingest.rs
// Summary: CSV ingestion: decode bytes, key records by header, and project configured columns into numeric series.
// Notes:
// - Cells that are blank/absent or not finite numbers become `None`; they are
//   counted per column and never abort the parse.
// - Records where every field is blank are skipped and do not count as rows.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ParseError;

/// One expected column: its canonical name plus alternative header spellings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), aliases: Vec::new() }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Index of the first header matching the name, else the first matching alias.
    fn locate(&self, headers: &[String]) -> Option<usize> {
        std::iter::once(&self.name)
            .chain(self.aliases.iter())
            .map(|want| normalize_header(want))
            .find_map(|want| headers.iter().position(|h| *h == want))
    }
}

/// The set of columns the pipeline extracts, in output order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSpec {
    pub columns: Vec<ColumnDef>,
}

impl ColumnSpec {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self { columns }
    }

    /// Spec with plain names and no aliases.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { columns: names.into_iter().map(ColumnDef::new).collect() }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ColumnStats {
    /// Non-blank cells whose text is not a finite number.
    pub coercion_failures: usize,
    /// Blank cells and cells absent from short records.
    pub missing: usize,
}

/// One extracted column, index-aligned with every other column of the table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NumericColumn {
    pub name: String,
    /// Header text as it appeared in the file.
    pub header: String,
    pub values: Vec<Option<f64>>,
    pub stats: ColumnStats,
}

impl NumericColumn {
    fn new(name: String, header: String) -> Self {
        Self { name, header, values: Vec::new(), stats: ColumnStats::default() }
    }

    fn push_cell(&mut self, cell: Option<&str>) {
        let value = match cell.map(str::trim) {
            None | Some("") => {
                self.stats.missing += 1;
                None
            }
            Some(text) => match text.parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => {
                    self.stats.coercion_failures += 1;
                    None
                }
            },
        };
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of a successful parse.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParsedTable {
    pub row_count: usize,
    columns: Vec<NumericColumn>,
    /// Expected columns that no header matched.
    pub unmatched: Vec<String>,
}

impl ParsedTable {
    pub fn column(&self, name: &str) -> Option<&NumericColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn values(&self, name: &str) -> Option<&[Option<f64>]> {
        self.column(name).map(|c| c.values.as_slice())
    }

    /// Matched columns in spec order.
    pub fn columns(&self) -> &[NumericColumn] {
        &self.columns
    }

    pub fn total_coercion_failures(&self) -> usize {
        self.columns.iter().map(|c| c.stats.coercion_failures).sum()
    }
}

/// Decode file bytes the way a browser text read does: lossy UTF-8, BOM stripped.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}

pub fn parse_bytes(bytes: &[u8], spec: &ColumnSpec) -> Result<ParsedTable, ParseError> {
    parse(&decode_text(bytes), spec)
}

/// Parse header-row CSV text and extract the columns named by `spec`.
pub fn parse(raw_text: &str, spec: &ColumnSpec) -> Result<ParsedTable, ParseError> {
    if raw_text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw_text.as_bytes());

    let raw_headers = rdr.headers()?.clone();
    let headers = raw_headers.iter().map(normalize_header).collect::<Vec<_>>();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(ParseError::Empty);
    }
    debug!(?headers, "csv header");

    let mut bound: Vec<(usize, NumericColumn)> = Vec::new();
    let mut unmatched = Vec::new();
    for def in &spec.columns {
        match def.locate(&headers) {
            Some(ix) => {
                let header = raw_headers.get(ix).unwrap_or_default().to_string();
                bound.push((ix, NumericColumn::new(def.name.clone(), header)));
            }
            None => unmatched.push(def.name.clone()),
        }
    }
    if bound.is_empty() {
        return Err(ParseError::NoMatchingColumns {
            expected: spec.names().map(str::to_string).collect(),
            found: raw_headers.iter().map(str::to_string).collect(),
        });
    }

    let mut row_count = 0usize;
    let mut record = csv::StringRecord::new();
    while rdr.read_record(&mut record)? {
        if record.iter().all(str::is_empty) {
            continue;
        }
        for (ix, column) in bound.iter_mut() {
            column.push_cell(record.get(*ix));
        }
        row_count += 1;
    }
    if row_count == 0 {
        return Err(ParseError::Empty);
    }

    let columns = bound.into_iter().map(|(_, c)| c).collect::<Vec<_>>();
    for c in &columns {
        if c.stats.coercion_failures > 0 {
            warn!(column = %c.name, failures = c.stats.coercion_failures, "non-numeric cells replaced by gaps");
        }
    }
    if !unmatched.is_empty() {
        warn!(?unmatched, "expected columns missing from header");
    }
    debug!(rows = row_count, columns = columns.len(), "csv parsed");

    Ok(ParsedTable { row_count, columns, unmatched })
}

fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase()
}
