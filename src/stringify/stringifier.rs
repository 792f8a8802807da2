use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::error::StringifyError;

use super::{
    column::{Column, ColumnSpec},
    escape::{escape_text, escape_value},
    resolve::{resolve_path, structural_fields},
};

/// Byte order mark emitted before any other output when requested.
const BOM: char = '\u{feff}';

/// Line terminator for every emitted line, including the last one.
const CRLF: &str = "\r\n";

/// A configured CSV stringifier.
///
/// A stringifier is built once through [`CsvStringifierBuilder`], holds its
/// normalized columns, and can then stringify any number of record batches.
/// All methods take `&self`; the stringifier carries no mutable state, so
/// sharing one across threads needs no coordination.
///
/// # Examples
///
/// ```
/// use csv_stringify_rs::stringify::{ColumnSpec, CsvStringifierBuilder};
/// use serde_json::json;
///
/// # fn main() { example().unwrap(); }
/// fn example() -> Result<(), csv_stringify_rs::StringifyError> {
///     let records = vec![
///         json!({"age": 70, "name": {"first": "Rick", "last": "Sanchez"}}),
///         json!({"age": 14, "name": {"first": "Morty", "last": "Smith"}}),
///     ];
///
///     let stringifier = CsvStringifierBuilder::new()
///         .column(ColumnSpec::path(["name", "first"]))
///         .column("age")
///         .build()?;
///
///     assert_eq!(
///         stringifier.stringify(&records)?,
///         "first,age\r\nRick,70\r\nMorty,14\r\n"
///     );
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CsvStringifier {
    has_headers: bool,
    separator: String,
    columns: Vec<Column>,
    bom: bool,
}

impl CsvStringifier {
    /// Stringifies `records` into delimited text.
    ///
    /// The output starts with the BOM when enabled, followed by the header
    /// line when headers are enabled and at least one column is configured,
    /// followed by one line per record in input order. Every line,
    /// including the last, is terminated by CRLF.
    ///
    /// Without configured columns the stringifier runs in structural mode:
    /// array records spread into fields, scalar records become single-field
    /// rows, and object records fail with
    /// [`StringifyError::NoColumnsForObject`].
    ///
    /// # Returns
    /// - `Ok(String)` containing the complete output text
    /// - `Err(StringifyError)` on the first offending record; no partial
    ///   output is returned
    pub fn stringify(&self, records: &[Value]) -> Result<String, StringifyError> {
        debug!(
            "stringifying {} records with {} configured columns",
            records.len(),
            self.columns.len()
        );

        let mut output = String::new();

        if self.bom {
            output.push(BOM);
        }

        if self.has_headers && !self.columns.is_empty() {
            let headers: Vec<String> = self
                .columns
                .iter()
                .map(|column| escape_text(column.header(), &self.separator))
                .collect();
            output.push_str(&headers.join(&self.separator));
            output.push_str(CRLF);
        }

        for (position, record) in records.iter().enumerate() {
            let fields = self.record_fields(record, position)?;
            output.push_str(&fields.join(&self.separator));
            output.push_str(CRLF);
        }

        Ok(output)
    }

    /// Converts `items` to records through [`serde_json::to_value`] and
    /// stringifies them.
    ///
    /// This is the convenient entry point for plain Rust structs deriving
    /// [`Serialize`]; conversion failures surface as
    /// [`StringifyError::UnserializableItem`].
    ///
    /// # Examples
    ///
    /// ```
    /// use csv_stringify_rs::stringify::CsvStringifierBuilder;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Row<'a> {
    ///     city: &'a str,
    ///     population: u64,
    /// }
    ///
    /// # fn main() { example().unwrap(); }
    /// fn example() -> Result<(), csv_stringify_rs::StringifyError> {
    ///     let stringifier = CsvStringifierBuilder::new()
    ///         .column("city")
    ///         .column("population")
    ///         .build()?;
    ///
    ///     let text = stringifier.stringify_items(&[Row {
    ///         city: "Boston",
    ///         population: 4628910,
    ///     }])?;
    ///
    ///     assert_eq!(text, "city,population\r\nBoston,4628910\r\n");
    ///     Ok(())
    /// }
    /// ```
    pub fn stringify_items<T: Serialize>(&self, items: &[T]) -> Result<String, StringifyError> {
        let records = items
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()?;

        self.stringify(&records)
    }

    fn record_fields(&self, record: &Value, position: usize) -> Result<Vec<String>, StringifyError> {
        if self.columns.is_empty() {
            let values = structural_fields(record, position)?;
            return Ok(values
                .into_iter()
                .map(|value| escape_value(value, &self.separator))
                .collect());
        }

        let mut fields = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let value = resolve_path(record, column)?;
            fields.push(escape_value(value, &self.separator));
        }
        Ok(fields)
    }
}

impl Default for CsvStringifier {
    /// The all-defaults configuration: comma separator, headers enabled,
    /// no columns, no BOM.
    fn default() -> Self {
        Self {
            has_headers: true,
            separator: ",".to_string(),
            columns: Vec::new(),
            bom: false,
        }
    }
}

/// A builder for configuring CSV stringification.
///
/// # Default Configuration
///
/// - Separator: comma (,)
/// - Headers: enabled (the header line is still omitted while no columns
///   are configured)
/// - Columns: none (structural mode)
/// - BOM: disabled
///
/// # Examples
///
/// ```
/// use csv_stringify_rs::stringify::{ColumnSpec, CsvStringifierBuilder};
///
/// let stringifier = CsvStringifierBuilder::new()
///     .separator(";")
///     .has_headers(false)
///     .column(ColumnSpec::path(["name", "last"]).header("Last name"))
///     .build()
///     .unwrap();
/// # let _ = stringifier;
/// ```
#[derive(Debug, Clone)]
pub struct CsvStringifierBuilder {
    has_headers: bool,
    separator: String,
    columns: Vec<ColumnSpec>,
    bom: bool,
}

impl CsvStringifierBuilder {
    /// Creates a new `CsvStringifierBuilder` with default configuration.
    pub fn new() -> Self {
        Self {
            has_headers: true,
            separator: ",".to_string(),
            columns: Vec::new(),
            bom: false,
        }
    }

    /// Sets whether the output starts with a header line.
    ///
    /// A header line is only ever emitted when at least one column is
    /// configured; structural mode has no headers to derive.
    pub fn has_headers(mut self, yes: bool) -> Self {
        self.has_headers = yes;
        self
    }

    /// Sets the field separator string.
    ///
    /// Separators may span several characters but must not contain a
    /// double quote or the CRLF sequence; [`build`](Self::build) rejects
    /// such separators before any record is processed.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets whether a byte order mark precedes the output.
    ///
    /// Spreadsheet software tends to want one to detect the encoding.
    pub fn bom(mut self, yes: bool) -> Self {
        self.bom = yes;
        self
    }

    /// Appends one column specification.
    ///
    /// Accepts anything convertible into a [`ColumnSpec`]: a key, an
    /// index, or a spec built through [`ColumnSpec::path`].
    pub fn column(mut self, column: impl Into<ColumnSpec>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Appends a batch of column specifications, preserving order.
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ColumnSpec>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Validates the configuration and builds the stringifier.
    ///
    /// Column specifications are normalized here, once, in order.
    ///
    /// # Returns
    /// - `Ok(CsvStringifier)` on a valid configuration
    /// - `Err(StringifyError::InvalidSeparator)` when the separator
    ///   contains a double quote or CRLF
    /// - `Err(StringifyError::EmptyColumnPath)` when a column carries no
    ///   accessors
    pub fn build(self) -> Result<CsvStringifier, StringifyError> {
        if self.separator.contains('"') || self.separator.contains(CRLF) {
            return Err(StringifyError::InvalidSeparator(self.separator));
        }

        let columns = self
            .columns
            .into_iter()
            .enumerate()
            .map(|(position, spec)| spec.normalize(position))
            .collect::<Result<Vec<Column>, StringifyError>>()?;

        Ok(CsvStringifier {
            has_headers: self.has_headers,
            separator: self.separator,
            columns,
            bom: self.bom,
        })
    }
}

impl Default for CsvStringifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}
