//! Tabular stringification of heterogeneous records.
//!
//! This module converts a sequence of in-memory records, each a
//! [`serde_json::Value`] object, array or scalar, into delimited text
//! with configurable column selection, header derivation, separator and
//! an optional byte order mark.
//!
//! # Module Architecture
//!
//! The pipeline is a single synchronous pass over four leaves:
//!
//! 1. **[`column`]**: caller-supplied [`ColumnSpec`]s are normalized once
//!    into `{header, path}` pairs, preserving order.
//! 2. **[`resolve`]**: each column's accessor path is walked against each
//!    record; dead-ends resolve as absent rather than failing.
//! 3. **[`escape`]**: each resolved value is rendered as one field, quoted
//!    when it contains the separator, a line feed or a double quote.
//! 4. **[`stringifier`]**: the [`CsvStringifier`] orchestrates the above,
//!    joining fields with the separator and terminating every line with
//!    CRLF.
//!
//! The stringifier follows the builder pattern for configuration, and the
//! whole transformation is pure: no I/O, no shared state, nothing to clean
//! up.
//!
//! # Examples
//!
//! ```
//! use csv_stringify_rs::stringify::CsvStringifierBuilder;
//! use serde_json::json;
//!
//! // Structural mode: no columns configured, array records spread into
//! // fields and special characters force quoting.
//! let stringifier = CsvStringifierBuilder::new().build().unwrap();
//! let text = stringifier.stringify(&[json!(["a", "b,c"])]).unwrap();
//!
//! assert_eq!(text, "a,\"b,c\"\r\n");
//! ```

/// Column specifications and their normalized form.
pub mod column;

/// Field-level escaping and quoting rules.
pub mod escape;

/// Per-record value resolution against normalized columns.
pub mod resolve;

/// The stringifier itself and its builder.
pub mod stringifier;

// Re-export the main types for easier access
pub use column::{Accessor, Column, ColumnSpec};
pub use stringifier::{CsvStringifier, CsvStringifierBuilder};
