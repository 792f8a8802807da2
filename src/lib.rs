//#![warn(missing_docs)]

/*!
 # CSV Stringify for Rust

 A small, synchronous CSV stringifier for heterogeneous in-memory records.
 It turns a slice of [`serde_json::Value`]s, or of anything implementing
 [`serde::Serialize`], into delimited text with configurable column
 selection, header derivation, separator and an optional byte order mark.

 ## Core Concepts

 - **Record:** one input item, a [`serde_json::Value`]. Objects are
   addressed by key, arrays by index, and everything else is a scalar.
 - **Accessor:** a string key or integer index used to step into a record.
 - **ColumnSpec:** a caller-supplied column: a bare accessor, a path of
   accessors into nested records, or either with an explicit display
   header.
 - **CsvStringifier:** the configured pipeline. Built once through its
   builder, it normalizes columns up front and then resolves, escapes and
   joins each record's fields.

 Without any configured columns the stringifier runs in *structural mode*:
 array records spread into fields, scalars become single-field rows, and
 object records are rejected since there is nothing to address them with.

 ## Getting Started

```rust
use csv_stringify_rs::stringify::{ColumnSpec, CsvStringifierBuilder};
use serde_json::json;

# fn main() { example().unwrap(); }
fn example() -> Result<(), csv_stringify_rs::StringifyError> {
    let records = vec![
        json!({"age": 70, "name": {"first": "Rick", "last": "Sanchez"}}),
        json!({"age": 14, "name": {"first": "Morty", "last": "Smith"}}),
    ];

    let stringifier = CsvStringifierBuilder::new()
        .column(ColumnSpec::path(["name", "first"]))
        .column("age")
        .build()?;

    assert_eq!(
        stringifier.stringify(&records)?,
        "first,age\r\nRick,70\r\nMorty,14\r\n"
    );

    Ok(())
}
```

 ## Output Format

 - Every line, including the last, ends with CRLF.
 - A field is quoted iff it contains the separator, a line feed or a
   double quote; embedded double quotes are doubled.
 - Absent and null values render as empty fields; objects and arrays embed
   as compact JSON.
 - The header line appears iff headers are enabled and at least one column
   is configured.

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Stringification pipeline: columns, resolution, escaping, orchestration
pub mod stringify;

/// Error types for stringify operations
pub mod error;

#[doc(inline)]
pub use error::*;
