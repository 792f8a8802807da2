use thiserror::Error;

#[derive(Error, Debug)]
/// Stringify error
pub enum StringifyError {
    #[error("invalid separator {0:?}: separators must not contain a double quote or CRLF")]
    InvalidSeparator(String),

    #[error("column {0} has an empty accessor path")]
    EmptyColumnPath(usize),

    #[error("cannot index an array with key {key:?} while resolving column {header:?}")]
    ArrayIndexedByKey { header: String, key: String },

    #[error("record {0} is an object but no columns were configured")]
    NoColumnsForObject(usize),

    #[error("item could not be converted to a record: {0}")]
    UnserializableItem(#[from] serde_json::Error),
}
