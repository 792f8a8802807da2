use serde_json::Value;

use crate::error::StringifyError;

use super::column::{Accessor, Column};

/// Walks `record` along the column's accessor path and returns the value
/// the path reaches, or `None` when it dead-ends on a missing key or an
/// out-of-range index.
///
/// Traversal is forgiving on shape: stepping into a scalar stops the walk
/// and the last reached value stands. The single hard failure is a string
/// key applied to an array, which aborts the whole call.
pub fn resolve_path<'a>(
    record: &'a Value,
    column: &Column,
) -> Result<Option<&'a Value>, StringifyError> {
    let mut current = Some(record);

    for accessor in column.path() {
        let Some(value) = current else {
            // Nothing left to traverse; the field resolves as absent.
            break;
        };

        match value {
            Value::Array(items) => {
                let Accessor::Index(index) = accessor else {
                    return Err(StringifyError::ArrayIndexedByKey {
                        header: column.header().to_string(),
                        key: accessor.to_string(),
                    });
                };
                current = items.get(*index);
            }
            Value::Object(fields) => {
                current = match accessor {
                    Accessor::Key(key) => fields.get(key),
                    // Integer accessors read the matching decimal property.
                    Accessor::Index(index) => fields.get(&index.to_string()),
                };
            }
            // Scalars end the walk; the last reached value stands.
            _ => break,
        }
    }

    Ok(current)
}

/// Splits a record into fields when no columns were configured.
///
/// Array records contribute their elements in order, scalars become a
/// single-field row, and object records are rejected since there is no
/// accessor to address them with. `position` is the zero-based index of
/// the record in the input.
pub fn structural_fields(
    record: &Value,
    position: usize,
) -> Result<Vec<Option<&Value>>, StringifyError> {
    match record {
        Value::Array(items) => Ok(items.iter().map(Some).collect()),
        Value::Object(_) => Err(StringifyError::NoColumnsForObject(position)),
        scalar => Ok(vec![Some(scalar)]),
    }
}
