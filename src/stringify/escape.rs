use serde_json::Value;

const QUOTE: char = '"';
const LF: char = '\n';

/// Renders one resolved value as a single field.
///
/// Absent and null values become the empty field. Objects and arrays are
/// embedded as compact JSON. Strings use their content verbatim; numbers
/// and booleans use their canonical text form. Everything except the empty
/// field is then subject to the quoting rule of [`escape_text`].
pub fn escape_value(value: Option<&Value>, separator: &str) -> String {
    let text = match value {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        // Value's Display emits compact JSON for objects and arrays.
        Some(structured) => structured.to_string(),
    };

    escape_text(&text, separator)
}

/// Quotes `text` when it contains the separator, a line feed or a double
/// quote; embedded double quotes are escaped by doubling. A carriage
/// return on its own never triggers quoting.
pub fn escape_text(text: &str, separator: &str) -> String {
    if text.contains(separator) || text.contains(LF) || text.contains(QUOTE) {
        format!("\"{}\"", text.replace(QUOTE, "\"\""))
    } else {
        text.to_string()
    }
}
