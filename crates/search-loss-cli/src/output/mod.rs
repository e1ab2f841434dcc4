pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Flatten a JSON scalar for a table cell or CSV field.
pub(crate) fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Rows of a rendered form view: (label, value, tooltip).
pub(crate) fn view_rows(view: &serde_json::Map<String, Value>) -> Vec<[String; 3]> {
    let Some(Value::Array(fields)) = view.get("fields") else {
        return Vec::new();
    };
    fields
        .iter()
        .filter_map(Value::as_object)
        .map(|f| {
            [
                f.get("label").map(cell).unwrap_or_default(),
                f.get("value").map(cell).unwrap_or_default(),
                f.get("tooltip").map(cell).unwrap_or_default(),
            ]
        })
        .collect()
}
