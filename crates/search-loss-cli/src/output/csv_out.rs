use serde_json::{Map, Value};
use std::io;

use super::{cell, view_rows};

/// Write output as two-column `field,value` CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    for record in records(value) {
        let _ = wtr.write_record(&record);
    }

    let _ = wtr.flush();
}

fn records(value: &Value) -> Vec<[String; 2]> {
    let mut out = vec![["field".to_string(), "value".to_string()]];
    let Value::Object(map) = value else {
        out.push([String::new(), cell(value)]);
        return out;
    };

    if map.contains_key("fields") {
        out.extend(view_rows(map).into_iter().map(|[label, value, _]| [label, value]));
        for key in ["period_label", "loss", "monthly_loss", "annual_loss", "cta_url"] {
            if let Some(val) = map.get(key) {
                out.push([key.to_string(), cell(val)]);
            }
        }
    } else if let Some(Value::Object(result)) = map.get("result") {
        push_all(&mut out, result, "");
        if let Some(Value::Object(display)) = map.get("display") {
            push_all(&mut out, display, "display.");
        }
    } else {
        push_all(&mut out, map, "");
    }
    out
}

fn push_all(out: &mut Vec<[String; 2]>, map: &Map<String, Value>, prefix: &str) {
    for (key, val) in map {
        out.push([format!("{prefix}{key}"), cell(val)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_estimate_records_include_display() {
        let value = json!({
            "result": { "monthly_loss": "270600" },
            "display": { "monthly_loss": "$270,600" },
            "warnings": []
        });
        let rows = records(&value);
        assert_eq!(rows[0], ["field".to_string(), "value".to_string()]);
        assert!(rows.contains(&["monthly_loss".to_string(), "270600".to_string()]));
        assert!(rows.contains(&["display.monthly_loss".to_string(), "$270,600".to_string()]));
        assert!(!rows.iter().any(|[k, _]| k == "warnings"));
    }

    #[test]
    fn test_view_records_use_labels() {
        let value = json!({
            "fields": [{ "field": "monthly_visitors", "label": "Monthly Visitors", "value": "1,100,000" }],
            "loss": "$270,600"
        });
        let rows = records(&value);
        assert!(rows.contains(&["Monthly Visitors".to_string(), "1,100,000".to_string()]));
        assert!(rows.contains(&["loss".to_string(), "$270,600".to_string()]));
    }
}
