use serde_json::Value;

use super::cell;

/// Print just the headline figure.
///
/// A rendered view prints its selected-period loss, a format or sanitize
/// answer prints its single value, an estimate prints the raw monthly loss.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(value));
}

fn headline(value: &Value) -> String {
    let Value::Object(map) = value else {
        return cell(value);
    };
    for key in ["loss", "formatted", "value"] {
        if let Some(val) = map.get(key) {
            return cell(val);
        }
    }
    if let Some(Value::Object(result)) = map.get("result") {
        if let Some(monthly) = result.get("monthly_loss") {
            return cell(monthly);
        }
    }
    map.iter()
        .next()
        .map(|(key, val)| format!("{}: {}", key, cell(val)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_headline_priority() {
        assert_eq!(headline(&json!({ "loss": "$270,600", "value": "x" })), "$270,600");
        assert_eq!(headline(&json!({ "formatted": "R$ 1" })), "R$ 1");
        assert_eq!(
            headline(&json!({ "result": { "monthly_loss": "270600" } })),
            "270600"
        );
        assert_eq!(headline(&json!({ "other": 3 })), "other: 3");
    }
}
