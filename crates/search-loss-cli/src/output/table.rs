use colored::Colorize;
use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{cell, view_rows};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) if map.contains_key("fields") => print_view(map),
        Value::Object(map) if map.contains_key("result") => print_estimate(map),
        Value::Object(map) => print_flat_object(map),
        _ => println!("{}", cell(value)),
    }
}

fn print_view(view: &Map<String, Value>) {
    let text = |key: &str| view.get(key).map(cell).unwrap_or_default();

    println!("{}", text("title").bold());
    println!("{}\n", text("intro"));

    let mut builder = Builder::default();
    for row in view_rows(view) {
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));

    println!("\n{} ({})", text("result_heading"), text("period_label"));
    println!("{}", text("loss").red().bold());
    println!("{}\n", text("result_blurb"));
    println!("{} {}", text("cta_text").bold(), text("cta_url").underline());
}

fn print_estimate(envelope: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    if let Some(Value::Object(result)) = envelope.get("result") {
        for (key, val) in result {
            builder.push_record([key.as_str(), &cell(val)]);
        }
    }
    if let Some(Value::Object(display)) = envelope.get("display") {
        for (key, val) in display {
            builder.push_record([format!("display.{key}"), cell(val)]);
        }
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\n{}", "Warnings:".yellow());
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_flat_object(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &cell(val)]);
    }
    println!("{}", Table::from(builder));
}
