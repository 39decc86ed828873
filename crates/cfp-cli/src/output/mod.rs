use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns promoted to the front of issue-style tables, in order.
const PREFERRED_COLUMNS: [&str; 8] = [
    "ticket_id",
    "id",
    "title",
    "status",
    "category",
    "submitted_at",
    "updated_at",
    "count",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => render_array_table(&items, options),
        Value::Object(map) => {
            let headers = ["field", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_rows(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_rows(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> anyhow::Result<String> {
    if items.is_empty() {
        return Ok(String::from("(no rows)"));
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return Ok(table::render_rows(&headers, &rows, options));
    }

    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        return Ok(String::from("(no columns)"));
    }

    order_columns(&mut headers);

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Ok(table::render_rows(&header_refs, &rows, options))
}

/// Well-known issue columns come first, everything else alphabetically after.
fn order_columns(headers: &mut Vec<String>) {
    let rank = |name: &str| {
        PREFERRED_COLUMNS
            .iter()
            .position(|known| *known == name)
            .unwrap_or(PREFERRED_COLUMNS.len())
    };
    headers.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.len().to_string() + " item(s)",
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{order_columns, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        ticket_id: &'static str,
        title: &'static str,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            ticket_id: "AB12CD34",
            title: "Broken projector",
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["ticket_id"], "AB12CD34");
        assert_eq!(parsed["title"], "Broken projector");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            ticket_id: "AB12CD34",
            title: "Broken projector",
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["ticket_id"], "AB12CD34");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_tabular() {
        let value = Example {
            ticket_id: "AB12CD34",
            title: "Broken projector",
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("field")));
        assert!(out.contains("ticket_id"));
        assert!(out.contains("Broken projector"));
    }

    #[test]
    fn issue_columns_are_promoted_to_the_front() {
        let mut headers = vec![
            "category".to_string(),
            "admission_number".to_string(),
            "title".to_string(),
            "ticket_id".to_string(),
            "description".to_string(),
        ];
        order_columns(&mut headers);
        assert_eq!(
            headers,
            vec!["ticket_id", "title", "category", "admission_number", "description"]
        );
    }
}
