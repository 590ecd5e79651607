//! Change summaries for audit entries

use serde_json::Value;

/// Bookkeeping fields left out of change summaries
const IGNORED_FIELDS: &[&str] = &["updated_at"];

/// Describe the top-level fields that differ between two records
///
/// Values are shown as stored, so amounts appear in cents. Returns `None`
/// when nothing but bookkeeping fields changed.
pub fn summarize_changes(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                if IGNORED_FIELDS.contains(&key.as_str()) {
                    continue;
                }
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => {
                        changes.push(format!("{}: {} -> (removed)", key, format_value(before_val)))
                    }
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) && !IGNORED_FIELDS.contains(&key.as_str()) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            changes
        }
        _ if before != after => vec![format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}
