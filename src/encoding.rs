use anyhow::{Context, Result};
use serde_json::Value;

/// Render one shaped message for stdout.
pub fn render(msg: &Value, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(msg)?
    } else {
        serde_json::to_string(msg)?
    };
    Ok(out)
}

/// Render messages as newline-delimited JSON (one compact object per line).
pub fn render_ndjson(msgs: &[Value]) -> Result<String> {
    let mut out = String::new();
    for msg in msgs {
        out.push_str(&serde_json::to_string(msg)?);
        out.push('\n');
    }
    Ok(out)
}

/// Split batch input into individual params values.
///
/// Accepts either a single JSON array, or newline-delimited JSON values
/// (blank lines skipped). Items are returned as-is; shaping decides whether
/// each one is usable.
///
/// The whole input is only read as an array when it is exactly one JSON
/// array; an NDJSON stream whose first line happens to be an array falls
/// through to line mode.
pub fn parse_batch(raw: &str) -> Result<Vec<Value>> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
        return Ok(items);
    }

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("failed to parse NDJSON line {}", i + 1))
        })
        .collect()
}
