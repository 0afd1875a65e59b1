use std::sync::LazyLock;

use regex::Regex;

use crate::Value;

static SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)(?:-([0-9]+))?").expect("pattern is valid"));

/// Most integers a single `FROM-TO` span expands to
pub const MAX_SPAN: u64 = 65_536;

/// Expand `range` input into the integers it names
///
/// Scalars and lists alike are joined with `,` and scanned for ASCII `N` and `FROM-TO`; anything
/// else is ignored.  Spans are inclusive and may count down.  A span is cut off after
/// [`MAX_SPAN`] integers, and a span whose end does not fit an `i64` keeps only its start.
///
/// ```rust
/// use argdef::expand_range;
/// use argdef::Value;
///
/// let expanded = expand_range(&Value::from("3-1,7"));
/// assert_eq!(expanded, Value::from(vec![3_i64, 2, 1, 7]));
/// ```
pub fn expand_range(value: &Value) -> Value {
    let text = value.to_string();
    let mut expanded = Vec::new();
    for caps in SPAN.captures_iter(&text) {
        let Ok(from) = caps[1].parse::<i64>() else {
            tracing::debug!(number = &caps[1], "range number out of bounds, skipped");
            continue;
        };
        match caps.get(2).map(|to| to.as_str().parse::<i64>()) {
            None => expanded.push(Value::Number(from)),
            Some(Ok(to)) => {
                let to = clamp(from, to);
                if from <= to {
                    expanded.extend((from..=to).map(Value::Number));
                } else {
                    expanded.extend((to..=from).rev().map(Value::Number));
                }
            }
            Some(Err(_)) => {
                tracing::debug!(from, "range end out of bounds, keeping start");
                expanded.push(Value::Number(from));
            }
        }
    }
    Value::List(expanded)
}

/// Pull `to` toward `from` so the span holds at most [`MAX_SPAN`] integers
fn clamp(from: i64, to: i64) -> i64 {
    if from.abs_diff(to) < MAX_SPAN {
        return to;
    }
    tracing::warn!(from, to, "range span truncated to {MAX_SPAN} integers");
    let last = (MAX_SPAN - 1) as i64;
    if from < to {
        from + last
    } else {
        from - last
    }
}
