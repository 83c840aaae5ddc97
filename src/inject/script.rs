//! `env-config.js`: the script that assigns the injected object on the page.
//!
//! Written as `window.<global> = { ...json... };`. Reading also accepts the
//! shell-generated form with one `KEY: "value",` entry per line.

use crate::error::InjectError;
use crate::runtime::RuntimeConfig;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::ops::Range;
use std::path::Path;
use tracing::warn;

/// Render the script assigning `config` to `window.<global_name>`.
pub fn render(
    config: &RuntimeConfig,
    global_name: &str,
    generated_at: DateTime<Utc>,
) -> Result<String, InjectError> {
    let object: Map<String, Value> = config
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();
    let body = serde_json::to_string_pretty(&Value::Object(object))
        .map_err(|e| InjectError::Script(e.to_string()))?;

    Ok(format!(
        "// Generated by runenv at {}. Do not edit.\nwindow.{} = {};\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        global_name,
        body
    ))
}

/// Parse a script produced by [`render`] or by the shell form.
///
/// The last `window.<global> = {...}` statement outside a line comment wins;
/// text after its closing brace is ignored.
pub fn parse(text: &str, global_name: &str) -> Result<RuntimeConfig, InjectError> {
    let target = format!("window.{}", global_name);

    let mut assigned: Option<Option<&str>> = None;
    let mut resume = 0;
    for rhs_start in assignment_offsets(text, &target) {
        // Matches inside an already accepted literal are string contents.
        if rhs_start < resume {
            continue;
        }
        let literal = object_literal(&text[rhs_start..]).map(|span| {
            resume = rhs_start + span.end;
            &text[rhs_start + span.start..rhs_start + span.end]
        });
        assigned = Some(literal);
    }

    let literal = assigned
        .ok_or_else(|| InjectError::Script(format!("no assignment to {}", target)))?
        .ok_or_else(|| {
            InjectError::Script(format!("{} is not assigned an object literal", target))
        })?;

    match serde_json::from_str::<Value>(literal) {
        Ok(Value::Object(object)) => Ok(from_json_object(object)),
        Ok(_) => Err(InjectError::Script(format!("{} is not an object", target))),
        Err(_) => parse_shell_form(literal),
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Byte offsets just past the `=` of each assignment to `target` that is
/// not inside a line comment and not part of a longer identifier.
fn assignment_offsets<'a>(text: &'a str, target: &'a str) -> impl Iterator<Item = usize> + 'a {
    text.match_indices(target)
        .filter(move |(idx, _)| {
            let line_start = text[..*idx].rfind('\n').map(|i| i + 1).unwrap_or(0);
            !text[line_start..*idx].contains("//")
        })
        .filter(move |(idx, _)| !text[..*idx].chars().next_back().is_some_and(is_ident_char))
        .filter_map(move |(idx, _)| {
            let rest = text[idx + target.len()..].trim_start();
            let value = rest.strip_prefix('=')?;
            if value.starts_with('=') {
                return None;
            }
            Some(text.len() - value.len())
        })
}

/// Span of the `{...}` literal at the start of `rhs` (after whitespace), up
/// to its matching brace. Braces inside string literals are not counted.
fn object_literal(rhs: &str) -> Option<Range<usize>> {
    let start = rhs.len() - rhs.trim_start().len();
    if !rhs[start..].starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in rhs[start..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start..start + i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Load a script file. A missing file means no injection happened.
pub fn load(path: &Path, global_name: &str) -> Result<Option<RuntimeConfig>, InjectError> {
    match std::fs::read_to_string(path) {
        Ok(text) => parse(&text, global_name).map(Some),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Env script not found, treating as not injected");
            Ok(None)
        }
        Err(source) => Err(InjectError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn from_json_object(object: Map<String, Value>) -> RuntimeConfig {
    let mut config = RuntimeConfig::new();
    for (key, value) in object {
        match value {
            Value::String(s) => {
                config.insert(key, s);
            }
            other => {
                warn!(key = %key, kind = json_kind(&other), "Skipping non-string injected value");
            }
        }
    }
    config
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_shell_form(rhs: &str) -> Result<RuntimeConfig, InjectError> {
    let body = rhs
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| InjectError::Script("expected an object literal".to_string()))?;

    let mut config = RuntimeConfig::new();
    for line in body.lines() {
        let line = line.trim();
        let line = line.strip_suffix(',').unwrap_or(line).trim_end();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| InjectError::Script(format!("expected KEY: \"value\", got '{}'", line)))?;
        let key = unquote_key(key.trim());
        let value: String = serde_json::from_str(value.trim()).map_err(|_| {
            InjectError::Script(format!("value for '{}' must be a quoted string", key))
        })?;
        config.insert(key, value);
    }
    Ok(config)
}

fn unquote_key(key: &str) -> String {
    for quote in ['"', '\''] {
        if let Some(inner) = key.strip_prefix(quote).and_then(|k| k.strip_suffix(quote)) {
            return inner.to_string();
        }
    }
    key.to_string()
}
