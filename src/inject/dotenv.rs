//! `.env` defaults file: `KEY=VALUE` lines declaring which keys get injected.

use crate::error::InjectError;
use crate::runtime::RuntimeConfig;
use std::path::Path;

/// Parse `.env` text. Later duplicates override earlier ones.
pub fn parse(text: &str) -> Result<RuntimeConfig, InjectError> {
    let mut config = RuntimeConfig::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").map(str::trim_start).unwrap_or(line);

        let (key, rest) = line.split_once('=').ok_or_else(|| InjectError::Dotenv {
            line: line_no,
            message: "expected KEY=VALUE".to_string(),
        })?;
        let key = key.trim();
        if !is_valid_key(key) {
            return Err(InjectError::Dotenv {
                line: line_no,
                message: format!("invalid key '{}'", key),
            });
        }

        let value = parse_value(rest).map_err(|message| InjectError::Dotenv {
            line: line_no,
            message,
        })?;
        config.insert(key, value);
    }

    Ok(config)
}

/// Read and parse a `.env` file. A missing file declares no keys.
pub fn load(path: &Path) -> Result<RuntimeConfig, InjectError> {
    match std::fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No .env file, no keys declared");
            Ok(RuntimeConfig::new())
        }
        Err(source) => Err(InjectError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Shell-style identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `rest` is everything after `=`, untrimmed, so a comment directly after
/// the `=` still counts as whitespace-preceded.
fn parse_value(rest: &str) -> Result<String, String> {
    let quoted = rest.trim_start();
    if let Some(body) = quoted.strip_prefix('"') {
        let mut value = String::new();
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, other)) => value.push(other),
                    None => return Err("unterminated escape".to_string()),
                },
                '"' => {
                    ensure_trailing_comment(&body[i + 1..])?;
                    return Ok(value);
                }
                _ => value.push(c),
            }
        }
        return Err("unterminated double-quoted value".to_string());
    }

    if let Some(body) = quoted.strip_prefix('\'') {
        let end = body
            .find('\'')
            .ok_or_else(|| "unterminated single-quoted value".to_string())?;
        ensure_trailing_comment(&body[end + 1..])?;
        return Ok(body[..end].to_string());
    }

    let comment = rest
        .char_indices()
        .find(|&(i, c)| c == '#' && rest[..i].ends_with(|p: char| p == ' ' || p == '\t'))
        .map(|(i, _)| i);
    let value = match comment {
        Some(pos) => &rest[..pos],
        None => rest,
    };
    Ok(value.trim().to_string())
}

fn ensure_trailing_comment(tail: &str) -> Result<(), String> {
    let tail = tail.trim();
    if tail.is_empty() || tail.starts_with('#') {
        Ok(())
    } else {
        Err(format!("unexpected text after quoted value: '{}'", tail))
    }
}
