//! Lua module serialization.
//!
//! Renders a soundbank as a named local table literal followed by a return
//! statement, the module shape Dynamic Music loads, and persists it with an
//! unconditional overwrite.

use std::fmt::Write as _;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{SoundBank, TrackEntry};

const INDENT: &str = "  ";

const LUA_KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
    "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Render the complete module text.
pub fn render(bank: &SoundBank) -> String {
    let mut out = String::from("local soundBank = {\n");
    push_kv(&mut out, 1, "id", &Value::String(bank.id.clone()));
    for (key, value) in &bank.pattern_fields {
        push_kv(&mut out, 1, key, value);
    }
    if let Some(tracks) = &bank.tracks {
        push_track_list(&mut out, 1, "tracks", tracks);
    }
    if let Some(tracks) = &bank.combat_tracks {
        push_track_list(&mut out, 1, "combatTracks", tracks);
    }
    out.push_str("}\nreturn soundBank\n");
    out
}

/// Serialize and persist, overwriting any existing file at `path`.
pub fn write(path: &Path, bank: &SoundBank) -> Result<()> {
    std::fs::write(path, render(bank)).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn push_kv(out: &mut String, level: usize, key: &str, value: &Value) {
    push_indent(out, level);
    out.push_str(&lua_key(key));
    out.push_str(" = ");
    push_value(out, level, value);
    out.push_str(",\n");
}

fn push_value(out: &mut String, level: usize, value: &Value) {
    match value {
        Value::Null => out.push_str("nil"),
        Value::Bool(b) => {
            let _ = write!(out, "{b}");
        }
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::String(s) => push_quoted(out, s),
        Value::Array(items) if items.is_empty() => out.push_str("{}"),
        Value::Array(items) => {
            out.push_str("{\n");
            for item in items {
                push_indent(out, level + 1);
                push_value(out, level + 1, item);
                out.push_str(",\n");
            }
            push_indent(out, level);
            out.push('}');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            for (key, item) in map {
                push_kv(out, level + 1, key, item);
            }
            push_indent(out, level);
            out.push('}');
        }
    }
}

fn push_track_list(out: &mut String, level: usize, key: &str, tracks: &[TrackEntry]) {
    push_indent(out, level);
    out.push_str(key);
    if tracks.is_empty() {
        out.push_str(" = {},\n");
        return;
    }
    out.push_str(" = {\n");
    for track in tracks {
        push_indent(out, level + 1);
        out.push_str("{\n");
        push_indent(out, level + 2);
        out.push_str("path = ");
        push_quoted(out, &track.path);
        out.push_str(",\n");
        push_indent(out, level + 2);
        let _ = writeln!(out, "length = {},", track.length);
        push_indent(out, level + 1);
        out.push_str("},\n");
    }
    push_indent(out, level);
    out.push_str("},\n");
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

fn push_quoted(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\{}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Keys that are valid Lua identifiers are written bare; anything else is
/// bracket-quoted.
fn lua_key(key: &str) -> String {
    let identifier = !key.is_empty()
        && !key.chars().next().is_some_and(|c| c.is_ascii_digit())
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !LUA_KEYWORDS.contains(&key);
    if identifier {
        key.to_string()
    } else {
        let mut quoted = String::from("[");
        push_quoted(&mut quoted, key);
        quoted.push(']');
        quoted
    }
}
