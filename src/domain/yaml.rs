//! YAML helpers shared by the configuration model and the group-variable writer.

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;

const INDENT: usize = 2;

/// Plain scalars that YAML 1.1 readers resolve to booleans or null.
const YAML11_RESERVED: [&str; 10] =
    ["y", "n", "yes", "no", "on", "off", "true", "false", "~", "null"];

/// Text form of a scalar usable as a name (mapping keys, host entries).
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Serialize a mapping as block-style YAML.
///
/// Nested mappings and sequences are both indented by two spaces, so list
/// items sit under their key instead of at the key's column. Key order is
/// the mapping's insertion order.
pub fn to_block_yaml(map: &Mapping) -> Result<String, AppError> {
    let mut out = String::new();
    write_mapping(&mut out, map, 0)?;
    Ok(out)
}

fn write_mapping(out: &mut String, map: &Mapping, indent: usize) -> Result<(), AppError> {
    for (key, value) in map {
        out.push_str(&" ".repeat(indent));
        out.push_str(&render_scalar(key, indent)?);
        out.push(':');
        write_node(out, value, indent)?;
    }
    Ok(())
}

fn write_sequence(out: &mut String, seq: &[Value], indent: usize) -> Result<(), AppError> {
    for item in seq {
        out.push_str(&" ".repeat(indent));
        out.push('-');
        match item {
            Value::Mapping(map) if !map.is_empty() => {
                let mut nested = String::new();
                write_mapping(&mut nested, map, indent + INDENT)?;
                out.push(' ');
                out.push_str(&nested[indent + INDENT..]);
            }
            Value::Sequence(inner) if !inner.is_empty() => {
                let mut nested = String::new();
                write_sequence(&mut nested, inner, indent + INDENT)?;
                out.push(' ');
                out.push_str(&nested[indent + INDENT..]);
            }
            other => write_node(out, other, indent)?,
        }
    }
    Ok(())
}

/// Write the value that follows a `key:` or `-` marker at `indent`.
fn write_node(out: &mut String, value: &Value, indent: usize) -> Result<(), AppError> {
    match value {
        Value::Mapping(map) if map.is_empty() => out.push_str(" {}\n"),
        Value::Sequence(seq) if seq.is_empty() => out.push_str(" []\n"),
        Value::Mapping(map) => {
            out.push('\n');
            write_mapping(out, map, indent + INDENT)?;
        }
        Value::Sequence(seq) => {
            out.push('\n');
            write_sequence(out, seq, indent + INDENT)?;
        }
        Value::Tagged(tagged) => {
            out.push(' ');
            out.push_str(&tagged.tag.to_string());
            write_node(out, &tagged.value, indent)?;
        }
        scalar => {
            out.push(' ');
            out.push_str(&render_scalar(scalar, indent)?);
            out.push('\n');
        }
    }
    Ok(())
}

/// Render a scalar through serde_yaml so quoting matches the YAML rules.
/// Continuation lines of block scalars are shifted under the owning node.
fn render_scalar(value: &Value, indent: usize) -> Result<String, AppError> {
    if let Value::String(text) = value {
        if is_yaml11_reserved(text) {
            return Ok(format!("'{text}'"));
        }
    }

    let rendered = serde_yaml::to_string(value)
        .map_err(|e| AppError::config_error(format!("Failed to serialize value: {}", e)))?;
    let rendered = rendered.trim_end_matches('\n');

    if indent == 0 || !rendered.contains('\n') {
        return Ok(rendered.to_string());
    }

    let pad = " ".repeat(indent);
    let mut lines = rendered.lines();
    let mut text = lines.next().unwrap_or_default().to_string();
    for line in lines {
        text.push('\n');
        if !line.is_empty() {
            text.push_str(&pad);
        }
        text.push_str(line);
    }
    Ok(text)
}

fn is_yaml11_reserved(text: &str) -> bool {
    YAML11_RESERVED.iter().any(|word| word.eq_ignore_ascii_case(text))
}
