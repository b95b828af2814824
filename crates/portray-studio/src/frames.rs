use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use portray_grid::Frame;
use serde_json::Value;

/// Reads a frames file.
pub fn load_frames(path: &Path) -> Result<Vec<Frame>> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_frames(&text).with_context(|| format!("failed to parse frames from {}", path.display()))
}

/// Accepts a single frame, a JSON array of frames, or JSON lines with one
/// frame per line.
pub fn parse_frames(text: &str) -> Result<Vec<Frame>> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return frames_from_value(value);
    }

    let mut frames = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let frame = Frame::from_json(line).with_context(|| format!("line {}", n + 1))?;
        frames.push(frame);
    }
    if frames.is_empty() {
        bail!("no frames found");
    }
    Ok(frames)
}

fn frames_from_value(value: Value) -> Result<Vec<Frame>> {
    if holds_frames(&value) {
        Ok(serde_json::from_value::<Vec<Frame>>(value)?)
    } else {
        Ok(vec![serde_json::from_value::<Frame>(value)?])
    }
}

/// An array holds frames when an element is a keyed frame or a list of
/// layers. Otherwise its elements are layers, so `[]` and `[[], []]` are
/// single frames.
fn holds_frames(value: &Value) -> bool {
    value.as_array().is_some_and(|items| {
        items.iter().any(|item| match item {
            Value::Object(_) => true,
            Value::Array(layers) => layers.iter().any(Value::is_array),
            _ => false,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_of_frames() {
        let frames = parse_frames(r#"[[[{"Shape":"rect","x":0,"y":0}]], []]"#).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].entity_count(), 1);
        assert_eq!(frames[1].entity_count(), 0);
    }

    #[test]
    fn single_keyed_frame() {
        let frames = parse_frames(r#"{"0":[{"Shape":"circle","x":1,"y":1}]}"#).unwrap();
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn json_lines_skip_blank_lines() {
        let text = "[[{\"Shape\":\"rect\",\"x\":0,\"y\":0}]]\n\n{\"1\":[]}\n";
        let frames = parse_frames(text).unwrap();
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn empty_layers_are_one_frame() {
        let frames = parse_frames("[[],[]]").unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].layers.len(), 2);

        let frames = parse_frames("[]").unwrap();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].layers.is_empty());
    }

    #[test]
    fn array_of_keyed_frames() {
        let frames = parse_frames(r#"[{"0":[{"x":0,"y":0}]},{"0":[]}]"#).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].entity_count(), 1);
    }

    #[test]
    fn malformed_entity_keeps_the_frame() {
        let frames =
            parse_frames(r#"[[{"Shape":"rect","x":0,"y":0},{"Shape":"circle","x":2,"y":2,"Color":123}]]"#).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].entity_count(), 1);
        assert_eq!(frames[0].rejected.len(), 1);
    }

    #[test]
    fn bad_line_is_an_error() {
        let err = parse_frames("[[]]\nnot json\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }
}
