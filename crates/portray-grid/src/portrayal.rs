//! Wire model for portrayal frames.
//!
//! Field names follow what agent models emit (`Shape`, `Color`, `Filled`,
//! `Layer`, `matrixIndex`, `Suppliers`); lower-case spellings are accepted as
//! aliases. Unrecognized fields are kept in [`PortrayalEntity::extra`] and show
//! up in hover descriptions.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Site;

/// The `Shape` field: a tag, or the color list of a hospital glyph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ShapeTag {
    Tag(String),
    Colors(Vec<String>),
}

impl Default for ShapeTag {
    fn default() -> Self {
        ShapeTag::Tag(String::new())
    }
}

/// The `Color` field: one color or an ordered list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    One(String),
    Many(Vec<String>),
}

impl ColorSpec {
    /// A single value becomes a one-element list.
    pub fn normalized(&self) -> Vec<String> {
        match self {
            ColorSpec::One(c) => vec![c.clone()],
            ColorSpec::Many(cs) => cs.clone(),
        }
    }

    /// The value as the model sent it, e.g. `"red"` or `["red", "blue"]`.
    pub fn raw(&self) -> String {
        match self {
            ColorSpec::One(c) => c.clone(),
            ColorSpec::Many(cs) => format!("{cs:?}"),
        }
    }
}

/// One portrayed agent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortrayalEntity {
    #[serde(rename = "Shape", alias = "shape", default)]
    pub shape: ShapeTag,

    pub x: i64,
    /// Bottom-up grid row.
    pub y: i64,

    #[serde(rename = "Color", alias = "color", default)]
    pub color: Option<ColorSpec>,
    #[serde(default)]
    pub stroke_color: Option<String>,
    #[serde(rename = "Filled", alias = "filled", default, deserialize_with = "flag")]
    pub filled: bool,

    #[serde(default)]
    pub w: Option<f32>,
    #[serde(default)]
    pub h: Option<f32>,
    #[serde(default)]
    pub r: Option<f32>,
    #[serde(default)]
    pub heading_x: Option<f64>,
    #[serde(default)]
    pub heading_y: Option<f64>,
    #[serde(default)]
    pub scale: Option<f32>,

    #[serde(default, deserialize_with = "label")]
    pub text: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,

    #[serde(rename = "matrixIndex", alias = "matrix_index", default, deserialize_with = "label")]
    pub matrix_index: Option<String>,
    #[serde(rename = "Suppliers", alias = "suppliers", default)]
    pub suppliers: Option<Value>,
    #[serde(rename = "Layer", alias = "layer", default)]
    pub layer: Option<Value>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PortrayalEntity {
    /// Minimal entity at `(x, y)`; mostly for tests and tools.
    pub fn new(shape: ShapeTag, x: i64, y: i64) -> Self {
        Self {
            shape,
            x,
            y,
            color: None,
            stroke_color: None,
            filled: false,
            w: None,
            h: None,
            r: None,
            heading_x: None,
            heading_y: None,
            scale: None,
            text: None,
            text_color: None,
            matrix_index: None,
            suppliers: None,
            layer: None,
            extra: BTreeMap::new(),
        }
    }

    /// Normalized color list (empty when `Color` is absent).
    pub fn colors(&self) -> Vec<String> {
        self.color.as_ref().map(ColorSpec::normalized).unwrap_or_default()
    }

    /// One-line summary of the non-geometric properties, for hover display.
    pub fn describe(&self) -> String {
        let mut out = match &self.shape {
            ShapeTag::Tag(t) if !t.is_empty() => t.clone(),
            ShapeTag::Tag(_) => "entity".to_string(),
            ShapeTag::Colors(_) => "hospital".to_string(),
        };
        if let Some(id) = &self.matrix_index {
            let _ = write!(out, " #{id}");
        }
        if let Some(text) = &self.text {
            let _ = write!(out, " \"{text}\"");
        }
        if let Some(s) = &self.suppliers {
            let _ = write!(out, " suppliers={s}");
        }
        for (k, v) in &self.extra {
            let _ = write!(out, " {k}={v}");
        }
        out
    }
}

/// An entity that could not be read; the rest of its layer still draws.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedEntity {
    /// Position in the layer as sent, counting rejected entities.
    pub site: Site,
    pub reason: String,
}

/// One frame: layers drawn in order, later layers on top.
///
/// Accepts either a JSON array of layers or an object keyed by layer number.
/// Keyed layers are ordered by numeric key; non-numeric keys follow,
/// lexicographically. Entities are read one by one: a malformed entity is
/// left out of its layer and kept in [`Frame::rejected`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "FrameWire")]
pub struct Frame {
    pub layers: Vec<Vec<PortrayalEntity>>,
    pub rejected: Vec<RejectedEntity>,
}

impl Frame {
    pub fn new(layers: Vec<Vec<PortrayalEntity>>) -> Self {
        Self { layers, rejected: Vec::new() }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Entities that were read successfully.
    pub fn entity_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    fn from_raw_layers(raw: Vec<Vec<Value>>) -> Self {
        let mut frame = Frame::default();
        for (layer, values) in raw.into_iter().enumerate() {
            let mut entities = Vec::with_capacity(values.len());
            for (index, value) in values.into_iter().enumerate() {
                match serde_json::from_value::<PortrayalEntity>(value) {
                    Ok(entity) => entities.push(entity),
                    Err(e) => frame.rejected.push(RejectedEntity {
                        site: Site { layer, index },
                        reason: e.to_string(),
                    }),
                }
            }
            frame.layers.push(entities);
        }
        frame
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FrameWire {
    Layers(Vec<Vec<Value>>),
    Keyed(BTreeMap<String, Vec<Value>>),
}

impl From<FrameWire> for Frame {
    fn from(wire: FrameWire) -> Self {
        match wire {
            FrameWire::Layers(layers) => Frame::from_raw_layers(layers),
            FrameWire::Keyed(map) => {
                let mut keyed: Vec<(String, Vec<Value>)> = map.into_iter().collect();
                keyed.sort_by(|(a, _), (b, _)| layer_key_order(a, b));
                Frame::from_raw_layers(keyed.into_iter().map(|(_, l)| l).collect())
            }
        }
    }
}

fn layer_key_order(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

// ── lenient scalar fields ─────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagWire {
    Bool(bool),
    Num(f64),
    Text(String),
}

/// `Filled` arrives as a bool, a number or a string such as `"true"`.
fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let wire = Option::<FlagWire>::deserialize(d)?;
    Ok(match wire {
        None => false,
        Some(FlagWire::Bool(b)) => b,
        Some(FlagWire::Num(n)) => n != 0.0 && !n.is_nan(),
        Some(FlagWire::Text(s)) => {
            let s = s.trim();
            !(s.is_empty() || s.eq_ignore_ascii_case("false") || s == "0")
        }
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelWire {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Labels may be strings or numbers.
fn label<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<LabelWire>::deserialize(d)?.map(|l| match l {
        LabelWire::Text(s) => s,
        LabelWire::Int(i) => i.to_string(),
        LabelWire::Float(f) => f.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(json: &str) -> PortrayalEntity {
        serde_json::from_str(json).unwrap()
    }

    // ── entities ──────────────────────────────────────────────────────────

    #[test]
    fn wire_names_and_aliases_are_accepted() {
        let a = entity(r#"{"Shape":"rect","x":1,"y":2,"Color":"red","Filled":"true","w":0.5,"h":0.5}"#);
        let b = entity(r#"{"shape":"rect","x":1,"y":2,"color":"red","filled":true,"w":0.5,"h":0.5}"#);
        assert_eq!(a, b);
        assert!(a.filled);
        assert_eq!(a.shape, ShapeTag::Tag("rect".into()));
    }

    #[test]
    fn scalar_color_normalizes_to_one_element_list() {
        let e = entity(r#"{"Shape":"circle","x":0,"y":0,"Color":"blue"}"#);
        assert_eq!(e.colors(), vec!["blue".to_string()]);
        let e = entity(r#"{"Shape":"circle","x":0,"y":0,"Color":["blue","red"]}"#);
        assert_eq!(e.colors(), vec!["blue".to_string(), "red".to_string()]);
    }

    #[test]
    fn hospital_shape_is_a_color_array() {
        let e = entity(r#"{"Shape":["Red","Grey","Grey"],"x":3,"y":4,"w":18,"h":8,"matrixIndex":"12","Layer":2}"#);
        assert_eq!(e.shape, ShapeTag::Colors(vec!["Red".into(), "Grey".into(), "Grey".into()]));
        assert_eq!(e.matrix_index.as_deref(), Some("12"));
        assert_eq!(e.w, Some(18.0));
    }

    #[test]
    fn numeric_labels_become_strings() {
        let e = entity(r#"{"Shape":["Red"],"x":0,"y":0,"matrixIndex":7,"text":1.5}"#);
        assert_eq!(e.matrix_index.as_deref(), Some("7"));
        assert_eq!(e.text.as_deref(), Some("1.5"));
    }

    #[test]
    fn filled_flag_variants() {
        let f = |v: &str| entity(&format!(r#"{{"x":0,"y":0,"Filled":{v}}}"#)).filled;
        assert!(f("true"));
        assert!(f("1"));
        assert!(f(r#""yes""#));
        assert!(!f(r#""false""#));
        assert!(!f("0"));
        assert!(!f("null"));
    }

    #[test]
    fn unknown_fields_are_kept_for_description() {
        let e = entity(r#"{"Shape":"car_empty_safe","x":0,"y":0,"status":"Idle"}"#);
        assert_eq!(e.extra.get("status"), Some(&Value::from("Idle")));
        assert_eq!(e.describe(), "car_empty_safe status=\"Idle\"");
    }

    // ── frames ────────────────────────────────────────────────────────────

    #[test]
    fn frame_from_array_of_layers() {
        let f = Frame::from_json(r#"[[{"x":0,"y":0}],[{"x":1,"y":1},{"x":2,"y":2}]]"#).unwrap();
        assert_eq!(f.layers.len(), 2);
        assert_eq!(f.entity_count(), 3);
    }

    #[test]
    fn keyed_frame_orders_layers_numerically() {
        let f = Frame::from_json(
            r#"{"10":[{"x":10,"y":0}],"2":[{"x":2,"y":0}],"b":[{"x":-1,"y":0}],"1":[{"x":1,"y":0}]}"#,
        )
        .unwrap();
        let firsts: Vec<i64> = f.layers.iter().map(|l| l[0].x).collect();
        assert_eq!(firsts, vec![1, 2, 10, -1]);
    }

    #[test]
    fn malformed_entity_is_rejected_alone() {
        let f = Frame::from_json(
            r#"[[{"Shape":"rect","x":0,"y":0,"Color":"red","Filled":true},
                 {"Shape":"circle","x":2,"y":2,"Color":123},
                 {"Shape":"circle","x":3,"y":3,"r":"0.5"},
                 {"Shape":"circle","y":4}],
                [{"Shape":"circle","x":5,"y":5}]]"#,
        )
        .unwrap();
        assert_eq!(f.layers.len(), 2);
        assert_eq!(f.layers[0].len(), 1);
        assert_eq!(f.layers[0][0].x, 0);
        assert_eq!(f.layers[1].len(), 1);

        let sites: Vec<Site> = f.rejected.iter().map(|r| r.site).collect();
        assert_eq!(
            sites,
            vec![Site { layer: 0, index: 1 }, Site { layer: 0, index: 2 }, Site { layer: 0, index: 3 }]
        );
        assert!(f.rejected[2].reason.contains("`x`"), "{}", f.rejected[2].reason);
    }

    #[test]
    fn keyed_frame_rejects_by_sorted_layer() {
        let f = Frame::from_json(r#"{"7":[{"x":"no","y":0}],"3":[{"x":1,"y":1}]}"#).unwrap();
        assert_eq!(f.entity_count(), 1);
        assert_eq!(f.rejected[0].site, Site { layer: 1, index: 0 });
    }

    #[test]
    fn empty_frame_forms() {
        assert_eq!(Frame::from_json("[]").unwrap().layers.len(), 0);
        assert_eq!(Frame::from_json("{}").unwrap().layers.len(), 0);
    }
}
