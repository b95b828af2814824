use serde::Deserialize;

use crate::portrayal::ShapeTag;

/// The eight sprite variants: vehicle × load × mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteKind {
    DroneEmptySafe,
    DroneFilledSafe,
    DroneEmptyFast,
    DroneFilledFast,
    CarEmptySafe,
    CarFilledSafe,
    CarEmptyFast,
    CarFilledFast,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 8] = [
        SpriteKind::DroneEmptySafe,
        SpriteKind::DroneFilledSafe,
        SpriteKind::DroneEmptyFast,
        SpriteKind::DroneFilledFast,
        SpriteKind::CarEmptySafe,
        SpriteKind::CarFilledSafe,
        SpriteKind::CarEmptyFast,
        SpriteKind::CarFilledFast,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            SpriteKind::DroneEmptySafe => "drone_empty_safe",
            SpriteKind::DroneFilledSafe => "drone_filled_safe",
            SpriteKind::DroneEmptyFast => "drone_empty_fast",
            SpriteKind::DroneFilledFast => "drone_filled_fast",
            SpriteKind::CarEmptySafe => "car_empty_safe",
            SpriteKind::CarFilledSafe => "car_filled_safe",
            SpriteKind::CarEmptyFast => "car_empty_fast",
            SpriteKind::CarFilledFast => "car_filled_fast",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// File name in the stock picture set.
    pub fn default_file_name(self) -> String {
        format!("100_{}.png", self.tag())
    }
}

/// Arrow orientation; only the four cardinal headings have a layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Heading {
    /// (0, 1)
    Up,
    /// (1, 0)
    Right,
    /// (0, -1)
    Down,
    /// (-1, 0)
    Left,
}

impl Heading {
    pub fn from_components(hx: f64, hy: f64) -> Option<Self> {
        match (hx, hy) {
            (x, y) if x == 0.0 && y == 1.0 => Some(Heading::Up),
            (x, y) if x == 1.0 && y == 0.0 => Some(Heading::Right),
            (x, y) if x == 0.0 && y == -1.0 => Some(Heading::Down),
            (x, y) if x == -1.0 && y == 0.0 => Some(Heading::Left),
            _ => None,
        }
    }
}

/// What a `Shape` field dispatches to.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Rect,
    Circle,
    ArrowHead,
    Sprite(SpriteKind),
    /// Color-array shape: a hospital glyph with these sub-box colors.
    Hospital(Vec<String>),
    /// Unrecognized tag; drawn as a hospital with the entity's colors.
    Unknown(String),
}

impl ShapeKind {
    pub fn classify(tag: &ShapeTag) -> Self {
        match tag {
            ShapeTag::Colors(colors) => ShapeKind::Hospital(colors.clone()),
            ShapeTag::Tag(t) => match t.as_str() {
                "rect" => ShapeKind::Rect,
                "circle" => ShapeKind::Circle,
                "arrowHead" => ShapeKind::ArrowHead,
                other => match SpriteKind::from_tag(other) {
                    Some(kind) => ShapeKind::Sprite(kind),
                    None => ShapeKind::Unknown(other.to_string()),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_known_tag() {
        let tag = |s: &str| ShapeKind::classify(&ShapeTag::Tag(s.into()));
        assert_eq!(tag("rect"), ShapeKind::Rect);
        assert_eq!(tag("circle"), ShapeKind::Circle);
        assert_eq!(tag("arrowHead"), ShapeKind::ArrowHead);
        for kind in SpriteKind::ALL {
            assert_eq!(tag(kind.tag()), ShapeKind::Sprite(kind));
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        let kind = ShapeKind::classify(&ShapeTag::Tag("Rect".into()));
        assert_eq!(kind, ShapeKind::Unknown("Rect".into()));
    }

    #[test]
    fn color_array_is_hospital() {
        let kind = ShapeKind::classify(&ShapeTag::Colors(vec!["Red".into()]));
        assert_eq!(kind, ShapeKind::Hospital(vec!["Red".into()]));
    }

    #[test]
    fn only_cardinal_headings() {
        assert_eq!(Heading::from_components(0.0, 1.0), Some(Heading::Up));
        assert_eq!(Heading::from_components(-1.0, 0.0), Some(Heading::Left));
        assert_eq!(Heading::from_components(0.7, 0.7), None);
        assert_eq!(Heading::from_components(0.0, 0.0), None);
    }

    #[test]
    fn default_file_names() {
        assert_eq!(SpriteKind::CarFilledFast.default_file_name(), "100_car_filled_fast.png");
    }
}
