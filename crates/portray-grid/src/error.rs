use std::fmt;

use thiserror::Error;

/// Where in a frame an entity sits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Site {
    pub layer: usize,
    pub index: usize,
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer {} entity {}", self.layer, self.index)
    }
}

/// Non-fatal problem met while drawing a frame. Drawing always continues
/// with the next entity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderIssue {
    #[error("{site}: unknown shape tag {tag:?}, drawn as hospital")]
    InvalidShapeTag { site: Site, tag: String },

    #[error("{site}: cell ({x}, {y}) lies outside the grid")]
    OutOfRangeCoordinate { site: Site, x: i64, y: i64 },

    #[error("asset {asset:?} is not ready, placeholder drawn")]
    AssetNotReady { asset: String },

    #[error("{site}: heading ({heading_x}, {heading_y}) is not cardinal, arrow skipped")]
    UnsupportedHeading { site: Site, heading_x: f64, heading_y: f64 },

    #[error("{site}: {reason}")]
    InvalidColor { site: Site, reason: String },

    #[error("{site}: malformed entity skipped: {reason}")]
    MalformedEntity { site: Site, reason: String },
}

impl RenderIssue {
    /// Stable short name, used for grouping in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderIssue::InvalidShapeTag { .. } => "invalid_shape_tag",
            RenderIssue::OutOfRangeCoordinate { .. } => "out_of_range_coordinate",
            RenderIssue::AssetNotReady { .. } => "asset_not_ready",
            RenderIssue::UnsupportedHeading { .. } => "unsupported_heading",
            RenderIssue::InvalidColor { .. } => "invalid_color",
            RenderIssue::MalformedEntity { .. } => "malformed_entity",
        }
    }
}

/// Renderer construction failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("invalid grid size {width}x{height}")]
    InvalidGrid { width: u32, height: u32 },
}

/// What happened while rendering one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub layers: usize,
    /// Entities that produced drawing; skipped arrows and malformed
    /// entities are not counted.
    pub entities: usize,
    pub issues: Vec<RenderIssue>,
}

impl FrameReport {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.issues.iter().filter(|i| i.kind() == kind).count()
    }

    pub(crate) fn push(&mut self, issue: RenderIssue) {
        log::debug!("{issue}");
        self.issues.push(issue);
    }

    /// Like `push`, but drops an identical issue already reported this frame.
    pub(crate) fn push_once(&mut self, issue: RenderIssue) {
        if !self.issues.contains(&issue) {
            self.push(issue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_messages_name_the_site() {
        let issue = RenderIssue::InvalidShapeTag {
            site: Site { layer: 1, index: 4 },
            tag: "tank".into(),
        };
        assert_eq!(issue.to_string(), "layer 1 entity 4: unknown shape tag \"tank\", drawn as hospital");
        assert_eq!(issue.kind(), "invalid_shape_tag");
    }

    #[test]
    fn report_counts_by_kind() {
        let site = Site { layer: 0, index: 0 };
        let mut report = FrameReport::default();
        assert!(report.is_clean());
        report.push(RenderIssue::AssetNotReady { asset: "bg".into() });
        report.push(RenderIssue::InvalidColor { site, reason: "bad".into() });
        report.push(RenderIssue::AssetNotReady { asset: "car".into() });
        assert_eq!(report.count("asset_not_ready"), 2);
        assert_eq!(report.count("invalid_color"), 1);
        assert!(!report.is_clean());
    }
}
