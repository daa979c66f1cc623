//! Scan program construction
//!
//! A [`ScanProgram`] is a plain value describing an outward sweep from a
//! center point. Channels interpret it where the page lives; nothing here
//! talks to a browser.

use crate::error::{BrowserError, Result};
use crate::finder::geometry::{BoundingBox, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of points sampled per scan
pub const SCAN_STEPS: usize = 300;

/// Distance in pixels between consecutive samples on the axis sweeps
pub const STEP_PX: f64 = 10.0;

/// Angle increment (radians) and radius growth per step of the spiral
pub const GOLDEN_STEP: f64 = 0.381966;

/// Direction to sweep from the reference element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
    Above,
    Below,
    /// Golden-angle spiral around the center
    Near,
}

impl Direction {
    pub const ALL: [Direction; 5] =
        [Direction::Right, Direction::Left, Direction::Above, Direction::Below, Direction::Near];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "RIGHT",
            Direction::Left => "LEFT",
            Direction::Above => "ABOVE",
            Direction::Below => "BELOW",
            Direction::Near => "NEAR",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown direction '{}', expected one of right, left, above, below, near", s))
    }
}

/// Offset of a sample point relative to the scan center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

/// Bounded outward scan for the first element with a given tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanProgram {
    pub center: Point,
    pub direction: Direction,
    pub tag: String,
    pub max_steps: usize,
    pub step: f64,
    pub golden_step: f64,
}

impl ScanProgram {
    /// Build the scan for `tag` around `center`
    pub fn build(center: Point, direction: Direction, tag: &str) -> Result<Self> {
        let tag = validate_tag(tag)?;

        Ok(Self {
            center,
            direction,
            tag: tag.to_string(),
            max_steps: SCAN_STEPS,
            step: STEP_PX,
            golden_step: GOLDEN_STEP,
        })
    }

    /// Offset sampled at step `i` (0-indexed)
    pub fn offset(&self, i: usize) -> Offset {
        let distance = self.step * i as f64;

        match self.direction {
            Direction::Right => Offset { dx: distance, dy: 0.0 },
            Direction::Left => Offset { dx: -distance, dy: 0.0 },
            Direction::Below => Offset { dx: 0.0, dy: distance },
            Direction::Above => Offset { dx: 0.0, dy: -distance },
            Direction::Near => {
                let angle = self.golden_step * i as f64;
                let radius = self.step + angle;
                Offset { dx: radius * angle.cos(), dy: radius * angle.sin() }
            }
        }
    }

    /// All offsets of the scan, in scan order
    pub fn offsets(&self) -> impl Iterator<Item = Offset> + '_ {
        (0..self.max_steps).map(move |i| self.offset(i))
    }

    /// Absolute page coordinates sampled at step `i`
    pub fn query_point(&self, i: usize) -> (f64, f64) {
        let offset = self.offset(i);
        (self.center.x as f64 + offset.dx, self.center.y as f64 + offset.dy)
    }

    /// Whether an element tag name satisfies the scan's termination predicate
    pub fn matches_tag(&self, tag_name: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag_name)
    }

    /// JSON payload handed to a remote interpreter
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| BrowserError::EvaluationFailed(format!("Failed to encode scan: {}", e)))
    }
}

/// Center point of a reference box
pub fn center_of(bbox: &BoundingBox) -> Point {
    bbox.center()
}

pub(crate) fn validate_tag(tag: &str) -> Result<&str> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return Err(BrowserError::InvalidTag(tag.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn program(direction: Direction) -> ScanProgram {
        ScanProgram::build(Point::new(125, 215), direction, "BUTTON").unwrap()
    }

    #[test]
    fn test_axis_offsets() {
        let cases = [
            (Direction::Right, 1.0, 0.0),
            (Direction::Left, -1.0, 0.0),
            (Direction::Below, 0.0, 1.0),
            (Direction::Above, 0.0, -1.0),
        ];

        for (direction, ux, uy) in cases {
            let program = program(direction);
            for (i, offset) in program.offsets().enumerate() {
                let expected = 10.0 * i as f64;
                assert_eq!(offset.dx, ux * expected, "{} dx at step {}", direction, i);
                assert_eq!(offset.dy, uy * expected, "{} dy at step {}", direction, i);
            }
        }
    }

    #[test]
    fn test_scan_is_bounded() {
        for direction in Direction::ALL {
            assert_eq!(program(direction).offsets().count(), SCAN_STEPS);
        }
    }

    #[test]
    fn test_step_zero_offsets() {
        for direction in Direction::ALL {
            let offset = program(direction).offset(0);
            let radius = (offset.dx * offset.dx + offset.dy * offset.dy).sqrt();
            // the spiral starts at the base radius on the x axis
            assert!(radius <= STEP_PX + EPS, "{} starts too far out", direction);
        }
        assert_eq!(program(Direction::Right).offset(0), Offset { dx: 0.0, dy: 0.0 });
    }

    #[test]
    fn test_near_spiral_formula() {
        let program = program(Direction::Near);
        for i in 0..SCAN_STEPS {
            let a = 0.381966 * i as f64;
            let offset = program.offset(i);
            assert!((offset.dx - (10.0 + a) * a.cos()).abs() < EPS);
            assert!((offset.dy - (10.0 + a) * a.sin()).abs() < EPS);
        }
    }

    #[test]
    fn test_near_angle_increment() {
        let program = program(Direction::Near);
        let angle = |i: usize| {
            let o = program.offset(i);
            let radius = 10.0 + GOLDEN_STEP * i as f64;
            // recover the unwrapped angle from the radius-normalized offset
            (o.dy / radius).atan2(o.dx / radius)
        };

        for i in 1..20 {
            let mut delta = angle(i) - angle(i - 1);
            if delta < 0.0 {
                delta += std::f64::consts::TAU;
            }
            assert!((delta - GOLDEN_STEP).abs() < 1e-9, "step {} delta {}", i, delta);
        }
    }

    #[test]
    fn test_near_first_step() {
        let offset = program(Direction::Near).offset(1);
        assert!((offset.dx - 9.63).abs() < 0.01, "dx = {}", offset.dx);
        assert!((offset.dy - 3.86).abs() < 0.01, "dy = {}", offset.dy);
    }

    #[test]
    fn test_right_scenario_query_point() {
        let bbox = BoundingBox::new(100.0, 200.0, 50.0, 30.0);
        let program = ScanProgram::build(center_of(&bbox), Direction::Right, "BUTTON").unwrap();

        assert_eq!(program.center, Point::new(125, 215));
        assert_eq!(program.offset(3), Offset { dx: 30.0, dy: 0.0 });
        assert_eq!(program.query_point(3), (155.0, 215.0));
    }

    #[test]
    fn test_matches_tag_case_insensitive() {
        let program = ScanProgram::build(Point::new(0, 0), Direction::Below, "input").unwrap();
        assert!(program.matches_tag("INPUT"));
        assert!(program.matches_tag("Input"));
        assert!(!program.matches_tag("TEXTAREA"));
    }

    #[test]
    fn test_build_rejects_blank_tag() {
        let err = ScanProgram::build(Point::new(0, 0), Direction::Left, "  ").unwrap_err();
        assert!(matches!(err, BrowserError::InvalidTag(_)));
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(program(Direction::Near), program(Direction::Near));
    }

    #[test]
    fn test_direction_parse_and_display() {
        assert_eq!("right".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("NEAR".parse::<Direction>().unwrap(), Direction::Near);
        assert_eq!(" Above ".parse::<Direction>().unwrap(), Direction::Above);
        assert!("diagonal".parse::<Direction>().is_err());
        assert_eq!(Direction::Below.to_string(), "BELOW");
    }

    #[test]
    fn test_program_json_payload() {
        let json: serde_json::Value = serde_json::from_str(&program(Direction::Left).to_json().unwrap()).unwrap();

        assert_eq!(json["direction"], "left");
        assert_eq!(json["tag"], "BUTTON");
        assert_eq!(json["center"]["x"], 125);
        assert_eq!(json["max_steps"], 300);
        assert_eq!(json["step"], 10.0);
        assert_eq!(json["golden_step"], 0.381966);
    }
}
