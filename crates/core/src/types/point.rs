use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Screen coordinate in desktop space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance between two points.
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// `true` when `other` lies within `tolerance` (inclusive) of `self`.
    pub fn is_close_to(self, other: Point, tolerance: f64) -> bool {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected point 'x,y', got '{0}'")]
pub struct ParsePointError(String);

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePointError(value.to_owned());
        let (x, y) = value.split_once(',').ok_or_else(invalid)?;
        let x: f64 = x.trim().parse().map_err(|_| invalid())?;
        let y: f64 = y.trim().parse().map_err(|_| invalid())?;
        let point = Point::new(x, y);
        if point.is_finite() { Ok(point) } else { Err(invalid()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Point::new(0.0, 0.0), Point::new(3.0, 4.0), 5.0)]
    #[case(Point::new(-1.0, -1.0), Point::new(-1.0, -1.0), 0.0)]
    #[case(Point::new(10.0, 0.0), Point::new(0.0, 0.0), 10.0)]
    fn distance_is_euclidean(#[case] a: Point, #[case] b: Point, #[case] expected: f64) {
        assert!((a.distance_to(b) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(Point::new(0.6, 0.8), true)]
    #[case(Point::new(0.7, 0.8), false)]
    #[case(Point::new(-1.0, 0.0), true)]
    fn closeness_uses_inclusive_radius(#[case] other: Point, #[case] close: bool) {
        assert_eq!(Point::ORIGIN.is_close_to(other, 1.0), close);
    }

    #[rstest]
    #[case("10,20", Point::new(10.0, 20.0))]
    #[case(" -5.5 , 7 ", Point::new(-5.5, 7.0))]
    fn parses_comma_separated_points(#[case] input: &str, #[case] expected: Point) {
        assert_eq!(input.parse::<Point>().unwrap(), expected);
    }

    #[rstest]
    #[case("10")]
    #[case("a,b")]
    #[case("inf,0")]
    fn rejects_malformed_points(#[case] input: &str) {
        let err = input.parse::<Point>().unwrap_err();
        assert!(err.to_string().contains(input));
    }

    #[rstest]
    fn serializes_as_xy_object() {
        let json = serde_json::to_string(&Point::new(1.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    }
}
