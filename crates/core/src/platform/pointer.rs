use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A name that does not belong to one of the closed argument sets
/// (buttons, scroll units, gesture directions).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} `{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }
}

/// Mouse or pointing device buttons.
///
/// `Other` carries the raw button ordinal understood by the backend
/// (0 = left, 1 = right, 2 = center, 3.. = extra buttons).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub enum ClickButton {
    #[default]
    Left,
    Right,
    Center,
    Other(u16),
}

impl ClickButton {
    /// Button ordinal as used by the OS event subtype.
    pub const fn ordinal(self) -> u16 {
        match self {
            ClickButton::Left => 0,
            ClickButton::Right => 1,
            ClickButton::Center => 2,
            ClickButton::Other(n) => n,
        }
    }

    /// Maps well-known ordinals back onto the named variants.
    pub const fn from_ordinal(ordinal: u16) -> Self {
        match ordinal {
            0 => ClickButton::Left,
            1 => ClickButton::Right,
            2 => ClickButton::Center,
            n => ClickButton::Other(n),
        }
    }
}

impl FromStr for ClickButton {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" | "primary" => Ok(ClickButton::Left),
            "right" | "secondary" => Ok(ClickButton::Right),
            "center" | "middle" => Ok(ClickButton::Center),
            other => other
                .parse::<u16>()
                .map(ClickButton::from_ordinal)
                .map_err(|_| UnknownVariant::new("button", value)),
        }
    }
}

/// Semantic unit carried by a scroll-wheel event.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub enum ScrollUnit {
    #[default]
    Line,
    Pixel,
}

impl FromStr for ScrollUnit {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "line" | "lines" => Ok(ScrollUnit::Line),
            "pixel" | "pixels" => Ok(ScrollUnit::Pixel),
            _ => Err(UnknownVariant::new("scroll unit", value)),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub enum ScrollAxis {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    /// Cursor motion with no button held.
    Move,
    /// Cursor motion while `button` is held.
    Drag,
    Down,
    Up,
}

/// A single low-level pointer event handed to an [`InputSink`](super::InputSink).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub point: Point,
    pub button: ClickButton,
    /// Click-state field; 1 for ordinary presses, `n` for the n-th click of a
    /// multi-click.
    pub click_count: u32,
}

impl PointerEvent {
    pub const fn new(kind: PointerEventKind, point: Point, button: ClickButton) -> Self {
        Self { kind, point, button, click_count: 1 }
    }

    pub const fn moved(point: Point) -> Self {
        Self::new(PointerEventKind::Move, point, ClickButton::Left)
    }

    pub const fn dragged(point: Point, button: ClickButton) -> Self {
        Self::new(PointerEventKind::Drag, point, button)
    }

    pub const fn down(point: Point, button: ClickButton) -> Self {
        Self::new(PointerEventKind::Down, point, button)
    }

    pub const fn up(point: Point, button: ClickButton) -> Self {
        Self::new(PointerEventKind::Up, point, button)
    }

    pub const fn with_click_count(mut self, count: u32) -> Self {
        self.click_count = count;
        self
    }
}

/// One scroll-wheel tick. Positive deltas scroll up (vertical) or left
/// (horizontal).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScrollEvent {
    pub unit: ScrollUnit,
    pub axis: ScrollAxis,
    pub delta: i32,
}

impl ScrollEvent {
    pub const fn new(unit: ScrollUnit, axis: ScrollAxis, delta: i32) -> Self {
        Self { unit, axis, delta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("left", ClickButton::Left)]
    #[case("Right", ClickButton::Right)]
    #[case("middle", ClickButton::Center)]
    #[case("2", ClickButton::Center)]
    #[case("5", ClickButton::Other(5))]
    fn parses_buttons(#[case] input: &str, #[case] expected: ClickButton) {
        assert_eq!(input.parse::<ClickButton>().unwrap(), expected);
    }

    #[rstest]
    fn unknown_button_is_rejected() {
        let err = "thumb".parse::<ClickButton>().unwrap_err();
        assert_eq!(err.kind, "button");
        assert_eq!(err.to_string(), "invalid button `thumb'");
    }

    #[rstest]
    #[case("line", ScrollUnit::Line)]
    #[case("PIXEL", ScrollUnit::Pixel)]
    fn parses_scroll_units(#[case] input: &str, #[case] expected: ScrollUnit) {
        assert_eq!(input.parse::<ScrollUnit>().unwrap(), expected);
    }

    #[rstest]
    fn unknown_scroll_unit_is_rejected() {
        assert!("page".parse::<ScrollUnit>().is_err());
    }

    #[rstest]
    fn ordinals_round_trip_for_named_buttons() {
        for button in [ClickButton::Left, ClickButton::Right, ClickButton::Center] {
            assert_eq!(ClickButton::from_ordinal(button.ordinal()), button);
        }
    }

    #[rstest]
    fn events_default_to_single_click_count() {
        let event = PointerEvent::down(Point::new(1.0, 2.0), ClickButton::Right);
        assert_eq!(event.click_count, 1);
        assert_eq!(event.with_click_count(3).click_count, 3);
    }
}
