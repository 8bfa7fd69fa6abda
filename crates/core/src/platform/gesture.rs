use super::pointer::UnknownVariant;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for SwipeDirection {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(SwipeDirection::Up),
            "down" => Ok(SwipeDirection::Down),
            "left" => Ok(SwipeDirection::Left),
            "right" => Ok(SwipeDirection::Right),
            _ => Err(UnknownVariant::new("swipe direction", value)),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PinchDirection {
    Expand,
    Contract,
}

impl FromStr for PinchDirection {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "expand" | "zoom" => Ok(PinchDirection::Expand),
            "contract" | "unzoom" => Ok(PinchDirection::Contract),
            _ => Err(UnknownVariant::new("pinch direction", value)),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl FromStr for RotateDirection {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "cw" | "clockwise" | "clock_wise" => Ok(RotateDirection::Clockwise),
            "ccw" | "counter_clockwise" | "counter_clock_wise" => {
                Ok(RotateDirection::CounterClockwise)
            }
            _ => Err(UnknownVariant::new("rotation direction", value)),
        }
    }
}

/// Axis along which a swipe travels.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SwipeMotion {
    Horizontal,
    Vertical,
}

/// Event field that receives the swipe distance.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SwipeAxis {
    PositionX,
    PositionY,
}

/// Swipes are synthesised as a single `Began` event.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GesturePhase {
    Began,
}

/// Synthetic trackpad event handed to an [`InputSink`](super::InputSink).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// Opening marker of a gesture bracket.
    Started,
    /// Closing marker of a gesture bracket.
    Ended,
    SmartMagnify,
    Swipe {
        direction: SwipeDirection,
        motion: SwipeMotion,
        phase: GesturePhase,
        progress: f64,
        axis: SwipeAxis,
        distance: f64,
    },
    /// Incremental magnification for one ramp step.
    Pinch { magnification: f64 },
    /// Incremental rotation in degrees for one ramp step.
    Rotation { degrees: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("zoom", PinchDirection::Expand)]
    #[case("expand", PinchDirection::Expand)]
    #[case("unzoom", PinchDirection::Contract)]
    #[case("Contract", PinchDirection::Contract)]
    fn pinch_aliases(#[case] input: &str, #[case] expected: PinchDirection) {
        assert_eq!(input.parse::<PinchDirection>().unwrap(), expected);
    }

    #[rstest]
    #[case("cw", RotateDirection::Clockwise)]
    #[case("clock_wise", RotateDirection::Clockwise)]
    #[case("counter-clockwise", RotateDirection::CounterClockwise)]
    #[case("ccw", RotateDirection::CounterClockwise)]
    fn rotation_aliases(#[case] input: &str, #[case] expected: RotateDirection) {
        assert_eq!(input.parse::<RotateDirection>().unwrap(), expected);
    }

    #[rstest]
    #[case("sideways")]
    #[case("")]
    fn swipe_rejects_unknown_names(#[case] input: &str) {
        let err = input.parse::<SwipeDirection>().unwrap_err();
        assert_eq!(err.kind, "swipe direction");
    }
}
