use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Subcommand};
use cursorkit_core::platform::{
    ClickButton, PinchDirection, RotateDirection, ScrollUnit, SwipeDirection, UnknownVariant,
};
use cursorkit_core::types::Point;
use cursorkit_runtime::{Mouse, duration_from_secs};
use serde::Serialize;

#[derive(Subcommand)]
pub enum PointerCommand {
    /// Print the current pointer position.
    Position,
    Move(MoveArgs),
    Drag(DragArgs),
    Scroll(ScrollArgs),
    #[command(name = "hscroll", alias = "horizontal-scroll")]
    HorizontalScroll(ScrollArgs),
    Click(ClickArgs),
    ClickDown(ClickArgs),
    ClickUp(PointArgs),
    #[command(alias = "right-click")]
    SecondaryClick(ClickArgs),
    MiddleClick(PointArgs),
    ArbitraryClick(ArbitraryClickArgs),
    MultiClick(MultiClickArgs),
    DoubleClick(PointArgs),
    TripleClick(PointArgs),
    #[command(alias = "two-finger-double-tap")]
    SmartMagnify(PointArgs),
    Swipe(SwipeArgs),
    Pinch(PinchArgs),
    Rotate(RotateArgs),
}

#[derive(Args)]
pub struct PointArgs {
    /// Where to act; defaults to the current position.
    #[arg(long = "point", value_parser = parse_point_arg, allow_hyphen_values = true)]
    pub point: Option<Point>,
}

#[derive(Args)]
pub struct MoveArgs {
    #[arg(value_parser = parse_point_arg, allow_hyphen_values = true)]
    pub point: Point,
    /// Animation length in seconds.
    #[arg(long = "duration", value_parser = parse_seconds)]
    pub duration: Option<Duration>,
}

#[derive(Args)]
pub struct DragArgs {
    #[arg(value_parser = parse_point_arg, allow_hyphen_values = true)]
    pub point: Point,
    #[arg(long = "button", value_parser = parse_name::<ClickButton>)]
    pub button: Option<ClickButton>,
    #[arg(long = "duration", value_parser = parse_seconds)]
    pub duration: Option<Duration>,
}

#[derive(Args)]
pub struct ScrollArgs {
    /// Positive scrolls up (vertical) or left (horizontal).
    #[arg(allow_hyphen_values = true)]
    pub amount: i32,
    #[arg(long = "unit", value_parser = parse_name::<ScrollUnit>)]
    pub unit: Option<ScrollUnit>,
    #[arg(long = "duration", value_parser = parse_seconds)]
    pub duration: Option<Duration>,
}

#[derive(Args)]
pub struct ClickArgs {
    #[command(flatten)]
    pub at: PointArgs,
    /// Ticks to keep the button pressed.
    #[arg(long = "hold")]
    pub hold: Option<u32>,
}

#[derive(Args)]
pub struct ArbitraryClickArgs {
    #[arg(value_parser = parse_name::<ClickButton>)]
    pub button: ClickButton,
    #[command(flatten)]
    pub click: ClickArgs,
}

#[derive(Args)]
pub struct MultiClickArgs {
    #[arg(value_parser = parse_click_count)]
    pub count: u32,
    #[command(flatten)]
    pub at: PointArgs,
}

#[derive(Args)]
pub struct SwipeArgs {
    #[arg(value_parser = parse_name::<SwipeDirection>)]
    pub direction: SwipeDirection,
    #[command(flatten)]
    pub at: PointArgs,
}

#[derive(Args)]
pub struct PinchArgs {
    #[arg(value_parser = parse_name::<PinchDirection>)]
    pub direction: PinchDirection,
    #[arg(long = "magnification")]
    pub magnification: Option<f64>,
    #[command(flatten)]
    pub at: PointArgs,
    #[arg(long = "duration", value_parser = parse_seconds)]
    pub duration: Option<Duration>,
}

#[derive(Args)]
pub struct RotateArgs {
    #[arg(value_parser = parse_name::<RotateDirection>)]
    pub direction: RotateDirection,
    #[arg(allow_hyphen_values = true)]
    pub degrees: f64,
    #[command(flatten)]
    pub at: PointArgs,
    #[arg(long = "duration", value_parser = parse_seconds)]
    pub duration: Option<Duration>,
}

#[derive(Serialize)]
struct PositionOutput {
    x: f64,
    y: f64,
}

pub fn run(mouse: &Mouse<'_>, command: &PointerCommand, json: bool) -> Result<String> {
    let point = match command {
        PointerCommand::Position => mouse.current_position()?,
        PointerCommand::Move(args) => mouse.move_to(args.point, args.duration)?,
        PointerCommand::Drag(args) => mouse.drag_to(args.point, args.button, args.duration)?,
        PointerCommand::Scroll(args) => mouse.scroll(args.amount, args.unit, args.duration)?,
        PointerCommand::HorizontalScroll(args) => {
            mouse.horizontal_scroll(args.amount, args.unit, args.duration)?
        }
        PointerCommand::Click(args) => mouse.click(args.at.point, args.hold)?,
        PointerCommand::ClickDown(args) => mouse.click_down(args.at.point, args.hold)?,
        PointerCommand::ClickUp(args) => mouse.click_up(args.point)?,
        PointerCommand::SecondaryClick(args) => mouse.secondary_click(args.at.point, args.hold)?,
        PointerCommand::MiddleClick(args) => mouse.middle_click(args.point)?,
        PointerCommand::ArbitraryClick(args) => {
            mouse.arbitrary_click(args.button, args.click.at.point, args.click.hold)?
        }
        PointerCommand::MultiClick(args) => mouse.multi_click(args.count, args.at.point)?,
        PointerCommand::DoubleClick(args) => mouse.double_click(args.point)?,
        PointerCommand::TripleClick(args) => mouse.triple_click(args.point)?,
        PointerCommand::SmartMagnify(args) => mouse.smart_magnify(args.point)?,
        PointerCommand::Swipe(args) => mouse.swipe(args.direction, args.at.point)?,
        PointerCommand::Pinch(args) => {
            mouse.pinch(args.direction, args.magnification, args.at.point, args.duration)?
        }
        PointerCommand::Rotate(args) => {
            mouse.rotate(args.direction, args.degrees, args.at.point, args.duration)?
        }
    };
    render(point, json)
}

fn render(point: Point, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&PositionOutput { x: point.x(), y: point.y() })?)
    } else {
        Ok(format!("Pointer at {point}."))
    }
}

fn parse_point_arg(value: &str) -> Result<Point, String> {
    value.parse::<Point>().map_err(|err| err.to_string())
}

fn parse_name<T: FromStr<Err = UnknownVariant>>(value: &str) -> Result<T, String> {
    value.parse::<T>().map_err(|err| err.to_string())
}

fn parse_seconds(value: &str) -> Result<Duration, String> {
    let secs: f64 = value.parse().map_err(|err| format!("invalid duration '{value}': {err}"))?;
    duration_from_secs(secs).map_err(|err| err.to_string())
}

fn parse_click_count(value: &str) -> Result<u32, String> {
    let count: u32 =
        value.parse().map_err(|err| format!("invalid click count '{value}': {err}"))?;
    if count == 0 {
        return Err("click count must be at least 1".to_owned());
    }
    Ok(count)
}
