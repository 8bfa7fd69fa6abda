use std::time::Duration;

use cursorkit_core::platform::{
    ClickButton, InputSink, PinchDirection, RotateDirection, ScrollAxis, ScrollUnit,
    SwipeDirection, input_sinks,
};
use cursorkit_core::types::Point;
use tracing::{debug, info};

use crate::animator::{Animation, Animator, Motion};
use crate::click::ClickSequencer;
use crate::error::PointerError;
use crate::gesture::{GestureEngine, GestureTiming};
use crate::pacer::{Clock, Pacer, SystemClock};
use crate::scroll::ScrollEngine;
use crate::settings::PointerSettings;

static SYSTEM_CLOCK: SystemClock = SystemClock;

/// Blocking pointer operations over one [`InputSink`].
///
/// Every operation returns only after all of its events were posted and its
/// pacing delays elapsed. Omitted points mean "where the cursor is now";
/// omitted durations, holds and magnifications fall back to
/// [`PointerSettings`]. The returned point is the cursor position reported
/// by the sink afterwards.
pub struct Mouse<'a> {
    sink: &'a dyn InputSink,
    clock: &'a dyn Clock,
    settings: PointerSettings,
}

impl Mouse<'static> {
    /// Wires the first registered sink to the system clock.
    pub fn from_registry(settings: PointerSettings) -> Result<Self, PointerError> {
        let sink = input_sinks().next().ok_or(PointerError::MissingSink)?;
        info!(sink = sink.name(), tick_rate = settings.tick_rate.per_second(), "using input sink");
        Self::new(sink, &SYSTEM_CLOCK, settings)
    }
}

impl<'a> Mouse<'a> {
    pub fn new(
        sink: &'a dyn InputSink,
        clock: &'a dyn Clock,
        settings: PointerSettings,
    ) -> Result<Self, PointerError> {
        settings.validate().map_err(|err| PointerError::invalid(err.to_string()))?;
        Ok(Self { sink, clock, settings })
    }

    pub fn settings(&self) -> &PointerSettings {
        &self.settings
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    pub fn current_position(&self) -> Result<Point, PointerError> {
        Ok(self.sink.position()?)
    }

    pub fn move_to(&self, point: Point, duration: Option<Duration>) -> Result<Point, PointerError> {
        self.animate_to(Motion::Move, point, duration).map(|animation| animation.end)
    }

    pub fn drag_to(
        &self,
        point: Point,
        button: Option<ClickButton>,
        duration: Option<Duration>,
    ) -> Result<Point, PointerError> {
        let motion = Motion::Drag(button.unwrap_or_default());
        self.animate_to(motion, point, duration).map(|animation| animation.end)
    }

    /// Animates from the current position to `point` and reports whether the
    /// cursor converged or the animation timed out.
    pub fn animate_to(
        &self,
        motion: Motion,
        point: Point,
        duration: Option<Duration>,
    ) -> Result<Animation, PointerError> {
        let start = self.sink.position()?;
        let duration = duration.unwrap_or(self.settings.default_duration);
        self.animator().animate(motion, start, point, duration)
    }

    pub fn scroll(
        &self,
        amount: i32,
        unit: Option<ScrollUnit>,
        duration: Option<Duration>,
    ) -> Result<Point, PointerError> {
        self.scroll_axis(amount, ScrollAxis::Vertical, unit, duration)
    }

    pub fn horizontal_scroll(
        &self,
        amount: i32,
        unit: Option<ScrollUnit>,
        duration: Option<Duration>,
    ) -> Result<Point, PointerError> {
        self.scroll_axis(amount, ScrollAxis::Horizontal, unit, duration)
    }

    fn scroll_axis(
        &self,
        amount: i32,
        axis: ScrollAxis,
        unit: Option<ScrollUnit>,
        duration: Option<Duration>,
    ) -> Result<Point, PointerError> {
        let duration = duration.unwrap_or(self.settings.default_duration);
        ScrollEngine::new(self.sink, self.pacer()).scroll(
            amount,
            unit.unwrap_or_default(),
            axis,
            duration,
        )?;
        self.current_position()
    }

    pub fn click_down(&self, point: Option<Point>, hold_ticks: Option<u32>) -> Result<Point, PointerError> {
        self.button_down(ClickButton::Left, point, hold_ticks)
    }

    pub fn click_up(&self, point: Option<Point>) -> Result<Point, PointerError> {
        self.button_up(ClickButton::Left, point)
    }

    pub fn click(&self, point: Option<Point>, hold_ticks: Option<u32>) -> Result<Point, PointerError> {
        self.button_click(ClickButton::Left, point, hold_ticks)
    }

    pub fn secondary_click_down(
        &self,
        point: Option<Point>,
        hold_ticks: Option<u32>,
    ) -> Result<Point, PointerError> {
        self.button_down(ClickButton::Right, point, hold_ticks)
    }

    pub fn secondary_click_up(&self, point: Option<Point>) -> Result<Point, PointerError> {
        self.button_up(ClickButton::Right, point)
    }

    pub fn secondary_click(
        &self,
        point: Option<Point>,
        hold_ticks: Option<u32>,
    ) -> Result<Point, PointerError> {
        self.button_click(ClickButton::Right, point, hold_ticks)
    }

    pub fn middle_click(&self, point: Option<Point>) -> Result<Point, PointerError> {
        self.button_click(ClickButton::Center, point, None)
    }

    pub fn arbitrary_click_down(
        &self,
        button: ClickButton,
        point: Option<Point>,
        hold_ticks: Option<u32>,
    ) -> Result<Point, PointerError> {
        self.button_down(button, point, hold_ticks)
    }

    pub fn arbitrary_click_up(
        &self,
        button: ClickButton,
        point: Option<Point>,
    ) -> Result<Point, PointerError> {
        self.button_up(button, point)
    }

    pub fn arbitrary_click(
        &self,
        button: ClickButton,
        point: Option<Point>,
        hold_ticks: Option<u32>,
    ) -> Result<Point, PointerError> {
        self.button_click(button, point, hold_ticks)
    }

    pub fn multi_click(&self, count: u32, point: Option<Point>) -> Result<Point, PointerError> {
        let point = self.resolve(point)?;
        self.clicks().multi_click(count, point)?;
        self.current_position()
    }

    pub fn double_click(&self, point: Option<Point>) -> Result<Point, PointerError> {
        let point = self.resolve(point)?;
        self.clicks().double_click(point)?;
        self.current_position()
    }

    pub fn triple_click(&self, point: Option<Point>) -> Result<Point, PointerError> {
        let point = self.resolve(point)?;
        self.clicks().triple_click(point)?;
        self.current_position()
    }

    pub fn smart_magnify(&self, point: Option<Point>) -> Result<Point, PointerError> {
        let point = self.resolve(point)?;
        self.gestures().smart_magnify(point)?;
        self.current_position()
    }

    pub fn swipe(&self, direction: SwipeDirection, point: Option<Point>) -> Result<Point, PointerError> {
        let point = self.resolve(point)?;
        self.gestures().swipe(direction, point)?;
        self.current_position()
    }

    pub fn pinch(
        &self,
        direction: PinchDirection,
        magnification: Option<f64>,
        point: Option<Point>,
        duration: Option<Duration>,
    ) -> Result<Point, PointerError> {
        let point = self.resolve(point)?;
        let magnification = magnification.unwrap_or(self.settings.default_magnification);
        let duration = duration.unwrap_or(self.settings.default_duration);
        self.gestures().pinch(direction, magnification, point, duration)?;
        self.current_position()
    }

    pub fn rotate(
        &self,
        direction: RotateDirection,
        degrees: f64,
        point: Option<Point>,
        duration: Option<Duration>,
    ) -> Result<Point, PointerError> {
        let point = self.resolve(point)?;
        let duration = duration.unwrap_or(self.settings.default_duration);
        self.gestures().rotate(direction, degrees, point, duration)?;
        self.current_position()
    }

    fn button_down(
        &self,
        button: ClickButton,
        point: Option<Point>,
        hold_ticks: Option<u32>,
    ) -> Result<Point, PointerError> {
        let point = self.resolve(point)?;
        let hold = hold_ticks.unwrap_or_else(|| self.settings.press_hold_ticks());
        self.clicks().button_down(button, point, hold)?;
        self.current_position()
    }

    fn button_up(&self, button: ClickButton, point: Option<Point>) -> Result<Point, PointerError> {
        let point = self.resolve(point)?;
        self.clicks().button_up(button, point)?;
        self.current_position()
    }

    fn button_click(
        &self,
        button: ClickButton,
        point: Option<Point>,
        hold_ticks: Option<u32>,
    ) -> Result<Point, PointerError> {
        let point = self.resolve(point)?;
        let hold = hold_ticks.unwrap_or_else(|| self.settings.press_hold_ticks());
        self.clicks().click(button, point, hold)?;
        self.current_position()
    }

    fn resolve(&self, point: Option<Point>) -> Result<Point, PointerError> {
        match point {
            Some(point) if !point.is_finite() => {
                Err(PointerError::invalid(format!("point must be finite, got {point}")))
            }
            Some(point) => Ok(point),
            None => {
                let current = self.sink.position()?;
                debug!(%current, "defaulting to current position");
                Ok(current)
            }
        }
    }

    fn pacer(&self) -> Pacer<'a> {
        Pacer::new(self.clock, self.settings.tick_rate)
    }

    fn animator(&self) -> Animator<'a> {
        Animator::new(self.sink, self.pacer(), self.settings.close_enough, self.settings.timeout_grace)
    }

    fn clicks(&self) -> ClickSequencer<'a> {
        ClickSequencer::new(self.sink, self.pacer())
    }

    fn gestures(&self) -> GestureEngine<'a> {
        GestureEngine::new(
            self.sink,
            self.pacer(),
            GestureTiming {
                steps: self.settings.gesture_steps,
                hold_ticks: self.settings.gesture_hold_ticks(),
                smart_magnify_hold_ticks: self.settings.smart_magnify_hold_ticks(),
            },
        )
    }
}
