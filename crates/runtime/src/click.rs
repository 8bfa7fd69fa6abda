use cursorkit_core::platform::{ClickButton, InputSink, PointerEvent};
use cursorkit_core::types::Point;
use tracing::debug;

use crate::error::PointerError;
use crate::pacer::Pacer;

/// Composes button press/release events into click sequences.
///
/// Clicks happen where they are asked to: the cursor is never animated to the
/// point first.
pub(crate) struct ClickSequencer<'a> {
    sink: &'a dyn InputSink,
    pacer: Pacer<'a>,
}

impl<'a> ClickSequencer<'a> {
    pub fn new(sink: &'a dyn InputSink, pacer: Pacer<'a>) -> Self {
        Self { sink, pacer }
    }

    /// Presses `button` and keeps it down for `hold_ticks` so the target
    /// application registers the press before the release arrives.
    pub fn button_down(
        &self,
        button: ClickButton,
        point: Point,
        hold_ticks: u32,
    ) -> Result<(), PointerError> {
        debug!(?button, %point, hold_ticks, "button down");
        self.sink.post_pointer(PointerEvent::down(point, button))?;
        self.pacer.sleep_ticks(hold_ticks);
        Ok(())
    }

    pub fn button_up(&self, button: ClickButton, point: Point) -> Result<(), PointerError> {
        debug!(?button, %point, "button up");
        self.sink.post_pointer(PointerEvent::up(point, button))?;
        Ok(())
    }

    pub fn click(
        &self,
        button: ClickButton,
        point: Point,
        hold_ticks: u32,
    ) -> Result<(), PointerError> {
        self.button_down(button, point, hold_ticks)?;
        self.button_up(button, point)
    }

    /// One press/release pair tagged with click count `count`, no hold.
    pub fn multi_click(&self, count: u32, point: Point) -> Result<(), PointerError> {
        if count == 0 {
            return Err(PointerError::invalid("click count must be at least 1"));
        }
        debug!(count, %point, "multi click");
        let down = PointerEvent::down(point, ClickButton::Left).with_click_count(count);
        let up = PointerEvent::up(point, ClickButton::Left).with_click_count(count);
        self.sink.post_pointer(down)?;
        self.sink.post_pointer(up)?;
        Ok(())
    }

    /// Some applications only recognise a double click after having seen the
    /// single click that precedes it, so the count progression is 1 then 2.
    pub fn double_click(&self, point: Point) -> Result<(), PointerError> {
        self.multi_click(1, point)?;
        self.multi_click(2, point)
    }

    /// Count progression 1, 2, 3.
    pub fn triple_click(&self, point: Point) -> Result<(), PointerError> {
        self.double_click(point)?;
        self.multi_click(3, point)
    }
}
