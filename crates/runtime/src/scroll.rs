use std::time::Duration;

use cursorkit_core::platform::{InputSink, ScrollAxis, ScrollEvent, ScrollUnit};
use tracing::{debug, trace};

use crate::error::PointerError;
use crate::pacer::Pacer;

/// Spreads an integer scroll amount over one event per tick.
///
/// Each step emits whatever is needed to bring the cumulative fraction up to
/// `step / steps`, so rounding error is redistributed as it appears and the
/// emitted deltas always add up to `amount`.
pub(crate) struct ScrollEngine<'a> {
    sink: &'a dyn InputSink,
    pacer: Pacer<'a>,
}

impl<'a> ScrollEngine<'a> {
    pub fn new(sink: &'a dyn InputSink, pacer: Pacer<'a>) -> Self {
        Self { sink, pacer }
    }

    /// Returns the number of scroll events posted.
    pub fn scroll(
        &self,
        amount: i32,
        unit: ScrollUnit,
        axis: ScrollAxis,
        duration: Duration,
    ) -> Result<usize, PointerError> {
        if amount == 0 {
            return Ok(0);
        }

        let steps = self.pacer.tick_rate().ticks_in(duration).max(1);
        debug!(amount, ?unit, ?axis, steps, "scroll");

        let total = f64::from(amount);
        let mut emitted: i64 = 0;
        for step in 1..=steps {
            let done = step as f64 / steps as f64;
            let current = emitted as f64 / total;
            let delta = ((done - current) * total).round() as i32;
            trace!(step, delta, "scroll tick");
            self.sink.post_scroll(ScrollEvent::new(unit, axis, delta))?;
            emitted += i64::from(delta);
            self.pacer.sleep_ticks(1);
        }
        Ok(steps as usize)
    }
}
