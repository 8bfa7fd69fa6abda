use std::time::Duration;

use cursorkit_core::platform::{ClickButton, InputSink, PointerEvent};
use cursorkit_core::types::Point;
use tracing::{debug, trace, warn};

use crate::error::PointerError;
use crate::pacer::Pacer;

/// What the animated events represent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Motion {
    Move,
    /// Press `button` before the animation, release it afterwards.
    Drag(ClickButton),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationOutcome {
    Converged,
    /// The cursor did not reach the target within `duration + grace`.
    TimedOut,
}

/// Report of a finished animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub outcome: AnimationOutcome,
    /// Motion events posted, excluding drag press/release.
    pub events: usize,
    /// Cursor position reported by the sink once the animation ended.
    pub end: Point,
}

impl Animation {
    pub fn converged(&self) -> bool {
        self.outcome == AnimationOutcome::Converged
    }
}

/// Linear cursor animation paced at one event per tick.
///
/// The position is re-read from the sink after every tick, so the cursor
/// recovers from outside interference instead of following a precomputed
/// path. A cursor that cannot reach the target (pinned at a screen edge,
/// fought over by another client) ends the loop through the timeout bound.
pub(crate) struct Animator<'a> {
    sink: &'a dyn InputSink,
    pacer: Pacer<'a>,
    tolerance: f64,
    grace: Duration,
}

impl<'a> Animator<'a> {
    pub fn new(sink: &'a dyn InputSink, pacer: Pacer<'a>, tolerance: f64, grace: Duration) -> Self {
        Self { sink, pacer, tolerance, grace }
    }

    pub fn animate(
        &self,
        motion: Motion,
        start: Point,
        end: Point,
        duration: Duration,
    ) -> Result<Animation, PointerError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PointerError::invalid(format!(
                "animation endpoints must be finite, got {start} -> {end}"
            )));
        }
        debug!(?motion, %start, %end, duration_ms = duration.as_millis() as u64, "animate");

        if let Motion::Drag(button) = motion {
            self.sink.post_pointer(PointerEvent::down(start, button))?;
        }

        let (outcome, events) = if duration.is_zero() {
            self.post_motion(motion, end)?;
            (AnimationOutcome::Converged, 1)
        } else {
            self.run(motion, start, end, duration)?
        };

        let final_point = self.sink.position()?;
        if let Motion::Drag(button) = motion {
            self.sink.post_pointer(PointerEvent::up(final_point, button))?;
        }

        if outcome == AnimationOutcome::TimedOut {
            warn!(%end, actual = %final_point, events, "pointer animation timed out");
        }
        Ok(Animation { outcome, events, end: final_point })
    }

    fn run(
        &self,
        motion: Motion,
        start: Point,
        end: Point,
        duration: Duration,
    ) -> Result<(AnimationOutcome, usize), PointerError> {
        let ticks = duration.as_secs_f64() * self.pacer.tick_rate().as_f64();
        let xstep = (end.x() - start.x()) / ticks;
        let ystep = (end.y() - start.y()) / ticks;
        let boundary = duration.saturating_add(self.grace).as_secs_f64();
        let started = self.pacer.now();

        let mut current = start;
        let mut events = 0;
        while !current.is_close_to(end, self.tolerance) {
            let next = Point::new(
                current.x() + clamp_step(xstep, end.x() - current.x()),
                current.y() + clamp_step(ystep, end.y() - current.y()),
            );
            self.post_motion(motion, next)?;
            events += 1;

            self.pacer.sleep_ticks(1);
            if self.pacer.elapsed(started) > boundary {
                return Ok((AnimationOutcome::TimedOut, events));
            }

            current = self.sink.position()?;
        }
        Ok((AnimationOutcome::Converged, events))
    }

    fn post_motion(&self, motion: Motion, point: Point) -> Result<(), PointerError> {
        let event = match motion {
            Motion::Move => PointerEvent::moved(point),
            Motion::Drag(button) => PointerEvent::dragged(point, button),
        };
        trace!(?event, "post");
        self.sink.post_pointer(event)?;
        Ok(())
    }
}

/// Takes the full step unless it would overshoot what remains.
fn clamp_step(step: f64, remaining: f64) -> f64 {
    if step.abs() > remaining.abs() { remaining } else { step }
}
