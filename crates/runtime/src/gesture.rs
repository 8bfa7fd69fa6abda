use std::time::Duration;

use cursorkit_core::platform::{
    GestureEvent, GesturePhase, InputSink, PinchDirection, PointerEvent, RotateDirection,
    SwipeAxis, SwipeDirection, SwipeMotion,
};
use cursorkit_core::types::Point;
use tracing::{debug, trace};

use crate::error::{PointerError, ensure_finite};
use crate::pacer::Pacer;

/// Axis, motion and signed unit distance of a swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeVector {
    pub axis: SwipeAxis,
    pub motion: SwipeMotion,
    pub distance: f64,
}

impl SwipeVector {
    pub fn for_direction(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Up => {
                Self { axis: SwipeAxis::PositionY, motion: SwipeMotion::Vertical, distance: -1.0 }
            }
            SwipeDirection::Down => {
                Self { axis: SwipeAxis::PositionY, motion: SwipeMotion::Vertical, distance: 1.0 }
            }
            SwipeDirection::Left => {
                Self { axis: SwipeAxis::PositionX, motion: SwipeMotion::Horizontal, distance: 1.0 }
            }
            SwipeDirection::Right => Self {
                axis: SwipeAxis::PositionX,
                motion: SwipeMotion::Horizontal,
                distance: -1.0,
            },
        }
    }
}

/// Signed magnification: contracting pinches zoom out.
pub fn signed_magnification(direction: PinchDirection, magnification: f64) -> f64 {
    match direction {
        PinchDirection::Expand => magnification,
        PinchDirection::Contract => -magnification,
    }
}

/// Signed rotation in degrees: clockwise turns are negative.
pub fn signed_angle(direction: RotateDirection, degrees: f64) -> f64 {
    match direction {
        RotateDirection::Clockwise => -degrees,
        RotateDirection::CounterClockwise => degrees,
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct GestureTiming {
    /// Ramp length of pinch and rotate gestures.
    pub steps: u32,
    pub hold_ticks: u32,
    pub smart_magnify_hold_ticks: u32,
}

/// Synthesises trackpad gestures.
///
/// Every gesture runs inside a bracket: the cursor jumps to the target point,
/// a `Started` marker is posted, the body runs, an `Ended` marker closes it and
/// the engine holds briefly so the application can settle.
pub(crate) struct GestureEngine<'a> {
    sink: &'a dyn InputSink,
    pacer: Pacer<'a>,
    timing: GestureTiming,
}

impl<'a> GestureEngine<'a> {
    pub fn new(sink: &'a dyn InputSink, pacer: Pacer<'a>, timing: GestureTiming) -> Self {
        Self { sink, pacer, timing }
    }

    pub fn smart_magnify(&self, point: Point) -> Result<(), PointerError> {
        debug!(%point, "smart magnify");
        self.bracket(point, self.timing.smart_magnify_hold_ticks, || {
            self.post(GestureEvent::SmartMagnify)
        })
    }

    /// A swipe is a single `Began` event carrying the unit distance.
    pub fn swipe(&self, direction: SwipeDirection, point: Point) -> Result<(), PointerError> {
        let vector = SwipeVector::for_direction(direction);
        debug!(?direction, %point, "swipe");
        self.bracket(point, self.timing.hold_ticks, || {
            self.post(GestureEvent::Swipe {
                direction,
                motion: vector.motion,
                phase: GesturePhase::Began,
                progress: vector.distance,
                axis: vector.axis,
                distance: vector.distance,
            })
        })
    }

    pub fn pinch(
        &self,
        direction: PinchDirection,
        magnification: f64,
        point: Point,
        duration: Duration,
    ) -> Result<(), PointerError> {
        let magnification = ensure_finite("magnification", magnification)?;
        let total = signed_magnification(direction, magnification);
        debug!(?direction, magnification = total, %point, "pinch");
        self.bracket(point, self.timing.hold_ticks, || {
            self.ramp(total, duration, |step| GestureEvent::Pinch { magnification: step })
        })
    }

    pub fn rotate(
        &self,
        direction: RotateDirection,
        degrees: f64,
        point: Point,
        duration: Duration,
    ) -> Result<(), PointerError> {
        let degrees = ensure_finite("angle", degrees)?;
        let total = signed_angle(direction, degrees);
        debug!(?direction, degrees = total, %point, "rotate");
        self.bracket(point, self.timing.hold_ticks, || {
            self.ramp(total, duration, |step| GestureEvent::Rotation { degrees: step })
        })
    }

    fn bracket(
        &self,
        point: Point,
        hold_ticks: u32,
        body: impl FnOnce() -> Result<(), PointerError>,
    ) -> Result<(), PointerError> {
        if !point.is_finite() {
            return Err(PointerError::invalid(format!("gesture point must be finite, got {point}")));
        }
        self.sink.post_pointer(PointerEvent::moved(point))?;
        self.post(GestureEvent::Started)?;
        body()?;
        self.post(GestureEvent::Ended)?;
        self.pacer.sleep_ticks(hold_ticks);
        Ok(())
    }

    /// Splits `total` into equal increments spread evenly over `duration`.
    fn ramp(
        &self,
        total: f64,
        duration: Duration,
        event: impl Fn(f64) -> GestureEvent,
    ) -> Result<(), PointerError> {
        let steps = self.timing.steps.max(1);
        let step_size = total / f64::from(steps);
        let period = duration / steps;
        for _ in 0..steps {
            self.post(event(step_size))?;
            self.pacer.sleep(period);
        }
        Ok(())
    }

    fn post(&self, event: GestureEvent) -> Result<(), PointerError> {
        trace!(?event, "post gesture");
        self.sink.post_gesture(event)?;
        Ok(())
    }
}
