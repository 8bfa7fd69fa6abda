use crate::pacer::{ManualClock, Pacer, TickRate};
use cursorkit_core::platform::{
    GestureEvent, InputSink, PlatformError, PlatformErrorKind, PointerEvent, PointerEventKind,
    ScrollEvent,
};
use cursorkit_core::types::Point;
use rstest::fixture;
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Pointer(PointerEvent),
    Scroll(ScrollEvent),
    Gesture(GestureEvent),
}

/// In-memory sink that tracks the cursor like a real backend: pointer events
/// move it, `pin` freezes it at one spot.
pub struct RecordingSink {
    position: Mutex<Point>,
    pinned: Mutex<Option<Point>>,
    fail_after: Mutex<Option<usize>>,
    log: Mutex<Vec<Action>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::at(Point::ORIGIN)
    }

    pub fn at(point: Point) -> Self {
        Self {
            position: Mutex::new(point),
            pinned: Mutex::new(None),
            fail_after: Mutex::new(None),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn pin(&self, point: Point) {
        *self.pinned.lock().unwrap() = Some(point);
    }

    /// Accept `count` more posts, then fail every subsequent one.
    pub fn fail_after(&self, count: usize) {
        *self.fail_after.lock().unwrap() = Some(count);
    }

    pub fn log(&self) -> Vec<Action> {
        self.log.lock().unwrap().clone()
    }

    pub fn pointer_events(&self) -> Vec<PointerEvent> {
        self.log()
            .into_iter()
            .filter_map(|action| match action {
                Action::Pointer(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    pub fn scroll_deltas(&self) -> Vec<i32> {
        self.log()
            .into_iter()
            .filter_map(|action| match action {
                Action::Scroll(event) => Some(event.delta),
                _ => None,
            })
            .collect()
    }

    pub fn gesture_events(&self) -> Vec<GestureEvent> {
        self.log()
            .into_iter()
            .filter_map(|action| match action {
                Action::Gesture(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    fn record(&self, action: Action) -> Result<(), PlatformError> {
        let mut fail_after = self.fail_after.lock().unwrap();
        if let Some(remaining) = fail_after.as_mut() {
            if *remaining == 0 {
                return Err(PlatformError::new(PlatformErrorKind::OperationFailed, "sink closed"));
            }
            *remaining -= 1;
        }
        self.log.lock().unwrap().push(action);
        Ok(())
    }
}

impl InputSink for RecordingSink {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn position(&self) -> Result<Point, PlatformError> {
        if let Some(pinned) = *self.pinned.lock().unwrap() {
            return Ok(pinned);
        }
        Ok(*self.position.lock().unwrap())
    }

    fn post_pointer(&self, event: PointerEvent) -> Result<(), PlatformError> {
        self.record(Action::Pointer(event))?;
        if matches!(event.kind, PointerEventKind::Move | PointerEventKind::Drag) {
            *self.position.lock().unwrap() = event.point;
        }
        Ok(())
    }

    fn post_scroll(&self, event: ScrollEvent) -> Result<(), PlatformError> {
        self.record(Action::Scroll(event))
    }

    fn post_gesture(&self, event: GestureEvent) -> Result<(), PlatformError> {
        self.record(Action::Gesture(event))
    }
}

#[fixture]
pub fn sink() -> RecordingSink {
    RecordingSink::new()
}

#[fixture]
pub fn clock() -> ManualClock {
    ManualClock::new()
}

pub fn pacer(clock: &ManualClock) -> Pacer<'_> {
    Pacer::new(clock, TickRate::DEFAULT)
}
