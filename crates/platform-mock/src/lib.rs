//! In-memory input sink for cursorkit tests.
//!
//! Linking this crate registers a sink that records every posted event and
//! tracks the cursor the way a desktop would, so pointer operations can run
//! without a display server.

use std::sync::{Mutex, MutexGuard, PoisonError};

use cursorkit_core::platform::{
    GestureEvent, InputSink, PlatformError, PlatformErrorKind, PointerEvent, PointerEventKind,
    ScrollEvent,
};
use cursorkit_core::register_input_sink;
use cursorkit_core::types::Point;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub enum SinkLogEntry {
    Pointer(PointerEvent),
    Scroll(ScrollEvent),
    Gesture(GestureEvent),
}

struct SinkState {
    position: Point,
    pinned: Option<Point>,
    log: Vec<SinkLogEntry>,
}

impl SinkState {
    const fn new() -> Self {
        Self { position: Point::ORIGIN, pinned: None, log: Vec::new() }
    }

    fn cursor(&self) -> Point {
        self.pinned.unwrap_or(self.position)
    }
}

struct MockInputSink {
    state: Mutex<SinkState>,
}

impl MockInputSink {
    const NAME: &'static str = "mock";

    const fn new() -> Self {
        Self { state: Mutex::new(SinkState::new()) }
    }

    fn state(&self) -> Result<MutexGuard<'_, SinkState>, PlatformError> {
        self.state.lock().map_err(|_| {
            PlatformError::new(PlatformErrorKind::OperationFailed, "mock sink state poisoned")
        })
    }
}

impl InputSink for MockInputSink {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn position(&self) -> Result<Point, PlatformError> {
        Ok(self.state()?.cursor())
    }

    fn post_pointer(&self, event: PointerEvent) -> Result<(), PlatformError> {
        let mut state = self.state()?;
        if matches!(event.kind, PointerEventKind::Move | PointerEventKind::Drag) {
            state.position = event.point;
        }
        state.log.push(SinkLogEntry::Pointer(event));
        debug!(kind = ?event.kind, point = %event.point, button = ?event.button, "mock-sink: pointer");
        Ok(())
    }

    fn post_scroll(&self, event: ScrollEvent) -> Result<(), PlatformError> {
        self.state()?.log.push(SinkLogEntry::Scroll(event));
        debug!(unit = ?event.unit, axis = ?event.axis, delta = event.delta, "mock-sink: scroll");
        Ok(())
    }

    fn post_gesture(&self, event: GestureEvent) -> Result<(), PlatformError> {
        self.state()?.log.push(SinkLogEntry::Gesture(event));
        debug!(?event, "mock-sink: gesture");
        Ok(())
    }
}

static MOCK_SINK: MockInputSink = MockInputSink::new();

register_input_sink!(&MOCK_SINK);

fn lock_state() -> MutexGuard<'static, SinkState> {
    MOCK_SINK.state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the registered mock sink.
pub fn input_sink() -> &'static dyn InputSink {
    &MOCK_SINK
}

/// Clears the recorded log, unpins the cursor and moves it back to the origin.
pub fn reset_sink_state() {
    *lock_state() = SinkState::new();
}

/// Returns the recorded log since the last reset and clears the buffer.
pub fn take_sink_log() -> Vec<SinkLogEntry> {
    std::mem::take(&mut lock_state().log)
}

/// Freezes the reported cursor position, e.g. to emulate a screen edge.
/// `None` releases it again.
pub fn pin_position(point: Option<Point>) {
    lock_state().pinned = point;
}
