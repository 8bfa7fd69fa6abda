use super::gesture::GestureEvent;
use super::pointer::{PointerEvent, ScrollEvent};
use crate::platform::PlatformError;
use crate::types::Point;

/// Trait that backend crates implement to read the cursor and inject events.
///
/// Every call is fire-and-forget from the engine's point of view: a returned
/// error aborts the running operation, nothing is retried.
pub trait InputSink: Send + Sync {
    fn name(&self) -> &'static str;
    fn position(&self) -> Result<Point, PlatformError>;
    fn post_pointer(&self, event: PointerEvent) -> Result<(), PlatformError>;
    fn post_scroll(&self, event: ScrollEvent) -> Result<(), PlatformError>;
    fn post_gesture(&self, event: GestureEvent) -> Result<(), PlatformError>;
}

pub struct InputSinkRegistration {
    pub sink: &'static dyn InputSink,
}

inventory::collect!(InputSinkRegistration);

pub fn input_sinks() -> impl Iterator<Item = &'static dyn InputSink> {
    inventory::iter::<InputSinkRegistration>.into_iter().map(|entry| entry.sink)
}

#[macro_export]
macro_rules! register_input_sink {
    ($sink:expr) => {
        inventory::submit! {
            $crate::platform::InputSinkRegistration { sink: $sink }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{PlatformErrorKind, ScrollEvent};
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSink {
        posts: AtomicUsize,
    }

    impl StubSink {
        const fn new() -> Self {
            Self { posts: AtomicUsize::new(0) }
        }
    }

    impl InputSink for StubSink {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn position(&self) -> Result<Point, PlatformError> {
            Ok(Point::new(3.0, 4.0))
        }

        fn post_pointer(&self, _event: PointerEvent) -> Result<(), PlatformError> {
            self.posts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn post_scroll(&self, _event: ScrollEvent) -> Result<(), PlatformError> {
            Ok(())
        }

        fn post_gesture(&self, _event: GestureEvent) -> Result<(), PlatformError> {
            Err(PlatformError::new(PlatformErrorKind::CapabilityUnavailable, "gestures"))
        }
    }

    static STUB_SINK: StubSink = StubSink::new();

    register_input_sink!(&STUB_SINK);

    #[rstest]
    fn registration_exposes_sink() {
        let sinks: Vec<_> = input_sinks().collect();
        assert!(sinks.iter().any(|sink| sink.name() == "stub"));
    }

    #[rstest]
    fn registered_sink_is_callable() {
        let sink = input_sinks().find(|sink| sink.name() == "stub").expect("stub registered");
        assert_eq!(sink.position().unwrap(), Point::new(3.0, 4.0));
        sink.post_pointer(PointerEvent::moved(Point::ORIGIN)).unwrap();
        assert_eq!(STUB_SINK.posts.load(Ordering::SeqCst), 1);
        assert!(sink.post_gesture(GestureEvent::Started).is_err());
    }
}
