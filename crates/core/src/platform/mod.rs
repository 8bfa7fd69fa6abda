mod error;
mod gesture;
mod input;
mod pointer;

pub use error::{PlatformError, PlatformErrorKind};
pub use gesture::{
    GestureEvent, GesturePhase, PinchDirection, RotateDirection, SwipeAxis, SwipeDirection,
    SwipeMotion,
};
pub use input::{InputSink, InputSinkRegistration, input_sinks};
pub use pointer::{
    ClickButton, PointerEvent, PointerEventKind, ScrollAxis, ScrollEvent, ScrollUnit,
    UnknownVariant,
};

pub use crate::register_input_sink;
