mod animator;
mod click;
mod error;
mod gesture;
mod mouse;
mod pacer;
mod scroll;
mod settings;
#[cfg(test)]
mod test_support;

pub use animator::{Animation, AnimationOutcome, Motion};
pub use error::{PointerError, duration_from_secs};
pub use gesture::{SwipeVector, signed_angle, signed_magnification};
pub use mouse::Mouse;
pub use pacer::{Clock, InvalidTickRate, ManualClock, Pacer, SystemClock, TickRate};
pub use settings::{PointerSettings, SettingsError};
