use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Pacing granularity shared by every animation, in ticks per second.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TickRate(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tick rate must be greater than zero")]
pub struct InvalidTickRate;

impl TickRate {
    pub const DEFAULT: TickRate = TickRate(240);

    pub const fn new(per_second: u32) -> Option<Self> {
        if per_second == 0 { None } else { Some(Self(per_second)) }
    }

    pub const fn per_second(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Wall-clock length of `n` ticks.
    pub fn ticks(self, n: u32) -> Duration {
        Duration::from_secs_f64(f64::from(n) / self.as_f64())
    }

    /// `per_second / divisor`, the tick count used for fixed holds (a tenth or
    /// half of a second).
    pub const fn fraction(self, divisor: u32) -> u32 {
        self.0 / divisor
    }

    /// Number of whole ticks that fit into `duration`, rounded to nearest.
    pub fn ticks_in(self, duration: Duration) -> u64 {
        (duration.as_secs_f64() * self.as_f64()).round() as u64
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for TickRate {
    type Error = InvalidTickRate;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        TickRate::new(value).ok_or(InvalidTickRate)
    }
}

impl From<TickRate> for u32 {
    fn from(rate: TickRate) -> Self {
        rate.0
    }
}

/// Monotonic time source the engines pace against.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

/// Real time: `Instant::now` and a blocking thread sleep.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Virtual time stops advancing here, which keeps `origin + offset`
/// representable as an `Instant`.
const MANUAL_HORIZON: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

#[derive(Debug, Default)]
struct ManualState {
    offset: Duration,
    sleeps: usize,
}

impl ManualState {
    fn forward(&mut self, duration: Duration) {
        self.offset = self.offset.saturating_add(duration).min(MANUAL_HORIZON);
    }
}

/// Virtual time. Sleeping returns immediately and advances the clock by the
/// requested amount, so paced loops observe the same elapsed time as on a
/// real clock without blocking.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    state: Mutex<ManualState>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { origin: Instant::now(), state: Mutex::new(ManualState::default()) }
    }

    /// Virtual time that has passed since construction.
    pub fn elapsed(&self) -> Duration {
        self.lock().offset
    }

    /// Number of non-zero sleeps requested so far.
    pub fn sleep_count(&self) -> usize {
        self.lock().sleeps
    }

    /// Moves virtual time forward without counting a sleep.
    pub fn advance(&self, duration: Duration) {
        self.lock().forward(duration);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.lock().offset
    }

    fn sleep(&self, duration: Duration) {
        let mut state = self.lock();
        state.forward(duration);
        state.sleeps += 1;
    }
}

/// Tick-based pacing over a [`Clock`].
#[derive(Clone, Copy)]
pub struct Pacer<'a> {
    clock: &'a dyn Clock,
    tick_rate: TickRate,
}

impl<'a> Pacer<'a> {
    pub fn new(clock: &'a dyn Clock, tick_rate: TickRate) -> Self {
        Self { clock, tick_rate }
    }

    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Seconds elapsed since `since`.
    pub fn elapsed(&self, since: Instant) -> f64 {
        self.clock.now().saturating_duration_since(since).as_secs_f64()
    }

    pub fn sleep_ticks(&self, ticks: u32) {
        if ticks == 0 {
            return;
        }
        self.clock.sleep(self.tick_rate.ticks(ticks));
    }

    pub fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        self.clock.sleep(duration);
    }
}
