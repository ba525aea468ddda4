use chrono::Timelike;

/// A source of the current wall-clock hour and minute.
///
/// Closures returning `(hour, minute)` implement this trait,
/// which is handy for pinning the clock in tests.
pub trait TimeSource {
    /// The current hour (`0..=23`) and minute (`0..=59`).
    fn hour_minute(&self) -> (u32, u32);
}

/// The host's local clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn hour_minute(&self) -> (u32, u32) {
        let now = chrono::Local::now();
        (now.hour(), now.minute())
    }
}

impl<F> TimeSource for F
where
    F: Fn() -> (u32, u32),
{
    fn hour_minute(&self) -> (u32, u32) {
        self()
    }
}
