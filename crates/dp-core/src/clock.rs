//! Wall-clock abstraction.
//!
//! Decay depends on elapsed wall-clock time, and the sleeping mood on the
//! local hour, so the engine takes an injected clock instead of reading
//! global time directly.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Local, Timelike};

/// Time source for the engine
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;

    /// Local hour of day, 0-23
    fn local_hour(&self) -> u32;
}

/// Production clock backed by the system time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Settable clock for deterministic tests
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<i64>,
    hour: Cell<u32>,
}

impl ManualClock {
    pub fn new(now_ms: i64, hour: u32) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
            hour: Cell::new(hour),
        }
    }

    pub fn set_now_ms(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }

    pub fn set_hour(&self, hour: u32) {
        self.hour.set(hour);
    }

    /// Move the clock forward by `delta_ms` milliseconds
    pub fn advance_ms(&self, delta_ms: i64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }

    fn local_hour(&self) -> u32 {
        self.hour.get()
    }
}

// Lets tests keep a handle to the clock they hand to the engine.
impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }

    fn local_hour(&self) -> u32 {
        (**self).local_hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new(1_000, 9);
        assert_eq!(clock.now_ms(), 1_000);
        clock.advance_ms(500);
        assert_eq!(clock.now_ms(), 1_500);
        clock.set_hour(23);
        assert_eq!(clock.local_hour(), 23);
    }

    #[test]
    fn test_system_clock_hour_in_range() {
        let clock = SystemClock;
        assert!(clock.local_hour() < 24);
    }

    #[test]
    fn test_rc_clock_delegates() {
        let clock = Rc::new(ManualClock::new(42, 3));
        let handle: Rc<ManualClock> = Rc::clone(&clock);
        clock.advance_ms(8);
        assert_eq!(handle.now_ms(), 50);
        assert_eq!(handle.local_hour(), 3);
    }
}
