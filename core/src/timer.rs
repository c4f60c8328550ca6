use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use crate::constants::TIMER_HZ;

/// # Timers
/// The delay and sound timers count down to zero at 60Hz, independently of how fast
/// instructions are executed.
///
/// They are the only part of the machine a host may touch from another thread (e.g. a
/// 60Hz timer callback), so both are atomics and the engine hands out an `Arc<Timers>`.
#[derive(Debug, Default)]
pub struct Timers {
    delay: AtomicU8,
    sound: AtomicU8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(&self) -> u8 {
        self.delay.load(Ordering::Acquire)
    }

    pub fn sound(&self) -> u8 {
        self.sound.load(Ordering::Acquire)
    }

    pub fn set_delay(&self, value: u8) {
        self.delay.store(value, Ordering::Release);
    }

    pub fn set_sound(&self, value: u8) {
        self.sound.store(value, Ordering::Release);
    }

    /// The buzzer sounds for as long as the sound timer is non-zero
    pub fn is_sounding(&self) -> bool {
        self.sound() > 0
    }

    /// Decrements both timers, stopping at zero
    pub fn tick(&self) {
        for timer in [&self.delay, &self.sound].iter() {
            // The closure returns None at zero, which leaves the timer untouched
            let _ = timer.fetch_update(Ordering::AcqRel, Ordering::Acquire, |t| t.checked_sub(1));
        }
    }

    pub fn reset(&self) {
        self.set_delay(0);
        self.set_sound(0);
    }
}

/// Converts elapsed wall-clock time into whole 60Hz timer ticks.
///
/// Leftover time is carried into the next call so no ticks are lost to rounding.
#[derive(Debug, Clone)]
pub struct TimerClock {
    period: Duration,
    accumulated: Duration,
}

impl TimerClock {
    pub fn new() -> Self {
        Self::with_frequency(TIMER_HZ)
    }

    pub fn with_frequency(hz: u32) -> Self {
        TimerClock {
            period: Duration::from_secs(1) / hz.max(1),
            accumulated: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns how many ticks are due after `elapsed` more time has passed
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut ticks = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            ticks += 1;
        }
        ticks
    }
}

impl Default for TimerClock {
    fn default() -> Self {
        Self::new()
    }
}
