use std::time::{Duration, Instant};

/// How often the host should call [`Countdown::tick`].
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

const STEP: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Countdown armed with this many seconds.
    Armed(u32),
    Cancelled,
    /// Start recording now.
    Fire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Counting(u32),
    Fire,
}

/// Optional delay between pressing Start and the recording starting.
///
/// Driven by a recurring timer on the UI thread; `now` is passed in so the
/// schedule does not depend on the wall clock.
#[derive(Debug, Clone)]
pub struct Countdown {
    seconds: u32,
    remaining: Option<u32>,
    last_step: Instant,
}

impl Countdown {
    pub fn new(seconds: u32, now: Instant) -> Self {
        Self {
            seconds,
            remaining: None,
            last_step: now,
        }
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Start button. Arms when idle, cancels when armed. Without a delay
    /// configured it fires straight away.
    pub fn press(&mut self, now: Instant) -> PressOutcome {
        if self.remaining.take().is_some() {
            return PressOutcome::Cancelled;
        }
        if self.seconds == 0 {
            return PressOutcome::Fire;
        }
        self.remaining = Some(self.seconds);
        self.last_step = now;
        PressOutcome::Armed(self.seconds)
    }

    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let Some(remaining) = self.remaining else {
            return TickOutcome::Idle;
        };
        if remaining <= 1 {
            self.remaining = None;
            return TickOutcome::Fire;
        }
        if now.saturating_duration_since(self.last_step) >= STEP {
            self.remaining = Some(remaining - 1);
            self.last_step = now;
            return TickOutcome::Counting(remaining - 1);
        }
        TickOutcome::Counting(remaining)
    }

    /// Caption for the Start button.
    pub fn label(&self) -> String {
        match self.remaining {
            Some(n) => n.to_string(),
            None => String::from("Start"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let start = Instant::now();
        let mut countdown = Countdown::new(3, start);
        assert_eq!(countdown.tick(after(start, 5000)), TickOutcome::Idle);
        assert_eq!(countdown.label(), "Start");
    }

    #[test]
    fn test_three_second_countdown() {
        let start = Instant::now();
        let mut countdown = Countdown::new(3, start);
        assert_eq!(countdown.press(start), PressOutcome::Armed(3));
        assert_eq!(countdown.label(), "3");

        assert_eq!(countdown.tick(after(start, 200)), TickOutcome::Counting(3));
        assert_eq!(countdown.tick(after(start, 1000)), TickOutcome::Counting(2));
        assert_eq!(countdown.tick(after(start, 1800)), TickOutcome::Counting(2));
        assert_eq!(countdown.tick(after(start, 2000)), TickOutcome::Counting(1));
        assert_eq!(countdown.tick(after(start, 2200)), TickOutcome::Fire);
        assert!(!countdown.is_armed());
    }

    #[test]
    fn test_press_while_armed_cancels() {
        let start = Instant::now();
        let mut countdown = Countdown::new(5, start);
        countdown.press(start);
        assert_eq!(countdown.press(after(start, 400)), PressOutcome::Cancelled);
        assert_eq!(countdown.tick(after(start, 1400)), TickOutcome::Idle);
    }

    #[test]
    fn test_zero_countdown_fires_on_press() {
        let start = Instant::now();
        let mut countdown = Countdown::new(0, start);
        assert_eq!(countdown.press(start), PressOutcome::Fire);
        assert!(!countdown.is_armed());
        assert_eq!(countdown.label(), "Start");
        assert_eq!(countdown.tick(after(start, 200)), TickOutcome::Idle);
    }
}
