use std::time::{Duration, Instant};

/// Without regulation programs run far too fast; one instruction per
/// millisecond is roughly what most of them were written for.
pub const CYCLE_INTERVAL: Duration = Duration::from_millis(1);

/// Rate limiter for the host loop.
///
/// `tick` returns `true` at most once per `interval` and should be called on
/// every iteration of the loop:
///
/// ```no_run
/// # use chip8::ClockRegulator;
/// let mut clock = ClockRegulator::default();
/// loop {
///     if !clock.tick() {
///         // service input, but don't advance the VM
///         continue;
///     }
///     // run one cycle
/// #   break;
/// }
/// ```
#[derive(Debug)]
pub struct ClockRegulator {
    interval: Duration,
    ready_at: Instant,
}

impl ClockRegulator {
    pub fn new(interval: Duration) -> ClockRegulator {
        ClockRegulator {
            interval,
            ready_at: Instant::now(),
        }
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> bool {
        if now >= self.ready_at {
            self.ready_at = now + self.interval;
            true
        } else {
            false
        }
    }
}

impl Default for ClockRegulator {
    fn default() -> ClockRegulator {
        ClockRegulator::new(CYCLE_INTERVAL)
    }
}
