use std::time::Duration;

/// Ticks to run in one frame before the remainder is thrown away. Keeps a
/// long stall (window drag, suspend) from replaying seconds of catch-up.
const MAX_TICKS_PER_FRAME: u32 = 10;

/// Turns wall-clock frame time into a whole number of simulation ticks at
/// the current tick rate, carrying the remainder between frames. The driver
/// calls `advance` once per frame and steps the simulation that many times.
#[derive(Clone, Debug, Default)]
pub struct TickClock {
    accumulator: f64,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, elapsed: Duration, tick_rate: u32) -> u32 {
        let period = 1.0 / f64::from(tick_rate.max(1));
        self.accumulator += elapsed.as_secs_f64();

        let mut ticks = 0;
        while self.accumulator >= period {
            self.accumulator -= period;
            ticks += 1;
            if ticks == MAX_TICKS_PER_FRAME {
                self.accumulator = 0.0;
                break;
            }
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
