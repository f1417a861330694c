use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous tick, in seconds.
    pub dt: f32,

    /// Timestamp the tick was taken at.
    pub now: Instant,

    pub frame_index: u64,
}

/// Produces clamped frame deltas for driving [`Damped`](super::Damped) and
/// other step-based blends.
///
/// Delta time is clamped so a debugger pause or a stalled frame does not feed
/// a huge `step` into `mix_over`, and a tight loop never feeds zero.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Clock starting now, clamping dt to `100µs..=250ms`.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Clock clamping dt to `dt_min..=dt_max`. Swapped bounds are reordered.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        let (dt_min, dt_max) = if dt_min <= dt_max { (dt_min, dt_max) } else { (dt_max, dt_min) };
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    /// Moves the baseline to `now` without producing a frame.
    pub fn reset_at(&mut self, now: Instant) {
        self.last = now;
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// Timestamps earlier than the previous tick count as zero elapsed time
    /// (and are then raised to the minimum clamp).
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let elapsed = now.saturating_duration_since(self.last);
        let dt = if elapsed < self.dt_min {
            self.dt_min
        } else if elapsed > self.dt_max {
            self.dt_max
        } else {
            elapsed
        };

        if dt != elapsed {
            log::trace!(
                "frame {}: dt {:?} clamped to {:?}",
                self.frame_index,
                elapsed,
                dt
            );
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
