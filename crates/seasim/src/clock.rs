/// Time as seen by one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClockTick {
    /// Seconds since the simulation started
    pub elapsed: f32,
    /// Seconds since the previous tick
    pub delta: f32,
    /// Number of ticks so far, this one included
    pub frame: u64,
}

/// The single authority for simulation time.
///
/// The host feeds it deltas; nothing in the core reads the wall clock, so tests
/// drive it with whatever deltas they like.
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    current: ClockTick,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at an arbitrary elapsed time
    pub fn starting_at(elapsed: f32) -> Self {
        Self {
            current: ClockTick {
                elapsed,
                ..Default::default()
            },
        }
    }

    /// Advance by `delta` seconds. Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, delta: f32) -> ClockTick {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.current = ClockTick {
            elapsed: self.current.elapsed + delta,
            delta,
            frame: self.current.frame + 1,
        };
        self.current
    }

    pub fn now(&self) -> ClockTick {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = SimulationClock::new();
        clock.advance(0.5);
        let tick = clock.advance(0.25);

        assert_eq!(tick.elapsed, 0.75);
        assert_eq!(tick.delta, 0.25);
        assert_eq!(tick.frame, 2);
        assert_eq!(clock.now(), tick);
    }

    #[test]
    fn test_bad_deltas_do_not_move_time() {
        let mut clock = SimulationClock::starting_at(3.0);
        clock.advance(-1.0);
        let tick = clock.advance(f32::NAN);
        assert_eq!(tick.elapsed, 3.0);
        assert_eq!(tick.frame, 2);
    }
}
