/// Frame timing owned by a single driver.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Timestamp of the previous frame in milliseconds, `None` before the first frame.
    last_timestamp: Option<f64>,
    /// Seconds accumulated since the loop (re)started.
    total_time: f64,
}

/// Timing handed to a draw call, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub delta_time: f64,
    pub total_time: f64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `timestamp` (ms) and return its timing.
    ///
    /// The first frame after a reset has a zero delta. Clocks running backwards
    /// also produce a zero delta so `total_time` never decreases.
    pub fn advance(&mut self, timestamp: f64) -> FrameTime {
        let last = self.last_timestamp.replace(timestamp).unwrap_or(timestamp);
        let delta_time = ((timestamp - last) / 1000.0).max(0.0);
        self.total_time += delta_time;
        FrameTime {
            delta_time,
            total_time: self.total_time,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_started(&self) -> bool {
        self.last_timestamp.is_some()
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut state = AnimationState::new();
        let frame = state.advance(5_000.0);
        assert_eq!(
            frame,
            FrameTime {
                delta_time: 0.0,
                total_time: 0.0,
            }
        );
        assert!(state.has_started());
    }

    #[test]
    fn accumulates_deltas() {
        let mut state = AnimationState::new();
        state.advance(1_000.0);
        let frame = state.advance(1_016.0);
        assert!((frame.delta_time - 0.016).abs() < 1e-12);
        let frame = state.advance(1_500.0);
        assert!((frame.total_time - 0.5).abs() < 1e-12);
    }

    #[test]
    fn backwards_clock_does_not_rewind() {
        let mut state = AnimationState::new();
        state.advance(2_000.0);
        state.advance(3_000.0);
        let frame = state.advance(2_500.0);
        assert_eq!(frame.delta_time, 0.0);
        assert_eq!(frame.total_time, 1.0);
        // the next frame measures from the latest timestamp
        assert_eq!(state.advance(3_500.0).total_time, 2.0);
    }

    #[test]
    fn reset_starts_over() {
        let mut state = AnimationState::new();
        state.advance(0.0);
        state.advance(4_000.0);
        state.reset();
        assert!(!state.has_started());
        assert_eq!(state.total_time(), 0.0);
    }
}
