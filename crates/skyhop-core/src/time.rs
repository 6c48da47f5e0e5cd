/// Longest tick the simulation accepts, in seconds.
///
/// Longer frames are truncated so thin platforms cannot be tunnelled through.
pub const MAX_FRAME_DT: f32 = 0.033;

/// Sanitize a host frame delta: non-finite or negative becomes 0, anything
/// above `max_dt` is truncated to `max_dt`.
///
/// `max_dt` itself never exceeds [`MAX_FRAME_DT`]; a non-positive or
/// non-finite bound falls back to it.
pub fn clamp_frame_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(frame_dt_bound(max_dt))
}

/// Usable upper bound for a tick: `max_dt` if it lies in `(0, MAX_FRAME_DT]`,
/// otherwise `MAX_FRAME_DT`.
pub fn frame_dt_bound(max_dt: f32) -> f32 {
    if max_dt.is_finite() && max_dt > 0.0 {
        max_dt.min(MAX_FRAME_DT)
    } else {
        MAX_FRAME_DT
    }
}

/// Fixed-timestep accumulator for hosts whose frame callbacks arrive at
/// irregular intervals.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
    max_steps_per_frame: u32,
}

impl FixedStep {
    pub fn new(tick_rate_hz: f32) -> Self {
        let hz = if tick_rate_hz.is_finite() && tick_rate_hz > 0.0 {
            tick_rate_hz
        } else {
            60.0
        };
        Self {
            step: 1.0 / hz,
            accumulator: 0.0,
            max_steps_per_frame: 4,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed elapsed wall time and return how many fixed ticks to run.
    ///
    /// Backlog beyond `max_steps_per_frame` ticks is dropped.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += elapsed;
        }
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_steps_per_frame {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if self.accumulator >= self.step {
            tracing::trace!(
                backlog = self.accumulator,
                "Dropping simulation backlog after long frame"
            );
            self.accumulator = 0.0;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_frames_are_truncated() {
        assert_eq!(clamp_frame_dt(0.5, MAX_FRAME_DT), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(0.016, MAX_FRAME_DT), 0.016);
    }

    #[test]
    fn bad_frames_become_zero() {
        assert_eq!(clamp_frame_dt(-0.1, MAX_FRAME_DT), 0.0);
        assert_eq!(clamp_frame_dt(f32::NAN, MAX_FRAME_DT), 0.0);
        assert_eq!(clamp_frame_dt(f32::INFINITY, MAX_FRAME_DT), 0.0);
    }

    #[test]
    fn negative_bound_never_yields_negative_tick() {
        assert_eq!(clamp_frame_dt(1.0 / 60.0, -0.1), 1.0 / 60.0);
        assert_eq!(clamp_frame_dt(0.5, -0.1), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(0.5, 0.0), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(0.5, f32::NAN), MAX_FRAME_DT);
    }

    #[test]
    fn loose_bound_is_capped() {
        assert_eq!(clamp_frame_dt(0.5, 0.5), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(0.5, 0.02), 0.02);
        assert_eq!(frame_dt_bound(1.0), MAX_FRAME_DT);
    }

    #[test]
    fn fixed_step_accumulates() {
        let mut clock = FixedStep::new(60.0);
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.01), 1);
        assert_eq!(clock.advance(1.0 / 30.0), 2);
    }

    #[test]
    fn fixed_step_drops_backlog() {
        let mut clock = FixedStep::new(60.0);
        assert_eq!(clock.advance(1.0), 4);
        assert_eq!(clock.advance(0.0), 0, "backlog should have been dropped");
    }

    #[test]
    fn fixed_step_rejects_bad_rate() {
        let clock = FixedStep::new(0.0);
        assert!((clock.step() - 1.0 / 60.0).abs() < 1e-6);
    }
}
