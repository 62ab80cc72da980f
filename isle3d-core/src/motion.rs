/// Damped rotation integrator
use crate::config::MotionConfig;

/// Angular velocity and accumulated rotation (radians) around the vertical axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub velocity: f64,
    pub angle: f64,
}

impl RotationState {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Integrates impulses into a decaying velocity and an unbounded angle.
///
/// The angle is never wrapped; consumers that need a bounded value go
/// through [`crate::stage::normalize_angle`].
#[derive(Debug, Clone)]
pub struct Motion {
    config: MotionConfig,
    state: RotationState,
}

impl Motion {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            state: RotationState::zero(),
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    pub fn angle(&self) -> f64 {
        self.state.angle
    }

    /// Add a raw impulse, scaled by the configured gain, to the velocity.
    /// Impulses stack without clamping.
    pub fn apply_impulse(&mut self, raw: f64) {
        self.state.velocity += raw * self.config.gain;
        log::trace!(
            "impulse {raw:+.4} -> velocity {:.6}",
            self.state.velocity
        );
    }

    /// Advance one render frame: decay the velocity, then integrate it into
    /// the angle. Returns the new angle.
    pub fn step(&mut self) -> f64 {
        self.state.velocity *= self.config.damping;
        self.state.angle += self.state.velocity;
        self.state.angle
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}
