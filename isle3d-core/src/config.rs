/// Tuning constants for the rotation integrator
use serde::Deserialize;

use crate::error::{IslandError, Result};

/// Per-frame multiplicative velocity decay
pub const DAMPING_FACTOR: f64 = 0.95;

/// Scale applied to every raw impulse before it reaches the velocity
pub const IMPULSE_GAIN: f64 = 0.0015;

/// Raw impulse produced by dragging across one full viewport width
pub const DRAG_MULTIPLIER: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    pub damping: f64,
    pub gain: f64,
    pub drag_multiplier: f64,
}

impl MotionConfig {
    /// Damping must lie in `[0, 1)`; gain and drag multiplier must be finite.
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || !(0.0..1.0).contains(&self.damping) {
            return Err(IslandError::InvalidConfig {
                field: "damping",
                reason: "must be within [0, 1)",
            });
        }
        if !self.gain.is_finite() {
            return Err(IslandError::InvalidConfig {
                field: "gain",
                reason: "must be finite",
            });
        }
        if !self.drag_multiplier.is_finite() {
            return Err(IslandError::InvalidConfig {
                field: "drag_multiplier",
                reason: "must be finite",
            });
        }
        Ok(())
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING_FACTOR,
            gain: IMPULSE_GAIN,
            drag_multiplier: DRAG_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = MotionConfig::default();
        assert_eq!(config.damping, 0.95);
        assert_eq!(config.gain, 0.0015);
        assert_eq!(config.drag_multiplier, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: MotionConfig = toml::from_str("damping = 0.9").unwrap();
        assert_eq!(config.damping, 0.9);
        assert_eq!(config.gain, IMPULSE_GAIN);
        assert_eq!(config.drag_multiplier, DRAG_MULTIPLIER);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<MotionConfig>("dampening = 0.9").is_err());
    }

    #[test]
    fn test_invalid_damping() {
        for damping in [1.0, 1.5, -0.1, f64::NAN] {
            let config = MotionConfig {
                damping,
                ..MotionConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(IslandError::InvalidConfig { field: "damping", .. })
            ));
        }
    }

    #[test]
    fn test_invalid_gain() {
        let config = MotionConfig {
            gain: f64::INFINITY,
            ..MotionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(IslandError::InvalidConfig { field: "gain", .. })
        ));
    }
}
