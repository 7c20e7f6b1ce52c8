use crate::params::Params;

/// Startup-tunable simulation settings.
///
/// Constructed once (usually by the session's settings loader) and passed by
/// reference into the controller; physics constants that are not meant to be
/// tuned at startup stay in [`Params`].
#[derive(Debug, Clone)]
pub struct Config {
    pub default_force: f32,
    pub default_angle: f32,
    pub angle_step: f32,
    pub default_spin: f32,
    pub spin_step: f32,
    pub spin_min: f32,
    pub spin_max: f32,
    pub default_pace: f32,
    pub defender_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_force: Params::DEFAULT_FORCE,
            default_angle: Params::DEFAULT_ANGLE,
            angle_step: Params::ANGLE_STEP,
            default_spin: Params::DEFAULT_SPIN,
            spin_step: Params::SPIN_STEP,
            spin_min: Params::SPIN_MIN,
            spin_max: Params::SPIN_MAX,
            default_pace: Params::DEFAULT_PACE,
            defender_speed: Params::DEFENDER_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a launch force to the 0-1000 N envelope
    pub fn clamp_force(&self, force: f32) -> f32 {
        force.clamp(0.0, Params::LAUNCH_FORCE_MAX)
    }

    /// Clamp a launch angle to [0, 90] degrees
    pub fn clamp_angle(&self, angle: f32) -> f32 {
        angle.clamp(0.0, 90.0)
    }

    /// Clamp a spin value to the configured bounds
    pub fn clamp_spin(&self, spin: f32) -> f32 {
        spin.clamp(self.spin_min, self.spin_max)
    }

    /// Clamp the visual pace multiplier
    pub fn clamp_pace(&self, pace: f32) -> f32 {
        pace.clamp(Params::PACE_MIN, Params::PACE_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.default_force, 300.0);
        assert_eq!(config.default_angle, 30.0);
        assert_eq!(config.default_pace, 1.0);
    }

    #[test]
    fn test_clamp_force() {
        let config = Config::new();
        assert_eq!(config.clamp_force(-5.0), 0.0);
        assert_eq!(config.clamp_force(1500.0), 1000.0);
        assert_eq!(config.clamp_force(350.0), 350.0);
    }

    #[test]
    fn test_clamp_spin_uses_configured_bounds() {
        let mut config = Config::new();
        config.spin_min = -100.0;
        config.spin_max = 100.0;
        assert_eq!(config.clamp_spin(-500.0), -100.0);
        assert_eq!(config.clamp_spin(500.0), 100.0);
    }

    #[test]
    fn test_clamp_pace() {
        let config = Config::new();
        assert_eq!(config.clamp_pace(0.0), 0.1);
        assert_eq!(config.clamp_pace(99.0), 10.0);
    }
}
