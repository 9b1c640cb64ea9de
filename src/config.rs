//! Configuration for the placement engine

/// Configuration options for placement resolution
#[derive(Debug, Clone)]
pub struct PlacementConfig {
    /// Separation distance applied to props when both points end at the same
    /// location
    pub beta_offset_magnitude: f64,

    /// Magnitude of the default arrow adjustment when no override entry exists
    pub default_adjustment_radius: f64,

    /// Scale applied to the default adjustment in skewed grid mode
    pub skewed_adjustment_scale: f64,

    /// Treat a cardinal/intercardinal subset mismatch as a hard error instead
    /// of defaulting to diamond
    pub strict_grid_mode: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            beta_offset_magnitude: 25.0,
            default_adjustment_radius: 35.0,
            skewed_adjustment_scale: 0.85,
            strict_grid_mode: false,
        }
    }
}

impl PlacementConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the beta separation distance
    pub fn with_beta_offset_magnitude(mut self, magnitude: f64) -> Self {
        self.beta_offset_magnitude = magnitude;
        self
    }

    /// Set the default adjustment magnitude
    pub fn with_default_adjustment_radius(mut self, radius: f64) -> Self {
        self.default_adjustment_radius = radius;
        self
    }

    /// Set the skewed-mode adjustment scale
    pub fn with_skewed_adjustment_scale(mut self, scale: f64) -> Self {
        self.skewed_adjustment_scale = scale;
        self
    }

    /// Enable or disable strict grid-mode derivation
    pub fn with_strict_grid_mode(mut self, strict: bool) -> Self {
        self.strict_grid_mode = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacementConfig::default();
        assert_eq!(config.beta_offset_magnitude, 25.0);
        assert_eq!(config.default_adjustment_radius, 35.0);
        assert_eq!(config.skewed_adjustment_scale, 0.85);
        assert!(!config.strict_grid_mode);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlacementConfig::new()
            .with_beta_offset_magnitude(30.0)
            .with_strict_grid_mode(true);

        assert_eq!(config.beta_offset_magnitude, 30.0);
        assert!(config.strict_grid_mode);
    }
}
