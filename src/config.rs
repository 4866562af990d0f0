//! Configuration for altitude sweeps and density altitude alerts.

use metfor::{Feet, Quantity};

/// Largest number of altitudes a sweep may visit.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// The altitudes visited when building a profile.
///
/// The default covers the display range, 0 to 60,000 ft every 2,000 ft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    floor: Feet,
    ceiling: Feet,
    step: Feet,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            floor: Feet(0.0),
            ceiling: Feet(60_000.0),
            step: Feet(2_000.0),
        }
    }
}

impl SweepConfig {
    /// Create a new sweep with the default range. This is a proxy for default with a clearer name.
    #[inline]
    pub fn new() -> Self {
        SweepConfig::default()
    }

    /// Builder method for the lowest altitude in the sweep.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isa_analysis::SweepConfig;
    /// use metfor::Feet;
    ///
    /// let cfg = SweepConfig::new()
    ///     .with_floor(Feet(5_000.0))
    ///     .with_ceiling(Feet(15_000.0))
    ///     .with_step(Feet(500.0));
    ///
    /// assert_eq!(cfg.floor(), Feet(5_000.0));
    /// assert_eq!(cfg.num_points(), Some(21));
    /// ```
    #[inline]
    pub fn with_floor(self, floor: Feet) -> Self {
        Self { floor, ..self }
    }

    /// Builder method for the highest altitude in the sweep.
    #[inline]
    pub fn with_ceiling(self, ceiling: Feet) -> Self {
        Self { ceiling, ..self }
    }

    /// Builder method for the spacing between altitudes.
    #[inline]
    pub fn with_step(self, step: Feet) -> Self {
        Self { step, ..self }
    }

    /// Lowest altitude in the sweep.
    #[inline]
    pub fn floor(&self) -> Feet {
        self.floor
    }

    /// Highest altitude the sweep may reach.
    #[inline]
    pub fn ceiling(&self) -> Feet {
        self.ceiling
    }

    /// Spacing between altitudes.
    #[inline]
    pub fn step(&self) -> Feet {
        self.step
    }

    /// The number of altitudes in the sweep, or `None` if the configuration cannot produce a
    /// sweep. The ceiling is included if it falls on a step.
    ///
    /// A step so small the sweep would need more than [`MAX_SWEEP_POINTS`] altitudes cannot
    /// produce a sweep either.
    pub fn num_points(&self) -> Option<usize> {
        let (floor, ceiling, step) = (
            self.floor.unpack(),
            self.ceiling.unpack(),
            self.step.unpack(),
        );

        if !floor.is_finite() || !ceiling.is_finite() || !step.is_finite() {
            return None;
        }
        if step <= 0.0 || ceiling < floor {
            return None;
        }

        // Allow a little slop so a ceiling sitting on a step isn't lost to rounding error.
        let steps = ((ceiling - floor) / step + 1.0e-9).floor();
        if steps >= MAX_SWEEP_POINTS as f64 {
            return None;
        }

        Some(steps as usize + 1)
    }
}

/// Thresholds on how far the density altitude may sit above the true altitude before raising an
/// alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThresholds {
    warning: Feet,
    critical: Feet,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        AlertThresholds {
            warning: Feet(1_000.0),
            critical: Feet(3_000.0),
        }
    }
}

impl AlertThresholds {
    /// Create thresholds with the default values of 1,000 ft and 3,000 ft.
    #[inline]
    pub fn new() -> Self {
        AlertThresholds::default()
    }

    /// Builder method for the warning threshold.
    #[inline]
    pub fn with_warning(self, warning: Feet) -> Self {
        Self { warning, ..self }
    }

    /// Builder method for the critical threshold.
    #[inline]
    pub fn with_critical(self, critical: Feet) -> Self {
        Self { critical, ..self }
    }

    /// Offsets above this raise a warning.
    #[inline]
    pub fn warning(&self) -> Feet {
        self.warning
    }

    /// Offsets above this are critical.
    #[inline]
    pub fn critical(&self) -> Feet {
        self.critical
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_sweep() {
        let cfg = SweepConfig::default();
        assert_eq!(cfg.floor(), Feet(0.0));
        assert_eq!(cfg.ceiling(), Feet(60_000.0));
        assert_eq!(cfg.step(), Feet(2_000.0));
        assert_eq!(cfg.num_points(), Some(31));
    }

    #[test]
    fn test_ceiling_off_step() {
        let cfg = SweepConfig::new().with_ceiling(Feet(5_500.0));
        assert_eq!(cfg.num_points(), Some(3));

        let cfg = SweepConfig::new()
            .with_ceiling(Feet(1.0))
            .with_step(Feet(0.1));
        assert_eq!(cfg.num_points(), Some(11));
    }

    #[test]
    fn test_invalid_sweeps() {
        assert!(SweepConfig::new().with_step(Feet(0.0)).num_points().is_none());
        assert!(SweepConfig::new().with_step(Feet(-100.0)).num_points().is_none());
        assert!(SweepConfig::new().with_ceiling(Feet(-1.0)).num_points().is_none());
        assert!(SweepConfig::new()
            .with_floor(Feet(std::f64::NAN))
            .num_points()
            .is_none());
        assert!(SweepConfig::new()
            .with_ceiling(Feet(std::f64::INFINITY))
            .num_points()
            .is_none());

        // Finite and positive, but far too many points.
        assert!(SweepConfig::new()
            .with_step(Feet(1.0e-300))
            .num_points()
            .is_none());
        assert!(SweepConfig::new()
            .with_step(Feet(1.0e-6))
            .num_points()
            .is_none());

        // Right at the limit.
        let cfg = SweepConfig::new()
            .with_ceiling(Feet((MAX_SWEEP_POINTS - 1) as f64))
            .with_step(Feet(1.0));
        assert_eq!(cfg.num_points(), Some(MAX_SWEEP_POINTS));
        assert!(cfg
            .with_ceiling(Feet(MAX_SWEEP_POINTS as f64))
            .num_points()
            .is_none());

        // A single point sweep is fine.
        let cfg = SweepConfig::new()
            .with_floor(Feet(1_000.0))
            .with_ceiling(Feet(1_000.0));
        assert_eq!(cfg.num_points(), Some(1));
    }

    #[test]
    fn test_thresholds() {
        let thresholds = AlertThresholds::new().with_warning(Feet(500.0));
        assert_eq!(thresholds.warning(), Feet(500.0));
        assert_eq!(thresholds.critical(), Feet(3_000.0));
    }
}
