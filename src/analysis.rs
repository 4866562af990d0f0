//! Data type and methods for building and describing an analysis.
//!
//! Not every possible analysis is in this data.
use crate::{
    alerts::{low_temperature_alert, DensityAltitudeAlert},
    config::AlertThresholds,
    isa::{evaluate, AtmosphericLayer, AtmosphericState},
};
use metfor::{CelsiusDiff, Feet};

/// Convenient package for commonly requested analysis values.
///
/// The atmosphere is evaluated once on creation, everything else is derived from that state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    state: AtmosphericState,
    thresholds: AlertThresholds,
}

impl Analysis {
    /// Create a new `Analysis` with the default alert thresholds.
    pub fn new(altitude: Feet, isa_deviation: CelsiusDiff) -> Self {
        Analysis {
            state: evaluate(altitude, isa_deviation),
            thresholds: AlertThresholds::default(),
        }
    }

    /// Builder method for the density altitude alert thresholds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isa_analysis::{AlertThresholds, Analysis, DensityAltitudeAlert};
    /// use metfor::{CelsiusDiff, Feet};
    ///
    /// let anal = Analysis::new(Feet(2_000.0), CelsiusDiff(5.0));
    /// assert_eq!(anal.density_altitude_alert(), DensityAltitudeAlert::Normal);
    ///
    /// let strict = AlertThresholds::new().with_warning(Feet(500.0));
    /// let anal = anal.with_thresholds(strict);
    /// assert_eq!(anal.density_altitude_alert(), DensityAltitudeAlert::Warning);
    /// ```
    #[inline]
    pub fn with_thresholds(self, thresholds: AlertThresholds) -> Self {
        Self { thresholds, ..self }
    }

    /// The evaluated state of the atmosphere.
    #[inline]
    pub fn state(&self) -> &AtmosphericState {
        &self.state
    }

    /// The thresholds used for the density altitude alert.
    #[inline]
    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// The altitude analyzed.
    #[inline]
    pub fn altitude(&self) -> Feet {
        self.state.altitude
    }

    /// The layer of the atmosphere the altitude is in.
    #[inline]
    pub fn layer(&self) -> AtmosphericLayer {
        self.state.layer()
    }

    /// Density altitude minus true altitude.
    #[inline]
    pub fn density_altitude_offset(&self) -> Feet {
        self.state.density_altitude_offset()
    }

    /// Alert level for the density altitude.
    #[inline]
    pub fn density_altitude_alert(&self) -> DensityAltitudeAlert {
        DensityAltitudeAlert::for_state(&self.state, &self.thresholds)
    }

    /// Whether the temperature is low enough to flag.
    #[inline]
    pub fn low_temperature_alert(&self) -> bool {
        low_temperature_alert(&self.state)
    }
}
