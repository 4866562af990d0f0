//! Alert levels derived from an evaluation of the atmosphere.

use crate::{config::AlertThresholds, isa::AtmosphericState};
use metfor::{Celsius, Feet};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Temperatures below this are flagged on the temperature readout.
const LOW_TEMPERATURE: Celsius = Celsius(-50.0);

/// How concerning the density altitude is compared to the true altitude.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, AsRefStr, EnumIter, EnumString,
)]
pub enum DensityAltitudeAlert {
    /// Density altitude within the warning threshold of the true altitude.
    #[strum(to_string = "normal")]
    Normal,
    /// Density altitude above the warning threshold.
    #[strum(to_string = "warning")]
    Warning,
    /// Density altitude above the critical threshold.
    #[strum(to_string = "critical")]
    Critical,
}

impl DensityAltitudeAlert {
    /// Classify a density altitude offset, the density altitude minus the true altitude.
    ///
    /// Both thresholds are exclusive, an offset exactly on a threshold stays at the lower level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isa_analysis::{AlertThresholds, DensityAltitudeAlert};
    /// use metfor::Feet;
    ///
    /// let thresholds = AlertThresholds::default();
    ///
    /// assert_eq!(
    ///     DensityAltitudeAlert::classify(Feet(1_000.0), &thresholds),
    ///     DensityAltitudeAlert::Normal
    /// );
    /// assert_eq!(
    ///     DensityAltitudeAlert::classify(Feet(1_200.0), &thresholds),
    ///     DensityAltitudeAlert::Warning
    /// );
    /// assert_eq!(
    ///     DensityAltitudeAlert::classify(Feet(3_600.0), &thresholds),
    ///     DensityAltitudeAlert::Critical
    /// );
    /// ```
    pub fn classify(offset: Feet, thresholds: &AlertThresholds) -> Self {
        if offset > thresholds.critical() {
            DensityAltitudeAlert::Critical
        } else if offset > thresholds.warning() {
            DensityAltitudeAlert::Warning
        } else {
            DensityAltitudeAlert::Normal
        }
    }

    /// Classify the density altitude of an evaluated state.
    #[inline]
    pub fn for_state(state: &AtmosphericState, thresholds: &AlertThresholds) -> Self {
        Self::classify(state.density_altitude_offset(), thresholds)
    }

    /// Anything other than `Normal`.
    #[inline]
    pub fn is_alert(self) -> bool {
        self != DensityAltitudeAlert::Normal
    }
}

/// Is the actual temperature cold enough to flag?
#[inline]
pub fn low_temperature_alert(state: &AtmosphericState) -> bool {
    state.temperature < LOW_TEMPERATURE
}
