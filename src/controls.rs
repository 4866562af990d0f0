//! State of the inputs driving an evaluation.
//!
//! The evaluator accepts any altitude and deviation. The input panel is where values are kept to
//! the displayed ranges: the altitude slider runs 0 to 60,000 ft in 100 ft steps and the deviation
//! runs from -30 to +30 &deg;C in whole degrees.

use crate::{
    analysis::Analysis,
    config::SweepConfig,
    error::{IsaError, Result},
    profile::{atmosphere_profile, ProfilePoint},
    units::{feet_to_meters, meters_to_feet, UnitSystem},
};
use metfor::{CelsiusDiff, Feet, Meters, Quantity};
use strum_macros::{AsRefStr, Display, EnumIter};

#[cfg(feature = "log")]
use log::debug;

/// Lowest selectable altitude.
pub const ALTITUDE_MIN: Feet = Feet(0.0);
/// Highest selectable altitude.
pub const ALTITUDE_MAX: Feet = Feet(60_000.0);
/// Altitude slider increment.
pub const ALTITUDE_STEP: Feet = Feet(100.0);
/// Coldest selectable deviation.
pub const DEVIATION_MIN: CelsiusDiff = CelsiusDiff(-30.0);
/// Warmest selectable deviation.
pub const DEVIATION_MAX: CelsiusDiff = CelsiusDiff(30.0);
/// Deviation slider increment.
pub const DEVIATION_STEP: CelsiusDiff = CelsiusDiff(1.0);

/// Shortcuts to commonly used altitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum AltitudePreset {
    /// 0 ft
    #[strum(to_string = "Sea Level")]
    SeaLevel,
    /// 10,000 ft
    FL100,
    /// 25,000 ft
    FL250,
    /// 35,000 ft
    FL350,
    /// 41,000 ft
    FL410,
    /// 51,000 ft
    FL510,
}

impl AltitudePreset {
    /// The altitude of the preset.
    pub fn altitude(self) -> Feet {
        match self {
            AltitudePreset::SeaLevel => Feet(0.0),
            AltitudePreset::FL100 => Feet(10_000.0),
            AltitudePreset::FL250 => Feet(25_000.0),
            AltitudePreset::FL350 => Feet(35_000.0),
            AltitudePreset::FL410 => Feet(41_000.0),
            AltitudePreset::FL510 => Feet(51_000.0),
        }
    }
}

/// The inputs of an evaluation and the unit system used to display and enter them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputPanel {
    altitude: Feet,
    isa_deviation: CelsiusDiff,
    units: UnitSystem,
}

impl Default for InputPanel {
    fn default() -> Self {
        InputPanel {
            altitude: ALTITUDE_MIN,
            isa_deviation: CelsiusDiff(0.0),
            units: UnitSystem::default(),
        }
    }
}

impl InputPanel {
    /// Sea level, standard temperature and metric units.
    #[inline]
    pub fn new() -> Self {
        InputPanel::default()
    }

    /// The selected altitude.
    #[inline]
    pub fn altitude(&self) -> Feet {
        self.altitude
    }

    /// The selected deviation.
    #[inline]
    pub fn isa_deviation(&self) -> CelsiusDiff {
        self.isa_deviation
    }

    /// The selected unit system.
    #[inline]
    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// Move the altitude slider. The value snaps to the nearest step inside the range.
    pub fn set_altitude(&mut self, altitude: Feet) {
        self.altitude = Feet(snap(
            altitude.unpack(),
            ALTITUDE_STEP.unpack(),
            ALTITUDE_MIN.unpack(),
            ALTITUDE_MAX.unpack(),
        ));
    }

    /// Move the deviation slider. The value snaps to the nearest whole degree inside the range.
    pub fn set_isa_deviation(&mut self, isa_deviation: CelsiusDiff) {
        self.isa_deviation = CelsiusDiff(snap(
            isa_deviation.unpack(),
            DEVIATION_STEP.unpack(),
            DEVIATION_MIN.unpack(),
            DEVIATION_MAX.unpack(),
        ));
    }

    /// Type an altitude in the current unit system.
    ///
    /// Any fractional part is dropped, meters are converted to whole feet, and the result is
    /// clamped to the altitude range without snapping to a slider step. Text that isn't a number
    /// leaves the altitude alone and returns an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isa_analysis::controls::InputPanel;
    /// use metfor::Feet;
    ///
    /// let mut panel = InputPanel::new();
    ///
    /// assert_eq!(panel.enter_altitude("1000").unwrap(), Feet(3_281.0));
    /// assert_eq!(panel.enter_altitude("25000").unwrap(), Feet(60_000.0));
    /// assert!(panel.enter_altitude("high").is_err());
    /// assert_eq!(panel.altitude(), Feet(60_000.0));
    /// ```
    pub fn enter_altitude(&mut self, text: &str) -> Result<Feet> {
        let val = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|val| val.is_finite())
            .ok_or_else(|| IsaError::InvalidNumber(text.to_owned()))?
            .trunc();

        let feet = match self.units {
            UnitSystem::Metric => meters_to_feet(Meters(val)).unpack(),
            UnitSystem::Imperial => val,
        };

        let clamped = feet.max(ALTITUDE_MIN.unpack()).min(ALTITUDE_MAX.unpack());

        #[cfg(feature = "log")]
        if (clamped - feet).abs() > 0.0 {
            debug!("entered altitude {} ft clamped to {} ft", feet, clamped);
        }

        self.altitude = Feet(clamped);
        Ok(self.altitude)
    }

    /// The text of the altitude entry box, the altitude in whole units of the current system.
    pub fn manual_altitude_text(&self) -> String {
        let val = match self.units {
            UnitSystem::Metric => feet_to_meters(self.altitude).unpack(),
            UnitSystem::Imperial => self.altitude.unpack(),
        };

        format!("{}", val)
    }

    /// Jump to a preset altitude.
    #[inline]
    pub fn apply_preset(&mut self, preset: AltitudePreset) {
        self.altitude = preset.altitude();
    }

    /// Back to sea level and standard temperature. The unit system is kept.
    #[inline]
    pub fn reset(&mut self) {
        self.altitude = ALTITUDE_MIN;
        self.isa_deviation = CelsiusDiff(0.0);
    }

    /// Switch between metric and imperial.
    #[inline]
    pub fn toggle_units(&mut self) {
        self.units = self.units.toggle();
    }

    /// How far up the slider the altitude is, 0 to 100.
    #[inline]
    pub fn slider_percent(&self) -> f64 {
        self.altitude.unpack() / ALTITUDE_MAX.unpack() * 100.0
    }

    /// Evaluate the atmosphere for the current inputs.
    #[inline]
    pub fn analysis(&self) -> Analysis {
        Analysis::new(self.altitude, self.isa_deviation)
    }

    /// The standard and actual profile for the current deviation over the default sweep.
    pub fn profile(&self) -> Result<Vec<ProfilePoint>> {
        atmosphere_profile(&SweepConfig::default(), self.isa_deviation)
    }
}

/// Snap to the nearest multiple of `step` and clamp to the range. NaN goes to the bottom of the
/// range.
fn snap(val: f64, step: f64, min: f64, max: f64) -> f64 {
    if val.is_nan() {
        return min;
    }

    let snapped = (val / step).round() * step;

    #[cfg(feature = "log")]
    if snapped < min || snapped > max {
        debug!("slider value {} clamped to [{}, {}]", val, min, max);
    }

    snapped.max(min).min(max)
}
