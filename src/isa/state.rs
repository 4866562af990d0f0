use super::AtmosphericLayer;
use crate::utility::{round_half_up, round_to};
use metfor::{Celsius, CelsiusDiff, Fahrenheit, Feet, HectoPascal, Knots, Quantity};

/// The derived properties of the atmosphere at one altitude for one ISA deviation.
///
/// Values returned by [`evaluate`](crate::evaluate) are rounded to display precision, values from
/// [`evaluate_exact`](crate::evaluate_exact) are not. Either way the record is a plain value, it is
/// rebuilt on every call and never shared or mutated by this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericState {
    /// The altitude these values were calculated for.
    pub altitude: Feet,
    /// The deviation from standard temperature these values were calculated for.
    pub isa_deviation: CelsiusDiff,
    /// Actual temperature, the standard temperature plus the deviation.
    pub temperature: Celsius,
    /// Actual temperature in Fahrenheit.
    pub temperature_f: Fahrenheit,
    /// Static pressure.
    pub pressure: HectoPascal,
    /// Static pressure in inches of mercury.
    pub pressure_in_hg: f64,
    /// Air density in kg/m^3.
    pub density: f64,
    /// Density as a percentage of the sea level standard density.
    pub density_ratio: f64,
    /// Local speed of sound at the actual temperature.
    pub speed_of_sound: Knots,
    /// Altitude in the standard atmosphere with the same density, by the 120 ft/&deg;C rule.
    pub density_altitude: Feet,
    /// Standard temperature at this altitude, the deviation is not applied.
    pub isa_temperature: Celsius,
}

impl AtmosphericState {
    /// Round every derived value to its display precision.
    ///
    /// Temperatures, hPa, density ratio and speed of sound keep 1 decimal place, inches of
    /// mercury 2, and density 3. Density altitude goes to the nearest foot. The inputs echoed in
    /// `altitude` and `isa_deviation` are left alone.
    #[must_use]
    pub fn rounded(&self) -> Self {
        AtmosphericState {
            altitude: self.altitude,
            isa_deviation: self.isa_deviation,
            temperature: Celsius(round_to(self.temperature.unpack(), 1)),
            temperature_f: Fahrenheit(round_to(self.temperature_f.unpack(), 1)),
            pressure: HectoPascal(round_to(self.pressure.unpack(), 1)),
            pressure_in_hg: round_to(self.pressure_in_hg, 2),
            density: round_to(self.density, 3),
            density_ratio: round_to(self.density_ratio, 1),
            speed_of_sound: Knots(round_to(self.speed_of_sound.unpack(), 1)),
            density_altitude: Feet(round_half_up(self.density_altitude.unpack())),
            isa_temperature: Celsius(round_to(self.isa_temperature.unpack(), 1)),
        }
    }

    /// How far the density altitude sits above the true altitude. Negative on a cold day.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isa_analysis::evaluate;
    /// use metfor::{CelsiusDiff, Feet};
    ///
    /// let hot_day = evaluate(Feet(5_000.0), CelsiusDiff(15.0));
    /// assert_eq!(hot_day.density_altitude_offset(), Feet(1_800.0));
    /// ```
    #[inline]
    pub fn density_altitude_offset(&self) -> Feet {
        Feet(self.density_altitude.unpack() - self.altitude.unpack())
    }

    /// The layer of the model used to calculate this state.
    #[inline]
    pub fn layer(&self) -> AtmosphericLayer {
        AtmosphericLayer::at(self.altitude)
    }
}
