//! The International Standard Atmosphere (ISA) model.
//!
//! Two layers are modeled, the troposphere with a constant lapse rate up to the tropopause at
//! 11,000 m, and an isothermal layer above it. The isothermal layer is only realistic up to about
//! 20 km (65,000 ft), but nothing stops a caller from asking about higher, or negative, altitudes.
//! The formulas are simply extrapolated.

pub mod constants;
mod state;

pub use self::state::AtmosphericState;

use self::constants::*;
use metfor::{Celsius, CelsiusDiff, Fahrenheit, Feet, HectoPascal, Knots, Quantity};
use strum_macros::{AsRefStr, Display, EnumIter};

/// The layers of the two layer model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum AtmosphericLayer {
    /// Temperature decreases linearly with height.
    Troposphere,
    /// Isothermal layer above the tropopause.
    Stratosphere,
}

impl AtmosphericLayer {
    /// The layer whose formulas apply at `altitude`. The tropopause itself belongs to the
    /// troposphere.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isa_analysis::AtmosphericLayer;
    /// use metfor::Feet;
    ///
    /// assert_eq!(AtmosphericLayer::at(Feet(35_000.0)), AtmosphericLayer::Troposphere);
    /// assert_eq!(AtmosphericLayer::at(Feet(41_000.0)), AtmosphericLayer::Stratosphere);
    /// ```
    #[inline]
    pub fn at(altitude: Feet) -> Self {
        if altitude.unpack() / FEET_PER_METER <= TROPOPAUSE_M {
            AtmosphericLayer::Troposphere
        } else {
            AtmosphericLayer::Stratosphere
        }
    }
}

/// Evaluate the standard atmosphere at an altitude with a temperature deviation, rounded to
/// display precision.
///
/// The deviation shifts the temperature, and through it the density, speed of sound, and density
/// altitude. Pressure comes from the standard atmosphere and ignores the deviation.
///
/// No input is rejected. Altitudes below sea level or far above the isothermal layer, and
/// deviations large enough to push the temperature below absolute zero, give extrapolated and
/// possibly non-physical (or NaN) values.
///
/// # Examples
///
/// ```rust
/// use isa_analysis::evaluate;
/// use metfor::{Celsius, CelsiusDiff, Feet, HectoPascal};
///
/// let sea_level = evaluate(Feet(0.0), CelsiusDiff(0.0));
/// assert_eq!(sea_level.temperature, Celsius(15.0));
/// assert_eq!(sea_level.pressure, HectoPascal(1013.3));
/// assert_eq!(sea_level.density, 1.225);
/// assert_eq!(sea_level.density_altitude, Feet(0.0));
/// ```
#[inline]
pub fn evaluate(altitude: Feet, isa_deviation: CelsiusDiff) -> AtmosphericState {
    evaluate_exact(altitude, isa_deviation).rounded()
}

/// Evaluate the standard atmosphere without any rounding.
///
/// Same as [`evaluate`], but every value keeps full precision. The density altitude is derived
/// from the unrounded temperatures.
pub fn evaluate_exact(altitude: Feet, isa_deviation: CelsiusDiff) -> AtmosphericState {
    let altitude_ft = altitude.unpack();
    let altitude_m = altitude_ft / FEET_PER_METER;

    let (t_isa_k, p_pa) = match AtmosphericLayer::at(altitude) {
        AtmosphericLayer::Troposphere => (
            T0 - LAPSE_RATE * altitude_m,
            troposphere_pressure(altitude_m),
        ),
        AtmosphericLayer::Stratosphere => {
            let t_tropopause = T0 - LAPSE_RATE * TROPOPAUSE_M;
            let p_tropopause = troposphere_pressure(TROPOPAUSE_M);
            let dz = altitude_m - TROPOPAUSE_M;

            (
                t_tropopause,
                p_tropopause * (-G * dz / (R_DRY_AIR * t_tropopause)).exp(),
            )
        }
    };

    // The deviation is a temperature difference, so it applies to Kelvin as is.
    let t_actual_k = t_isa_k + isa_deviation.unpack();
    let t_actual_c = t_actual_k - KELVIN_OFFSET;
    let t_isa_c = t_isa_k - KELVIN_OFFSET;

    let density = p_pa / (R_DRY_AIR * t_actual_k);
    let speed_of_sound_mps = (GAMMA * R_DRY_AIR * t_actual_k).sqrt();
    let pressure_hpa = p_pa / 100.0;

    AtmosphericState {
        altitude,
        isa_deviation,
        temperature: Celsius(t_actual_c),
        temperature_f: Fahrenheit(t_actual_c * 9.0 / 5.0 + 32.0),
        pressure: HectoPascal(pressure_hpa),
        pressure_in_hg: pressure_hpa * INHG_PER_HPA,
        density,
        density_ratio: density / RHO0 * 100.0,
        speed_of_sound: Knots(speed_of_sound_mps * KNOTS_PER_MPS),
        density_altitude: Feet(altitude_ft + DENSITY_ALTITUDE_FT_PER_C * (t_actual_c - t_isa_c)),
        isa_temperature: Celsius(t_isa_c),
    }
}

/// Pressure (Pa) in the troposphere for a height in meters.
#[inline]
fn troposphere_pressure(altitude_m: f64) -> f64 {
    P0 * (1.0 - LAPSE_RATE * altitude_m / T0).powf(G / (R_DRY_AIR * LAPSE_RATE))
}
