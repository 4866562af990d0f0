//! Physical constants and reference values of the two layer standard atmosphere.

/// Gravitational acceleration (m/s^2).
pub const G: f64 = 9.80665;

/// Specific gas constant for dry air (J/(kg K)).
pub const R_DRY_AIR: f64 = 287.052_87;

/// Ratio of specific heats for dry air.
pub const GAMMA: f64 = 1.40;

/// Sea level standard pressure (Pa).
pub const P0: f64 = 101_325.0;

/// Sea level standard temperature (K).
pub const T0: f64 = 288.15;

/// Temperature lapse rate in the troposphere (K/m).
pub const LAPSE_RATE: f64 = 0.0065;

/// Height of the tropopause (m).
pub const TROPOPAUSE_M: f64 = 11_000.0;

/// Height of the tropopause (ft).
pub const TROPOPAUSE_FT: f64 = TROPOPAUSE_M * FEET_PER_METER;

/// Sea level standard density (kg/m^3).
pub const RHO0: f64 = 1.225;

/// Feet in a meter, as used to convert the altitude input.
pub const FEET_PER_METER: f64 = 3.28084;

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Knots in one meter per second.
pub const KNOTS_PER_MPS: f64 = 1.94384;

/// Inches of mercury in one hectopascal.
pub const INHG_PER_HPA: f64 = 0.02953;

/// Feet of density altitude per degree Celsius of deviation from standard temperature. This is the
/// pilot's rule of thumb, not an inversion of the density profile.
pub const DENSITY_ALTITUDE_FT_PER_C: f64 = 120.0;
