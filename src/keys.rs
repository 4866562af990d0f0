//! Enums used as keys for selecting values out of a profile.

use strum_macros::{AsRefStr, Display, EnumIter};

/// Variables that can be pulled from a profile as a plottable series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum ProfileVariable {
    /// Temperature, &deg;C or &deg;F depending on the unit system.
    Temperature,
    /// Static pressure, hPa or inHg depending on the unit system.
    Pressure,
    /// Air density in kg/m^3 for either unit system.
    Density,
}

/// Which of the two evaluations at each altitude of a profile to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum Curve {
    /// The standard atmosphere, no deviation applied.
    Standard,
    /// The atmosphere with the live deviation applied.
    Actual,
}
