//! Unit systems and the conversions used to display evaluated values.
//!
//! The evaluator always works in feet and returns fixed units. These conversions only change what
//! is shown, and they round to whole units the way a readout does.

use crate::{
    error::{IsaError, Result},
    utility::{round_half_up, round_to},
};
use metfor::{Feet, Knots, Meters, MetersPSec, Quantity};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

const METERS_PER_FOOT: f64 = 0.3048;
const KMH_PER_KNOT: f64 = 1.852;
const MPS_PER_KNOT: f64 = 0.514_444;

/// The unit system values are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString)]
pub enum UnitSystem {
    /// Meters, &deg;C, hPa and km/h.
    #[strum(to_string = "metric")]
    Metric,
    /// Feet, &deg;F, inHg and knots.
    #[strum(to_string = "imperial")]
    Imperial,
}

impl Default for UnitSystem {
    fn default() -> Self {
        UnitSystem::Metric
    }
}

impl UnitSystem {
    /// Parse a unit system from its name, ignoring surrounding white space and case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isa_analysis::UnitSystem;
    ///
    /// assert_eq!(UnitSystem::parse(" Imperial ").unwrap(), UnitSystem::Imperial);
    /// assert!(UnitSystem::parse("nautical").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        UnitSystem::from_str(&name.trim().to_lowercase())
            .map_err(|_| IsaError::UnknownUnitSystem(name.to_owned()))
    }

    /// The other unit system.
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    /// Label for altitudes.
    #[inline]
    pub fn altitude_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "ft",
        }
    }

    /// Label for temperatures.
    #[inline]
    pub fn temperature_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    /// Label for pressures.
    #[inline]
    pub fn pressure_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "hPa",
            UnitSystem::Imperial => "inHg",
        }
    }

    /// Label for speeds.
    #[inline]
    pub fn speed_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "km/h",
            UnitSystem::Imperial => "kts",
        }
    }
}

/// Convert feet to whole meters.
#[inline]
pub fn feet_to_meters(feet: Feet) -> Meters {
    Meters(round_half_up(feet.unpack() * METERS_PER_FOOT))
}

/// Convert meters to whole feet.
#[inline]
pub fn meters_to_feet(meters: Meters) -> Feet {
    Feet(round_half_up(meters.unpack() / METERS_PER_FOOT))
}

/// Convert knots to whole kilometers per hour.
#[inline]
pub fn knots_to_kmh(speed: Knots) -> f64 {
    round_half_up(speed.unpack() * KMH_PER_KNOT)
}

/// Convert knots to meters per second, to a tenth.
#[inline]
pub fn knots_to_meters_per_second(speed: Knots) -> MetersPSec {
    MetersPSec(round_to(speed.unpack() * MPS_PER_KNOT, 1))
}

/// The flight level for an altitude, hundreds of feet padded to three digits.
///
/// # Examples
///
/// ```rust
/// use isa_analysis::units::flight_level;
/// use metfor::Feet;
///
/// assert_eq!(flight_level(Feet(0.0)), "FL000");
/// assert_eq!(flight_level(Feet(3_500.0)), "FL035");
/// assert_eq!(flight_level(Feet(41_000.0)), "FL410");
/// ```
pub fn flight_level(altitude: Feet) -> String {
    let hundreds = round_half_up(altitude.unpack() / 100.0) as i64;
    format!("FL{:03}", hundreds)
}

/// Format an integer with commas between groups of three digits.
///
/// # Examples
///
/// ```rust
/// use isa_analysis::units::group_thousands;
///
/// assert_eq!(group_thousands(950), "950");
/// assert_eq!(group_thousands(18_288), "18,288");
/// assert_eq!(group_thousands(-1_234_567), "-1,234,567");
/// ```
pub fn group_thousands(val: i64) -> String {
    let digits = val.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if val < 0 {
        grouped.push('-');
    }

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// An altitude in the given unit system with its label, e.g. "3,048 m" or "10,000 ft".
pub fn format_altitude(altitude: Feet, units: UnitSystem) -> String {
    let val = match units {
        UnitSystem::Metric => feet_to_meters(altitude).unpack(),
        UnitSystem::Imperial => round_half_up(altitude.unpack()),
    };

    format!("{} {}", group_thousands(val as i64), units.altitude_unit())
}
