//! Values for a dashboard display, formatted but not drawn.
//!
//! Numbers are formatted with the shortest representation that round trips, so a rounded value of
//! `15.0` reads "15" and `1013.3` reads "1013.3".

use crate::{
    analysis::Analysis,
    isa::constants::TROPOPAUSE_FT,
    units::{
        feet_to_meters, flight_level, format_altitude, group_thousands, knots_to_kmh,
        knots_to_meters_per_second, UnitSystem,
    },
    utility::round_half_up,
};
use metfor::{Feet, Quantity};

/// A single labeled readout.
#[derive(Debug, Clone, PartialEq)]
pub struct DataCard {
    /// What the card shows.
    pub label: &'static str,
    /// The main value.
    pub value: String,
    /// Unit of the main value.
    pub unit: &'static str,
    /// A secondary value, usually the main value in the other unit system.
    pub sub_value: Option<String>,
    /// Whether the card should be highlighted.
    pub alert: bool,
}

/// The readouts for an analysis: temperature, pressure, density, speed of sound and density
/// altitude, in that order.
///
/// # Examples
///
/// ```rust
/// use isa_analysis::{Analysis, UnitSystem};
/// use isa_analysis::dashboard::data_cards;
/// use metfor::{CelsiusDiff, Feet};
///
/// let anal = Analysis::new(Feet(0.0), CelsiusDiff(0.0));
/// let cards = data_cards(&anal, UnitSystem::Imperial);
///
/// assert_eq!(cards[0].label, "Temperature");
/// assert_eq!(cards[0].value, "59");
/// assert_eq!(cards[0].unit, "°F");
/// assert_eq!(cards[0].sub_value.as_deref(), Some("15°C"));
/// ```
pub fn data_cards(anal: &Analysis, units: UnitSystem) -> Vec<DataCard> {
    let state = anal.state();
    let metric = units == UnitSystem::Metric;

    let temperature = DataCard {
        label: "Temperature",
        value: if metric {
            number(state.temperature.unpack())
        } else {
            number(state.temperature_f.unpack())
        },
        unit: units.temperature_unit(),
        sub_value: Some(if metric {
            format!("{}°F", number(state.temperature_f.unpack()))
        } else {
            format!("{}°C", number(state.temperature.unpack()))
        }),
        alert: anal.low_temperature_alert(),
    };

    let pressure = DataCard {
        label: "Pressure",
        value: if metric {
            number(state.pressure.unpack())
        } else {
            number(state.pressure_in_hg)
        },
        unit: units.pressure_unit(),
        sub_value: Some(if metric {
            format!("{} inHg", number(state.pressure_in_hg))
        } else {
            format!("{} hPa", number(state.pressure.unpack()))
        }),
        alert: false,
    };

    let density = DataCard {
        label: "Density",
        value: number(state.density),
        unit: "kg/m³",
        sub_value: Some(format!("Ratio: {}%", number(state.density_ratio))),
        alert: false,
    };

    let speed_of_sound = DataCard {
        label: "Speed of Sound",
        value: format!(
            "{:.1}",
            knots_to_meters_per_second(state.speed_of_sound).unpack()
        ),
        unit: "m/s",
        sub_value: Some(if metric {
            format!("{} km/h", number(knots_to_kmh(state.speed_of_sound)))
        } else {
            format!("{} kts", number(state.speed_of_sound.unpack()))
        }),
        alert: false,
    };

    let offset = anal.density_altitude_offset();
    let density_altitude = DataCard {
        label: "Density Altitude",
        value: display_length(state.density_altitude, units),
        unit: units.altitude_unit(),
        sub_value: Some(format!("Offset: {}", signed(display_length(offset, units)))),
        alert: anal.density_altitude_alert().is_alert(),
    };

    vec![
        temperature,
        pressure,
        density,
        speed_of_sound,
        density_altitude,
    ]
}

/// The position summary, flight level and altitude, e.g. "FL100 / 3,048 m".
pub fn header_badge(altitude: Feet, units: UnitSystem) -> String {
    format!(
        "{} / {}",
        flight_level(altitude),
        format_altitude(altitude, units)
    )
}

/// Axis ranges and labels for plotting a profile against altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartAxes {
    /// The unit system the axes are in.
    pub units: UnitSystem,
    /// Range of the temperature axis.
    pub temperature_domain: (f64, f64),
    /// Range of the pressure axis.
    pub pressure_domain: (f64, f64),
    /// Range of the altitude axis, always in feet.
    pub altitude_domain: (Feet, Feet),
    /// Where to draw the boundary between the troposphere and the stratosphere.
    pub tropopause: Feet,
}

impl ChartAxes {
    /// The axes for a unit system.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isa_analysis::UnitSystem;
    /// use isa_analysis::dashboard::ChartAxes;
    ///
    /// let axes = ChartAxes::for_units(UnitSystem::Imperial);
    /// assert_eq!(axes.temperature_domain, (-112.0, 104.0));
    /// assert_eq!(axes.temperature_label(), "TEMP (°F)");
    /// ```
    pub fn for_units(units: UnitSystem) -> Self {
        let (temperature_domain, pressure_domain) = match units {
            UnitSystem::Metric => ((-80.0, 40.0), (0.0, 1100.0)),
            UnitSystem::Imperial => ((-112.0, 104.0), (0.0, 32.0)),
        };

        ChartAxes {
            units,
            temperature_domain,
            pressure_domain,
            altitude_domain: (Feet(0.0), Feet(60_000.0)),
            tropopause: Feet(TROPOPAUSE_FT),
        }
    }

    /// Title for the temperature axis.
    pub fn temperature_label(&self) -> String {
        format!("TEMP ({})", self.units.temperature_unit())
    }

    /// Title for the pressure axis.
    pub fn pressure_label(&self) -> String {
        format!("PRESSURE ({})", self.units.pressure_unit())
    }

    /// Title for the altitude axis.
    pub fn altitude_label(&self) -> String {
        format!("ALTITUDE ({})", self.units.altitude_unit())
    }

    /// Tick label for an altitude in thousands, "3k" for 10,000 ft in metric or "10k" in imperial.
    pub fn altitude_tick(&self, altitude: Feet) -> String {
        let thousands = match self.units {
            UnitSystem::Metric => round_half_up(feet_to_meters(altitude).unpack() / 1000.0),
            UnitSystem::Imperial => altitude.unpack() / 1000.0,
        };

        format!("{}k", thousands)
    }
}

/// Rounding a small negative value leaves -0.0, which should read "0".
fn number(val: f64) -> String {
    (val + 0.0).to_string()
}

fn display_length(length: Feet, units: UnitSystem) -> String {
    let val = match units {
        UnitSystem::Metric => feet_to_meters(length).unpack(),
        UnitSystem::Imperial => round_half_up(length.unpack()),
    };

    group_thousands(val as i64)
}

fn signed(val: String) -> String {
    if val.starts_with('-') {
        val
    } else {
        format!("+{}", val)
    }
}
