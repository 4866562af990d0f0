//! Create profiles.
//!
//! A profile is the atmosphere evaluated at a sequence of altitudes, twice at each altitude: once
//! for the standard atmosphere and once with the deviation applied. The two curves are what get
//! plotted against each other, so they are kept side by side in a [`ProfilePoint`].
//!
//! # Examples
//!
//! ```rust
//! use isa_analysis::{atmosphere_profile, Curve, ProfileVariable, SweepConfig, UnitSystem};
//! use isa_analysis::profile::series;
//! use metfor::{CelsiusDiff, Feet};
//!
//! let profile = atmosphere_profile(&SweepConfig::default(), CelsiusDiff(10.0)).unwrap();
//! assert_eq!(profile.len(), 31);
//!
//! let temps = series(&profile, ProfileVariable::Temperature, Curve::Actual, UnitSystem::Metric);
//! assert_eq!(temps[0], (Feet(0.0), 25.0));
//! ```

use crate::{
    config::SweepConfig,
    error::{IsaError, Result},
    isa::{evaluate, AtmosphericState},
    keys::{Curve, ProfileVariable},
    units::{feet_to_meters, UnitSystem},
};
use itertools::Itertools;
use metfor::{CelsiusDiff, Feet, Meters, Quantity};
use optional::{none, some, Optioned};

#[cfg(feature = "log")]
use log::debug;

/// Evaluations of the standard and actual atmosphere at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// The altitude of this point.
    pub altitude: Feet,
    /// The standard atmosphere, no deviation.
    pub standard: AtmosphericState,
    /// The atmosphere with the deviation applied.
    pub actual: AtmosphericState,
}

impl ProfilePoint {
    /// Evaluate both curves at an altitude.
    #[inline]
    pub fn new(altitude: Feet, isa_deviation: CelsiusDiff) -> Self {
        ProfilePoint {
            altitude,
            standard: evaluate(altitude, CelsiusDiff(0.0)),
            actual: evaluate(altitude, isa_deviation),
        }
    }

    /// The altitude in whole meters, for labeling.
    #[inline]
    pub fn altitude_m(&self) -> Meters {
        feet_to_meters(self.altitude)
    }

    /// The evaluation for one curve.
    #[inline]
    pub fn curve(&self, curve: Curve) -> &AtmosphericState {
        match curve {
            Curve::Standard => &self.standard,
            Curve::Actual => &self.actual,
        }
    }
}

/// The altitudes in a sweep, from the floor up to and including the ceiling when it lands on a
/// step.
///
/// Each altitude is computed from its index so there is no drift from repeatedly adding the step.
pub fn altitudes(config: &SweepConfig) -> Result<impl Iterator<Item = Feet>> {
    let num_points = config.num_points().ok_or(IsaError::InvalidSweep)?;
    let floor = config.floor().unpack();
    let step = config.step().unpack();

    #[cfg(feature = "log")]
    debug!(
        "sweeping {} altitudes from {} ft every {} ft",
        num_points, floor, step
    );

    Ok((0..num_points).map(move |i| Feet(floor + i as f64 * step)))
}

/// Build a profile by evaluating both curves at every altitude in the sweep.
pub fn atmosphere_profile(
    config: &SweepConfig,
    isa_deviation: CelsiusDiff,
) -> Result<Vec<ProfilePoint>> {
    let profile = altitudes(config)?
        .map(|alt| ProfilePoint::new(alt, isa_deviation))
        .collect();

    Ok(profile)
}

/// Pull one variable from one curve as (altitude, value) pairs ready for plotting.
///
/// Temperature is in &deg;C or &deg;F and pressure in hPa or inHg, depending on `units`. Density
/// is always kg/m^3.
pub fn series(
    profile: &[ProfilePoint],
    variable: ProfileVariable,
    curve: Curve,
    units: UnitSystem,
) -> Vec<(Feet, f64)> {
    profile
        .iter()
        .map(|pnt| (pnt.altitude, pnt.curve(curve)))
        .map(|(alt, state)| {
            let val = match (variable, units) {
                (ProfileVariable::Temperature, UnitSystem::Metric) => state.temperature.unpack(),
                (ProfileVariable::Temperature, UnitSystem::Imperial) => {
                    state.temperature_f.unpack()
                }
                (ProfileVariable::Pressure, UnitSystem::Metric) => state.pressure.unpack(),
                (ProfileVariable::Pressure, UnitSystem::Imperial) => state.pressure_in_hg,
                (ProfileVariable::Density, _) => state.density,
            };
            (alt, val)
        })
        .collect()
}

/// Get a profile of the temperature lapse rate between points in &deg;C / km.
///
/// The first point has nothing below it, so its value is missing.
pub fn temperature_lapse_rate(profile: &[ProfilePoint], curve: Curve) -> Vec<Optioned<f64>> {
    let first = if profile.is_empty() { None } else { Some(none()) };

    first
        .into_iter()
        .chain(
            profile
                .iter()
                .map(|pnt| {
                    let z = Meters::from(pnt.altitude).unpack();
                    (z, pnt.curve(curve).temperature.unpack())
                })
                .tuple_windows::<(_, _)>()
                .map(|((z0, t0), (z1, t1))| {
                    if z1 == z0 {
                        none()
                    } else {
                        some((t1 - t0) / (z1 - z0) * 1000.0)
                    }
                }),
        )
        .collect()
}
