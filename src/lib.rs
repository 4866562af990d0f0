#![warn(missing_docs)]
//! Functions and data types for evaluating the International Standard Atmosphere (ISA).
//!
//! The heart of the crate is [`evaluate`], a pure function taking an altitude and a deviation from
//! the standard temperature and returning an [`AtmosphericState`]: temperature, pressure, density,
//! speed of sound and density altitude. Everything else in the crate is built on repeated calls
//! to it.
//!
//!  - [`profile`] sweeps the altitude range to build standard and actual curves for plotting.
//!  - [`Analysis`] bundles a single evaluation with its density altitude alert.
//!  - [`controls`], [`dashboard`] and [`units`] hold the state and the formatted values a display
//!    needs, without doing any drawing.
//!
//! # Examples
//!
//! ```rust
//! use isa_analysis::{evaluate, AtmosphericLayer, DensityAltitudeAlert, Analysis};
//! use metfor::{Celsius, CelsiusDiff, Feet};
//!
//! let state = evaluate(Feet(10_000.0), CelsiusDiff(0.0));
//! assert_eq!(state.temperature, Celsius(-4.8));
//! assert_eq!(state.density_altitude, Feet(10_000.0));
//! assert_eq!(state.layer(), AtmosphericLayer::Troposphere);
//!
//! let hot_and_high = Analysis::new(Feet(6_000.0), CelsiusDiff(30.0));
//! assert_eq!(hot_and_high.density_altitude_alert(), DensityAltitudeAlert::Critical);
//! ```

//
// API
//
pub use crate::{
    alerts::{low_temperature_alert, DensityAltitudeAlert},
    analysis::Analysis,
    config::{AlertThresholds, SweepConfig, MAX_SWEEP_POINTS},
    error::{IsaError, Result},
    isa::{evaluate, evaluate_exact, AtmosphericLayer, AtmosphericState},
    keys::{Curve, ProfileVariable},
    profile::{atmosphere_profile, ProfilePoint},
    units::UnitSystem,
};

pub mod controls;
pub mod dashboard;
pub mod isa;
pub mod profile;
pub mod units;

//
// Internal use only
//

// Modules
mod alerts;
mod analysis;
mod config;
mod error;
mod keys;
mod utility;
