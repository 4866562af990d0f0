use metfor::{CelsiusDiff, Feet};

/// Altitudes from below sea level to well above the tropopause.
pub fn altitudes() -> Vec<Feet> {
    (-10..=130).map(|i| Feet(f64::from(i) * 500.0)).collect()
}

/// The deviations selectable on the input panel.
pub fn deviations() -> Vec<CelsiusDiff> {
    (-30..=30).map(|i| CelsiusDiff(f64::from(i))).collect()
}
