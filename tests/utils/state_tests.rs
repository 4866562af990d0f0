use super::*;
use isa_analysis::{evaluate, evaluate_exact, AtmosphericState};
use metfor::{CelsiusDiff, Feet, Quantity};

// Rounded values only need to agree to far below their display precision.
const EPS: f64 = 1.0e-9;

fn evaluate_row(row: &TableRow) -> AtmosphericState {
    evaluate(Feet(row.altitude_ft), CelsiusDiff(row.isa_deviation_c))
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_temperature(rows: &[TableRow]) {
    for row in rows {
        let state = evaluate_row(row);
        println!("{:#?}", state);

        assert!(approx_equal(state.temperature.unpack(), row.temp_c, EPS));
        assert!(approx_equal(state.temperature_f.unpack(), row.temp_f, EPS));
        assert!(approx_equal(
            state.isa_temperature.unpack(),
            row.isa_temp_c,
            EPS
        ));
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_pressure(rows: &[TableRow]) {
    for row in rows {
        let state = evaluate_row(row);

        assert!(approx_equal(state.pressure.unpack(), row.pressure_hpa, EPS));
        assert!(approx_equal(state.pressure_in_hg, row.pressure_inhg, EPS));
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_density(rows: &[TableRow]) {
    for row in rows {
        let state = evaluate_row(row);

        assert!(approx_equal(state.density, row.density, EPS));
        assert!(approx_equal(state.density_ratio, row.density_ratio, EPS));
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_speed_of_sound(rows: &[TableRow]) {
    for row in rows {
        let state = evaluate_row(row);

        assert!(approx_equal(
            state.speed_of_sound.unpack(),
            row.speed_of_sound_kts,
            EPS
        ));
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_density_altitude(rows: &[TableRow]) {
    for row in rows {
        let state = evaluate_row(row);

        assert_eq!(state.density_altitude, Feet(row.density_altitude_ft));
        assert!(approx_equal(
            state.density_altitude_offset().unpack(),
            120.0 * row.isa_deviation_c,
            EPS
        ));
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_rounding_is_last(rows: &[TableRow]) {
    for row in rows {
        let exact = evaluate_exact(Feet(row.altitude_ft), CelsiusDiff(row.isa_deviation_c));
        let rounded = exact.rounded();

        assert_eq!(rounded, evaluate_row(row));

        // Every rounded value is within half a display unit of the exact one.
        assert!((exact.temperature.unpack() - rounded.temperature.unpack()).abs() <= 0.05);
        assert!((exact.pressure_in_hg - rounded.pressure_in_hg).abs() <= 0.005);
        assert!((exact.density - rounded.density).abs() <= 0.0005);
        assert!(
            (exact.density_altitude.unpack() - rounded.density_altitude.unpack()).abs() <= 0.5
        );
    }
}
