use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

pub mod state_tests;

/// One row of a reference table: the inputs and the expected, rounded, evaluation.
#[derive(Debug, Clone, Copy)]
pub struct TableRow {
    pub altitude_ft: f64,
    pub isa_deviation_c: f64,
    pub temp_c: f64,
    pub temp_f: f64,
    pub pressure_hpa: f64,
    pub pressure_inhg: f64,
    pub density: f64,
    pub density_ratio: f64,
    pub speed_of_sound_kts: f64,
    pub density_altitude_ft: f64,
    pub isa_temp_c: f64,
}

const HEADER: &str = "altitude_ft,isa_deviation_c,temp_c,temp_f,pressure_hpa,pressure_inhg,\
                      density_kg_m3,density_ratio,speed_of_sound_kts,density_altitude_ft,isa_temp_c";

#[allow(unused_macros)] // False alarm
macro_rules! check_file_complete {
    ($test_name:ident, $fname:expr) => {
        #[test]
        fn $test_name() {
            let (header, rows) = utils::load_test_file_with_header($fname);

            assert_eq!(header, utils::header(), "Unexpected columns.");
            assert!(!rows.is_empty(), "No rows in {}", $fname);

            // Rows are in increasing altitude and share one deviation.
            for pair in rows.windows(2) {
                assert!(pair[0].altitude_ft < pair[1].altitude_ft);
                assert_eq!(pair[0].isa_deviation_c, pair[1].isa_deviation_c);
            }
        }
    };
}

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_mod_name:ident, $fname:expr) => {
        mod $test_mod_name {
            use crate::utils::{self, state_tests, TableRow};

            fn load_data() -> Vec<TableRow> {
                utils::load_test_file($fname)
            }

            #[test]
            fn temperature() {
                state_tests::test_temperature(&load_data());
            }

            #[test]
            fn pressure() {
                state_tests::test_pressure(&load_data());
            }

            #[test]
            fn density() {
                state_tests::test_density(&load_data());
            }

            #[test]
            fn speed_of_sound() {
                state_tests::test_speed_of_sound(&load_data());
            }

            #[test]
            fn density_altitude() {
                state_tests::test_density_altitude(&load_data());
            }

            #[test]
            fn rounding_is_last() {
                state_tests::test_rounding_is_last(&load_data());
            }
        }
    };
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn header() -> &'static str {
    HEADER
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn load_test_file(fname: &str) -> Vec<TableRow> {
    load_test_file_with_header(fname).1
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn load_test_file_with_header(fname: &str) -> (String, Vec<TableRow>) {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);

    let mut f = File::open(&test_path).expect(&format!("Error opening file: {:#?}", test_path));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", test_path));

    let mut lines = contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let header = lines.next().expect("Missing header line.").to_owned();

    let rows = lines
        .map(|line| {
            let vals: Vec<f64> = line
                .split(',')
                .map(|token| {
                    f64::from_str(token.trim()).expect(&format!("Bad value {:?}", token))
                })
                .collect();

            assert_eq!(vals.len(), 11, "Wrong number of columns in: {}", line);

            TableRow {
                altitude_ft: vals[0],
                isa_deviation_c: vals[1],
                temp_c: vals[2],
                temp_f: vals[3],
                pressure_hpa: vals[4],
                pressure_inhg: vals[5],
                density: vals[6],
                density_ratio: vals[7],
                speed_of_sound_kts: vals[8],
                density_altitude_ft: vals[9],
                isa_temp_c: vals[10],
            }
        })
        .collect();

    (header, rows)
}

pub fn approx_equal(val1: f64, val2: f64, eps: f64) -> bool {
    assert!(eps > 0.0);

    (val1 - val2).abs() < eps
}
