use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Number of atan(2^-i) terms, including the unused 45 degree one at index 0
const CORDIC_TERMS: usize = 16;

/// Half circle in the units of the CORDIC angle table
const CORDIC_PI: f64 = 65536.0;

fn compute_atan_table() -> [i32; CORDIC_TERMS] {
    (0..CORDIC_TERMS)
        .map(|i| (f64::atan(f64::powi(2.0, -(i as i32))) / core::f64::consts::PI * CORDIC_PI).round() as i32)
        .collect::<Vec<i32>>()
        .try_into()
        .unwrap()
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("cordic_tables.rs");
    let mut f = File::create(dest_path).unwrap();

    let atan_table = compute_atan_table();
    writeln!(&mut f, "/// atan(2^-i), with PI = 0x10000").unwrap();
    writeln!(&mut f, "pub const ATAN_TABLE: [i32; {}] = {:?};", atan_table.len(), atan_table).unwrap();
    println!("cargo:rerun-if-changed=build.rs");
}
