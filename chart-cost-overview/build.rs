//! Stages `fixtures/resources.csv` (per-resource monthly cost:
//! `name,previous,current,category`) in OUT_DIR for `include_str!`.
//!
//! A missing fixture yields a header-only CSV, so the page builds and
//! renders an empty chart instead of failing the build.

use std::env;
use std::fs;
use std::path::PathBuf;

const FIXTURE: &str = "../fixtures/resources.csv";
const HEADER: &str = "name,previous,current,category\n";

fn main() {
    println!("cargo:rerun-if-changed={FIXTURE}");
    println!("cargo:rerun-if-changed=build.rs");

    let dest = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"))
        .join("resources.csv");

    let csv = fs::read_to_string(FIXTURE).unwrap_or_else(|_| {
        println!("cargo:warning=no resource fixture at {FIXTURE}, embedding header only");
        HEADER.to_string()
    });
    if !csv.starts_with("name,") {
        println!("cargo:warning={FIXTURE} does not start with the expected header");
    }

    fs::write(&dest, csv)
        .unwrap_or_else(|e| panic!("writing {}: {e}", dest.display()));
}
