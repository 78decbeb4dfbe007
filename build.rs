//! Build script - adds the ESP32-S3 linker scripts for the firmware build.
//!
//! Host builds (`cargo test`) do not enable `embedded`, so nothing is
//! passed to the linker and the library links like any other crate.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if env::var_os("CARGO_FEATURE_EMBEDDED").is_none() {
        return;
    }

    // linkall.x comes from esp-hal, defmt.x from defmt.
    println!("cargo:rustc-link-arg-bins=-Tlinkall.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
