use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Put memory.x and device.x where cortex-m-rt's link.x INCLUDEs can find
    // them. Harmless on the host, where link.x is never used.
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    fs::copy("memory.x", out_dir.join("memory.x")).expect("copy memory.x");
    fs::copy("device.x", out_dir.join("device.x")).expect("copy device.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=device.x");
}
