use std::env;
use std::path::PathBuf;

fn main() {
    // Get the repo root directory at build time.
    // CARGO_MANIFEST_DIR for zeroapi-core is crates/zeroapi-core, so we go up two levels.
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let crate_path = PathBuf::from(&manifest_dir);

    // Navigate to workspace root (two directories up from crates/zeroapi-core)
    let repo_root = crate_path
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map_or_else(|| crate_path.clone(), std::path::Path::to_path_buf);

    // The package root holds go/main.go and the prebuilt/compiled parser binaries
    println!(
        "cargo:rustc-env=ZEROAPI_PACKAGE_ROOT={}",
        repo_root.to_string_lossy()
    );

    println!("cargo:rerun-if-changed=build.rs");
}
