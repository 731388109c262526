// File: crates/scatter-core/build.rs
// Summary: Build script to link required Windows system libraries when the Skia PNG backend is enabled.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        if std::env::var_os("CARGO_FEATURE_PNG").is_some() {
            println!("cargo:rustc-link-lib=advapi32");
        }
    }
}
