//! Build script for pong-simulator
//!
//! On Windows, links against a vendored SDL2 and places SDL2.dll next to the
//! simulator binary. Other platforms use the system SDL2.

use std::path::{Path, PathBuf};
use std::{env, fs};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let vendor_sdl2 = manifest_dir
        .parent()
        .map_or_else(|| manifest_dir.join("vendor"), |root| root.join("vendor"))
        .join("sdl2");
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!("cargo:warning=SDL2 not found at {}", vendor_sdl2.display());
        println!("cargo:warning=Put SDL2.lib and SDL2.dll in vendor/sdl2/ at the workspace root");
        return;
    }

    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    if let Ok(out_dir) = env::var("OUT_DIR") {
        copy_dll(&vendor_sdl2, Path::new(&out_dir));
    }
}

/// Copy SDL2.dll into the profile directory (`target/<profile>`), found by
/// walking up from OUT_DIR (`target/<profile>/build/pong-simulator-*/out`).
fn copy_dll(
    vendor_sdl2: &Path,
    out_dir: &Path,
) {
    let Some(profile_dir) = out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
    else {
        return;
    };

    let src = vendor_sdl2.join("SDL2.dll");
    let dst = profile_dir.join("SDL2.dll");
    if src.exists() && !dst.exists() {
        match fs::copy(&src, &dst) {
            Ok(_) => println!("cargo:warning=Copied SDL2.dll to {}", dst.display()),
            Err(e) => println!("cargo:warning=Failed to copy SDL2.dll: {e}"),
        }
    }
}
