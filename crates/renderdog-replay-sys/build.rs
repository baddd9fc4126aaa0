//! Build script for renderdog-replay-sys.
//!
//! Writes `OUT_DIR/bindings.rs`, either from bindgen (feature `bindgen`) or from the checked-in
//! `src/bindings_pregenerated.rs`. With the `shim` feature it also compiles the C++ shim against
//! RenderDoc's replay headers and links `renderdoc`.

use std::env;
use std::error::Error;
use std::path::PathBuf;

const HEADER: &str = "include/renderdog_replay.h";
const PREGENERATED: &str = "src/bindings_pregenerated.rs";
const REGEN_ENV: &str = "RENDERDOG_REPLAY_SYS_REGEN_BINDINGS";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed={HEADER}");
    println!("cargo:rerun-if-changed={PREGENERATED}");
    println!("cargo:rerun-if-env-changed={REGEN_ENV}");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let bindings = out_dir.join("bindings.rs");

    #[cfg(feature = "bindgen")]
    generate_bindings(&bindings)?;
    #[cfg(not(feature = "bindgen"))]
    std::fs::copy(PREGENERATED, &bindings)?;

    #[cfg(feature = "shim")]
    compile_shim()?;

    Ok(())
}

#[cfg(feature = "bindgen")]
fn generate_bindings(out: &std::path::Path) -> Result<(), Box<dyn Error>> {
    let generated = bindgen::Builder::default()
        .header(HEADER)
        .allowlist_function("renderdoc_.*")
        .allowlist_type("pRENDERDOC_.*|prenderdoc_.*|renderdoc_.*")
        .blocklist_type("rdctype_.*")
        .default_enum_style(bindgen::EnumVariation::Consts)
        .prepend_enum_name(false)
        .layout_tests(false)
        .derive_default(true)
        .derive_partialeq(true)
        .derive_eq(true)
        .merge_extern_blocks(true)
        .rust_edition(bindgen::RustEdition::Edition2024)
        .generate()?;

    generated.write_to_file(out)?;

    if env::var_os(REGEN_ENV).is_some() {
        generated.write_to_file(PREGENERATED)?;
        println!("cargo:warning=Regenerated {PREGENERATED}");
    }
    Ok(())
}

#[cfg(feature = "shim")]
fn compile_shim() -> Result<(), Box<dyn Error>> {
    const SHIM_SOURCE: &str = "shim/replay_shim.cpp";
    const RENDERDOC_INCLUDE_ENV: &str = "RENDERDOC_REPLAY_INCLUDE";
    const RENDERDOC_LIB_DIR_ENV: &str = "RENDERDOC_REPLAY_LIB_DIR";

    println!("cargo:rerun-if-changed={SHIM_SOURCE}");
    println!("cargo:rerun-if-env-changed={RENDERDOC_INCLUDE_ENV}");
    println!("cargo:rerun-if-env-changed={RENDERDOC_LIB_DIR_ENV}");

    let renderdoc_include = env::var(RENDERDOC_INCLUDE_ENV).map_err(|_| {
        format!("{RENDERDOC_INCLUDE_ENV} must point at RenderDoc's renderdoc/api/replay directory")
    })?;

    let mut build = cc::Build::new();
    build
        .cpp(true)
        .pic(true)
        .std("c++14")
        .include("include")
        .include(&renderdoc_include)
        .file(SHIM_SOURCE);

    match env::var("CARGO_CFG_TARGET_OS")?.as_str() {
        "windows" => {
            build
                .define("RENDERDOC_PLATFORM_WIN32", None)
                .define("RENDERDOC_WINDOWING_WIN32", None);
        }
        "android" => {
            build
                .define("RENDERDOC_PLATFORM_ANDROID", None)
                .define("RENDERDOC_WINDOWING_ANDROID", None);
        }
        "macos" => {
            build.define("RENDERDOC_PLATFORM_APPLE", None);
        }
        _ => {
            build
                .define("RENDERDOC_PLATFORM_LINUX", None)
                .define("RENDERDOC_WINDOWING_XLIB", None)
                .define("RENDERDOC_WINDOWING_XCB", None);
        }
    }

    build.try_compile("renderdog_replay_shim")?;

    if let Ok(dir) = env::var(RENDERDOC_LIB_DIR_ENV) {
        println!("cargo:rustc-link-search=native={dir}");
    }
    println!("cargo:rustc-link-lib=dylib=renderdoc");
    Ok(())
}
