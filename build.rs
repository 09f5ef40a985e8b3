#[cfg(feature = "build-lib")]
fn generate_header() {
    let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("OPENGM_SHA3_H")
        .generate()
        .expect("unable to generate C bindings")
        .write_to_file(format!("{crate_dir}/include/opengm_sha3.h"));
}

fn main() {
    println!("cargo:rerun-if-changed=src/ffi.rs");

    #[cfg(feature = "build-lib")]
    generate_header();
}
