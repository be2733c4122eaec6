fn main() {
    // ── libvips linking ──────────────────────────────────────────────────────
    //
    // The libvips-rs bindings crate ships no build script of its own, so the
    // binaries and the test harness must be told where libvips lives.
    //
    // Linux: the system libvips-dev package is sufficient.
    // macOS: Homebrew's `vips` formula, or a tree pointed to by VIPS_DIR.
    // Windows: extract vips-dev-w64-web-*.zip and point VIPS_DIR at it.
    link_libvips();
}

fn link_libvips() {
    // Re-run whenever the override env-var changes.
    println!("cargo:rerun-if-env-changed=VIPS_DIR");
    println!("cargo:rerun-if-changed=build.rs");

    let lib_dir = std::env::var("VIPS_DIR")
        .ok()
        .map(|dir| std::path::Path::new(&dir).join("lib"));

    if let Some(lib_dir) = lib_dir.as_ref() {
        if lib_dir.exists() {
            println!("cargo:rustc-link-search=native={}", lib_dir.display());
        } else {
            println!(
                "cargo:warning=VIPS_DIR is set but '{}' does not exist; falling back to the system libvips",
                lib_dir.display()
            );
        }
    }

    if cfg!(target_os = "windows") {
        // GLib symbols (g_free, g_object_unref, …) called directly by
        // libvips_rs's image.rs must also be explicitly linked.
        println!("cargo:rustc-link-lib=dylib=libvips");
        println!("cargo:rustc-link-lib=dylib=libglib-2.0");
        println!("cargo:rustc-link-lib=dylib=libgobject-2.0");
    } else {
        println!("cargo:rustc-link-lib=dylib=vips");
        println!("cargo:rustc-link-lib=dylib=glib-2.0");
        println!("cargo:rustc-link-lib=dylib=gobject-2.0");
    }
}
