#![forbid(unsafe_code)]

/// `embed_migrations!` cannot detect new or changed migration files on its
/// own, because proc-macros have no way to register external files with the
/// build system. Re-running the build whenever the migration directory
/// changes forces the macro to pick them up.
fn main() {
    println!("cargo:rerun-if-changed=./migrations");
}
