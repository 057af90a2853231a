//! Link setup for the freestanding binary.
//!
//! The binary supplies its own `_start`, so the C runtime startup objects
//! must not be linked. Only bin targets get the flags; the library and the
//! test harnesses link normally.
//!
//! `-lc` only resolves the `memcpy`/`memset` family that `core` calls into.
//! It is dropped by `--as-needed` when nothing references it, and no libc
//! startup or I/O code is ever called.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/arch/aarch64/entry.S");
    println!("cargo:rerun-if-changed=src/arch/x86_64/entry.S");

    let os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if os == "linux" {
        println!("cargo:rustc-link-arg-bins=-nostartfiles");
        println!("cargo:rustc-link-arg-bins=-lc");
    }
}
