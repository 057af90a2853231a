//! example-app - print a line every second without a runtime
//!
//! A freestanding Linux program for AArch64. It links no C library and no
//! Rust standard library: the process starts at its own `_start`, and every
//! kernel service is requested through a direct `svc #0` trap.
//!
//! # Layout
//! - `arch`: the trap trampoline and entry stub per architecture
//! - `syscall`: the `Syscall` seam, typed operations, errno decoding
//! - `app`: the write/sleep loop
//! - `console`, `logger`: diagnostics on stderr
//! - `config`: compile-time settings
//!
//! The library is `no_std`; unit tests build against std on the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod app;
pub mod arch;
pub mod config;
pub mod console;
pub mod logger;
pub mod syscall;
pub mod time;

#[cfg(test)]
mod testing;
