//! The print-and-sleep loop

use crate::config;
use crate::syscall::{self, Syscall};
use crate::time::Timespec;

/// Run forever: print the message, sleep, repeat
pub fn run<S: Syscall + ?Sized>(sys: &S) -> ! {
    log::info!(
        "writing {} bytes to fd {} every {}.{:09}s",
        config::MESSAGE.len(),
        config::OUTPUT.0,
        config::INTERVAL.tv_sec,
        config::INTERVAL.tv_nsec
    );

    loop {
        tick(sys);
    }
}

/// One iteration: a single write request followed by a single sleep request
///
/// Both results are discarded on purpose. A failed or short write is not
/// retried, and an interrupted sleep is not resumed from the remainder.
#[inline]
pub fn tick<S: Syscall + ?Sized>(sys: &S) {
    let _ = syscall::write(sys, config::OUTPUT, config::MESSAGE);

    let mut remaining = Timespec::ZERO;
    let _ = syscall::nanosleep(sys, &config::INTERVAL, &mut remaining);
}
