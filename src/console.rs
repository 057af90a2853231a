//! Diagnostic console on a file descriptor
//!
//! Formatted output for logs and panic reports. Everything here goes to
//! stderr, leaving stdout carrying only the program's message.
//!
//! Unlike the main loop, the console does finish short writes: a log line
//! cut in half is useless. It still never reports failure to the caller.

use core::fmt::{self, Write};
use spin::Mutex;

use crate::syscall::{self, Errno, Fd, Kernel, Syscall};

/// Line writer bound to one descriptor
pub struct Console<S: Syscall = Kernel> {
    sys: S,
    fd: Fd,
}

impl<S: Syscall> Console<S> {
    pub const fn new(sys: S, fd: Fd) -> Self {
        Self { sys, fd }
    }

    /// Write all of `bytes`, stopping silently at the first error
    pub fn write_bytes(&self, mut bytes: &[u8]) {
        while !bytes.is_empty() {
            match Errno::from_ret(syscall::write(&self.sys, self.fd, bytes)) {
                Ok(0) => return,
                Ok(n) => bytes = &bytes[n.min(bytes.len())..],
                Err(Errno::EINTR) => continue,
                Err(_) => return,
            }
        }
    }
}

impl<S: Syscall> Write for Console<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}

/// Global stderr console protected by spinlock
pub static STDERR: Mutex<Console> = Mutex::new(Console::new(Kernel, Fd::STDERR));

/// Print to the stderr console
#[macro_export]
macro_rules! cprint {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut console = $crate::console::STDERR.lock();
        let _ = write!(console, $($arg)*);
    }};
}

/// Print a line to the stderr console
#[macro_export]
macro_rules! cprintln {
    () => {
        $crate::cprint!("\n")
    };
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut console = $crate::console::STDERR.lock();
        let _ = write!(console, $($arg)*);
        let _ = console.write_str("\n");
    }};
}
