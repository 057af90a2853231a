//! Host-side test doubles for the syscall seam

use std::cell::RefCell;

use crate::syscall::{numbers, Syscall};
use crate::time::Timespec;

/// One request observed by a [`Recorder`], with pointed-to data copied out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Write { fd: i32, bytes: Vec<u8>, len: usize },
    Nanosleep { req: Timespec, rem_ptr: usize, a2: usize },
    Other { num: usize, args: [usize; 3] },
}

/// How the fake kernel answers a sleep request
#[derive(Debug, Clone, Copy)]
enum SleepMode {
    Complete,
    Interrupted(Timespec),
}

/// Records every request instead of trapping
pub struct Recorder {
    calls: RefCell<Vec<Call>>,
    ret: isize,
    sleep: SleepMode,
}

impl Recorder {
    /// Answer every request with `ret`.
    pub fn returning(ret: isize) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            ret,
            sleep: SleepMode::Complete,
        }
    }

    /// Answer every request with EINTR, storing `remaining` in the output
    /// slot of sleeps.
    pub fn interrupting(remaining: Timespec) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            ret: -4,
            sleep: SleepMode::Interrupted(remaining),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Syscall for Recorder {
    unsafe fn syscall3(&self, num: usize, a0: usize, a1: usize, a2: usize) -> isize {
        let call = match num {
            numbers::WRITE => {
                // SAFETY: callers pass a live slice
                let bytes = unsafe { core::slice::from_raw_parts(a1 as *const u8, a2) };
                Call::Write {
                    fd: a0 as isize as i32,
                    bytes: bytes.to_vec(),
                    len: a2,
                }
            }
            numbers::NANOSLEEP => {
                // SAFETY: callers pass live Timespec references
                let req = unsafe { *(a0 as *const Timespec) };
                if let SleepMode::Interrupted(remaining) = self.sleep {
                    unsafe { *(a1 as *mut Timespec) = remaining };
                }
                Call::Nanosleep {
                    req,
                    rem_ptr: a1,
                    a2,
                }
            }
            _ => Call::Other {
                num,
                args: [a0, a1, a2],
            },
        };
        self.calls.borrow_mut().push(call);
        self.ret
    }
}
