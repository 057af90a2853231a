//! Compile-time settings
//!
//! There is no runtime configuration: no arguments, environment or files
//! are read.

use log::LevelFilter;

use crate::syscall::Fd;
use crate::time::Timespec;

/// Bytes emitted on every iteration, exactly as written to the stream
pub const MESSAGE: &[u8; 20] = b"Example Application\n";

/// Destination of [`MESSAGE`]
pub const OUTPUT: Fd = Fd::STDOUT;

/// Requested pause between messages
pub const INTERVAL: Timespec = Timespec::from_secs(1);

/// Most verbose level the stderr logger prints
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
