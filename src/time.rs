//! Time intervals in the kernel's layout

/// Nanoseconds per second
pub const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A `struct timespec` as the 64-bit Linux kernel reads and writes it.
///
/// Used both as a requested sleep duration and as the slot the kernel
/// fills with the unslept remainder.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timespec {
    /// Whole seconds
    pub tv_sec: i64,
    /// Nanoseconds, `0..NANOS_PER_SEC` for a valid request
    pub tv_nsec: i64,
}

impl Timespec {
    /// The empty interval.
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(tv_sec: i64, tv_nsec: i64) -> Self {
        Self { tv_sec, tv_nsec }
    }

    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self::new(secs, 0)
    }

    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self::new(millis / 1000, (millis % 1000) * 1_000_000)
    }

    /// Whether the kernel would accept this as a sleep request
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.tv_sec >= 0 && self.tv_nsec >= 0 && self.tv_nsec < NANOS_PER_SEC
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.tv_sec == 0 && self.tv_nsec == 0
    }
}
