//! Error types for the firmware core
//!
//! Uses Rust's Result pattern instead of status pointers. A task that never
//! returns stalls the scheduler; that failure is neither detected nor
//! reported, so it has no variant here.

/// Firmware error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum OsError {
    // ============ Memory errors ============
    /// No contiguous free run of the requested size
    #[error("out of memory")]
    OutOfMemory = 22202,
    /// Address outside the pool
    #[error("address outside pool bounds")]
    InvalidFree = 22203,
    /// Zero-byte allocation requested
    #[error("invalid allocation size")]
    InvalidSize = 22204,

    // ============ Scheduler errors ============
    /// Scheduler has already started dispatching
    #[error("scheduler already running")]
    SchedRunning = 28001,
    /// Scheduler has already stopped
    #[error("scheduler stopped")]
    SchedStopped = 28002,

    // ============ Task errors ============
    /// Task table is full
    #[error("task table capacity exceeded")]
    CapacityExceeded = 29008,
    /// Task period must be non-zero
    #[error("invalid task period")]
    InvalidPeriod = 29009,

    // ============ Driver errors ============
    /// Scheduler thread unwound instead of returning
    #[error("scheduler thread panicked")]
    WorkerPanicked = 30001,
}

/// Result type alias for firmware operations
pub type OsResult<T> = Result<T, OsError>;

impl OsError {
    /// Numeric error code
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }
}
