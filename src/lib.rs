//! Cooperative periodic task scheduler for small control loops
//!
//! A minimal firmware core providing:
//! - Run-to-completion periodic task dispatch against a millisecond clock
//! - A deterministic first-fit memory pool with a per-byte occupancy map
//! - A lock-free status register shared between the scheduler thread
//!   and the controller thread
//! - A hardware abstraction boundary with a simulated implementation

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// ============ Critical Section ============

#[cfg(all(target_arch = "arm", target_os = "none", not(feature = "std")))]
mod cs_impl {
    use cortex_m::interrupt;
    use cortex_m::register::primask;
    use critical_section::{set_impl, Impl, RawRestoreState};

    struct SingleCoreCriticalSection;
    set_impl!(SingleCoreCriticalSection);

    unsafe impl Impl for SingleCoreCriticalSection {
        unsafe fn acquire() -> RawRestoreState {
            let was_active = primask::read().is_active();
            interrupt::disable();
            was_active
        }

        unsafe fn release(was_active: RawRestoreState) {
            if was_active {
                unsafe { interrupt::enable() }
            }
        }
    }
}

// ============ Modules ============

pub mod log;

pub mod app;
pub mod core;
pub mod hal;
pub mod port;
pub mod sync;

#[cfg(feature = "std")]
pub mod driver;

#[cfg(all(feature = "std", not(feature = "defmt")))]
#[doc(hidden)]
pub use ::log as __log;

// ============ Re-exports ============

pub use self::core::config;
pub use self::core::config::*;
pub use self::core::error;
pub use self::core::error::{OsError, OsResult};
pub use self::core::kernel;
pub use self::core::kernel::{system_init, SystemContext};
pub use self::core::occupancy;
pub use self::core::pool;
pub use self::core::pool::MemoryPool;
pub use self::core::sched;
pub use self::core::sched::Scheduler;
pub use self::core::status;
pub use self::core::status::{StatusRegister, StatusSnapshot};
pub use self::core::task;
pub use self::core::time;
pub use self::core::time::{Clock, ManualClock};
pub use self::core::types;
pub use self::core::types::*;

pub use sync::SharedPool;

#[cfg(feature = "std")]
pub use port::host::StdClock;
