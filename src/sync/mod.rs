//! Synchronization wrappers
//!
//! The core types are single-threaded by contract. These wrappers add the
//! external synchronization needed when several threads share one.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::error::OsResult;
use crate::pool::MemoryPool;
use crate::types::PoolAddr;

/// Memory pool guarded by a critical section
///
/// Each call holds the critical section for the whole scan-then-mark
/// sequence, so concurrent callers cannot hand out overlapping ranges.
pub struct SharedPool {
    inner: Mutex<RefCell<MemoryPool>>,
}

impl SharedPool {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(MemoryPool::new())),
        }
    }

    /// Run `f` with exclusive access to the pool
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut MemoryPool) -> R,
    {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// See [`MemoryPool::allocate`]
    pub fn allocate(&self, size: usize) -> OsResult<PoolAddr> {
        self.with(|pool| pool.allocate(size))
    }

    /// See [`MemoryPool::deallocate`]
    pub fn deallocate(&self, addr: PoolAddr, size: usize) -> OsResult<()> {
        self.with(|pool| pool.deallocate(addr, size))
    }

    /// Bytes currently allocated
    pub fn used(&self) -> usize {
        self.with(|pool| pool.used())
    }

    /// Bytes currently free
    pub fn available(&self) -> usize {
        self.with(|pool| pool.available())
    }
}

impl Default for SharedPool {
    fn default() -> Self {
        Self::new()
    }
}
