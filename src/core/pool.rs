//! Deterministic fixed-size memory pool
//!
//! A byte arena of `CFG_POOL_SIZE` bytes with a parallel occupancy map.
//! Allocation is a first-fit linear scan from the lowest offset: worst case
//! `O(C * size)`, but bounded and itself allocation-free, which is what a
//! control loop needs.
//!
//! The pool does not remember allocation sizes. Callers hand the original
//! size back to [`MemoryPool::deallocate`]; a double free or a wrong size
//! silently corrupts the occupancy map. That contract is not checked here.
//!
//! The pool is not synchronized. Wrap it in [`crate::sync::SharedPool`] when
//! more than one thread can reach it.

use crate::config::CFG_POOL_SIZE;
use crate::error::{OsError, OsResult};
use crate::occupancy::OccupancyMap;
use crate::types::PoolAddr;

/// First-fit byte pool
pub struct MemoryPool {
    storage: [u8; CFG_POOL_SIZE],
    occupied: OccupancyMap,
}

impl MemoryPool {
    /// Create an empty pool
    pub const fn new() -> Self {
        Self {
            storage: [0; CFG_POOL_SIZE],
            occupied: OccupancyMap::new(),
        }
    }

    /// Allocate `size` contiguous bytes
    ///
    /// # Returns
    /// * `Ok(addr)` - Base of the first free run large enough
    /// * `Err(OsError::InvalidSize)` - `size` is zero
    /// * `Err(OsError::OutOfMemory)` - No free run of `size` bytes
    pub fn allocate(&mut self, size: usize) -> OsResult<PoolAddr> {
        if size == 0 {
            return Err(OsError::InvalidSize);
        }

        if size > CFG_POOL_SIZE {
            crate::warn!("[MEMORY] out of memory: {} bytes requested", size);
            return Err(OsError::OutOfMemory);
        }

        for start in 0..=(CFG_POOL_SIZE - size) {
            if self.occupied.is_range_clear(start, size) {
                self.occupied.set_range(start, size);
                crate::debug!("[MEMORY] allocated {} bytes at offset {}", size, start);
                return Ok(PoolAddr::new(start));
            }
        }

        crate::warn!("[MEMORY] out of memory: {} bytes requested", size);
        Err(OsError::OutOfMemory)
    }

    /// Release `size` bytes starting at `addr`
    ///
    /// A range running past the end of the pool is clamped. Freed bytes are
    /// simply eligible again on the next scan; no coalescing is needed.
    ///
    /// # Returns
    /// * `Ok(())` - Flags cleared
    /// * `Err(OsError::InvalidFree)` - `addr` outside the pool, nothing changed
    pub fn deallocate(&mut self, addr: PoolAddr, size: usize) -> OsResult<()> {
        let offset = addr.offset();
        if offset >= CFG_POOL_SIZE {
            return Err(OsError::InvalidFree);
        }

        self.occupied.clear_range(offset, size);
        crate::debug!("[MEMORY] deallocated {} bytes at offset {}", size, offset);
        Ok(())
    }

    /// Borrow `len` bytes starting at `addr`
    pub fn bytes(&self, addr: PoolAddr, len: usize) -> Option<&[u8]> {
        let start = addr.offset();
        let end = start.checked_add(len)?;
        self.storage.get(start..end)
    }

    /// Mutably borrow `len` bytes starting at `addr`
    pub fn bytes_mut(&mut self, addr: PoolAddr, len: usize) -> Option<&mut [u8]> {
        let start = addr.offset();
        let end = start.checked_add(len)?;
        self.storage.get_mut(start..end)
    }

    /// Total pool size in bytes
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        CFG_POOL_SIZE
    }

    /// Bytes currently marked occupied
    pub fn used(&self) -> usize {
        self.occupied.count_set()
    }

    /// Bytes currently free (not necessarily contiguous)
    pub fn available(&self) -> usize {
        CFG_POOL_SIZE - self.used()
    }

    /// Check whether the byte at `offset` belongs to a live allocation
    pub fn is_occupied(&self, offset: usize) -> bool {
        self.occupied.is_set(offset)
    }

    /// Length of the longest free run
    pub fn largest_free_block(&self) -> usize {
        let mut best = 0;
        let mut run = 0;
        for offset in 0..CFG_POOL_SIZE {
            if self.occupied.is_set(offset) {
                run = 0;
            } else {
                run += 1;
                best = best.max(run);
            }
        }
        best
    }
}

impl Default for MemoryPool {
    fn default() -> Self {
        Self::new()
    }
}
