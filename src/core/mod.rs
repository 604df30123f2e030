//! Core firmware modules
//!
//! Contains the scheduler, task table, memory pool, status register and
//! time sources.

pub mod config;
pub mod error;
pub mod kernel;
pub mod occupancy;
pub mod pool;
pub mod sched;
pub mod status;
pub mod task;
pub mod time;
pub mod types;
