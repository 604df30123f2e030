//! Port layer - platform-specific time sources
//!
//! Bare-metal targets supply their own [`crate::time::Clock`]; hosted builds
//! get one backed by the operating system.

#[cfg(feature = "std")]
pub mod host;
