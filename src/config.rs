//! Build-time configuration.
//!
//! Both sizes can be overridden when building the crate through environment variables:
//!
//! - `UNIT_TEST_MEMORY_POOL_SIZE` (default: 16 KiB)
//! - `UNIT_TEST_EXPECTATION_BUFFER_SIZE` (default: 192 bytes on 64-bit targets, 128 otherwise)
//!
//! Evaluated expressions longer than [`EXPECTATION_BUFFER_SIZE`] are silently truncated. A fixture
//! larger than [`MEMORY_POOL_SIZE`] fails to build.

include!(concat!(env!("OUT_DIR"), "/config.rs"));

/// Alignment of the fixture memory pool.
pub const MEMORY_POOL_ALIGN: usize = 16;
